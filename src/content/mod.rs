//! Content repository — the immutable portfolio built once at startup.
//!
//! Loads `content.json` or `content.yaml` from the content directory and
//! validates it into a `Portfolio` value that is passed by reference to
//! the router, loader and renderer. Nothing mutates it after startup.

pub mod error;
pub mod loader;
pub mod store;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::model::{
    Certification, Education, Experience, Profile, Project, ProjectId, TechnicalSkill,
};

pub use error::ContentError;
pub use loader::resolve_detail;
pub use store::MarkdownStore;

// ---------------------------------------------------------------------------
// Raw content file schema
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawContent {
    #[serde(default)]
    profile: Option<Profile>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    experiences: Vec<Experience>,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(default)]
    certifications: Vec<Certification>,
    #[serde(default)]
    skills: Vec<TechnicalSkill>,
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<TechnicalSkill>,
    index: HashMap<ProjectId, usize>,
}

impl Portfolio {
    /// Keyed lookup. `None` for ids not in the content set — callers
    /// degrade to the default view rather than erroring.
    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.index.get(id).map(|&i| &self.projects[i])
    }

    /// Projects in content-file order; the registry view renders this
    /// directly.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Build a portfolio from projects alone, with empty ancillary
    /// sections. Intended for tests.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let index = build_index(&projects).expect("unique project ids");
        Self {
            profile: Profile::default(),
            projects,
            experiences: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            skills: Vec::new(),
            index,
        }
    }

    fn from_raw(raw: RawContent, path: &Path) -> Result<Self, ContentError> {
        if raw.projects.is_empty() {
            return Err(ContentError::EmptyContent(path.to_path_buf()));
        }
        let index = build_index(&raw.projects)?;
        Ok(Self {
            profile: raw.profile.unwrap_or_default(),
            projects: raw.projects,
            experiences: raw.experiences,
            education: raw.education,
            certifications: raw.certifications,
            skills: raw.skills,
            index,
        })
    }
}

fn build_index(projects: &[Project]) -> Result<HashMap<ProjectId, usize>, ContentError> {
    let mut index = HashMap::with_capacity(projects.len());
    for (i, project) in projects.iter().enumerate() {
        if index.insert(project.id.clone(), i).is_some() {
            return Err(ContentError::DuplicateProject(project.id.to_string()));
        }
    }
    Ok(index)
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the portfolio from a content directory. Tries `content.json`
/// first, then `content.yaml`.
pub fn load_portfolio(content_dir: &Path) -> Result<Portfolio, ContentError> {
    let json_path = content_dir.join("content.json");
    let yaml_path = content_dir.join("content.yaml");

    if json_path.exists() {
        let content = std::fs::read_to_string(&json_path).map_err(|e| ContentError::Io {
            path: json_path.clone(),
            source: e,
        })?;
        debug!(path = %json_path.display(), "loading JSON content");
        return parse_json_content(&content, &json_path);
    }

    if yaml_path.exists() {
        let content = std::fs::read_to_string(&yaml_path).map_err(|e| ContentError::Io {
            path: yaml_path.clone(),
            source: e,
        })?;
        debug!(path = %yaml_path.display(), "loading YAML content");
        return parse_yaml_content(&content, &yaml_path);
    }

    Err(ContentError::ContentNotFound(content_dir.to_path_buf()))
}

/// Parse JSON content. Separated from `load_portfolio` for testability.
pub fn parse_json_content(content: &str, path: &Path) -> Result<Portfolio, ContentError> {
    let raw: RawContent = serde_json::from_str(content).map_err(|e| ContentError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Portfolio::from_raw(raw, path)
}

/// Parse YAML content.
pub fn parse_yaml_content(content: &str, path: &Path) -> Result<Portfolio, ContentError> {
    let raw: RawContent = serde_yaml::from_str(content).map_err(|e| ContentError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Portfolio::from_raw(raw, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JSON: &str = r#"{
        "projects": [
            {"id": "alpha", "title": "Alpha", "category": "Firmware",
             "description": "Alpha desc", "markdownFile": "alpha.md"},
            {"id": "beta", "title": "Beta", "category": "Tooling",
             "description": "Beta desc"}
        ]
    }"#;

    #[test]
    fn test_parse_minimal_json() {
        let portfolio = parse_json_content(MINIMAL_JSON, Path::new("content.json")).unwrap();
        assert_eq!(portfolio.projects().len(), 2);
        assert!(portfolio.project(&ProjectId::new("alpha")).is_some());
        assert!(portfolio.project(&ProjectId::new("gamma")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"projects": [
            {"id": "alpha", "title": "A", "category": "C", "description": "d"},
            {"id": "alpha", "title": "B", "category": "C", "description": "d"}
        ]}"#;
        let err = parse_json_content(json, Path::new("content.json")).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProject(id) if id == "alpha"));
    }

    #[test]
    fn test_empty_projects_rejected() {
        let err = parse_json_content(r#"{"projects": []}"#, Path::new("content.json"))
            .unwrap_err();
        assert!(matches!(err, ContentError::EmptyContent(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_json_content("{not json", Path::new("content.json")).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
profile:
  name: Ada Okafor
  headline: Embedded Systems Engineer
  email: ada@example.net
projects:
  - id: alpha
    title: Alpha
    category: Firmware
    description: Alpha desc
skills:
  - name: Rust
    description: Daily driver
"#;
        let portfolio = parse_yaml_content(yaml, Path::new("content.yaml")).unwrap();
        assert_eq!(portfolio.profile.name, "Ada Okafor");
        assert_eq!(portfolio.projects().len(), 1);
        assert_eq!(portfolio.skills.len(), 1);
    }
}
