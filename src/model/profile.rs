use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProjectId — newtype for type safety
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// DetailSource — where a project's long-form text comes from
// ---------------------------------------------------------------------------

/// A project's long-form text is either bundled inline in the content file
/// or referenced by markdown filename, depending on the content version.
/// The loader resolves either form; everything downstream sees a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSource {
    Inline(String),
    File(String),
}

// ---------------------------------------------------------------------------
// Project — one entry in the registry
// ---------------------------------------------------------------------------

/// Immutable once loaded. The full set is built at startup and never
/// mutated; see `content::Portfolio`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub date: String,
    /// Markdown filename within the content dir's `projects/` directory.
    /// Takes precedence over `long_description` when both are present.
    #[serde(default)]
    pub markdown_file: Option<String>,
    /// Inline long-form text, used by older content files.
    #[serde(default)]
    pub long_description: Option<String>,
}

impl Project {
    /// The tagged detail source this project's fields denote, if any.
    pub fn detail_source(&self) -> Option<DetailSource> {
        if let Some(name) = &self.markdown_file {
            return Some(DetailSource::File(name.clone()));
        }
        self.long_description
            .as_ref()
            .map(|text| DetailSource::Inline(text.clone()))
    }
}

// ---------------------------------------------------------------------------
// Experience / Education / Certification / TechnicalSkill
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub location: String,
    pub period: String,
    /// Ordered bullet points.
    pub description: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkill {
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Profile — name, headline and contact details for the title bar,
// home view and contact view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub email: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}
