//! Detail resolution — turn a selected project into the long-form text
//! shown in the detail view.
//!
//! The only fallible operation in the system. Every failure degrades
//! silently to the project's short description; nothing here surfaces an
//! error to the user.

use tracing::warn;

use crate::content::store::MarkdownStore;
use crate::model::{DetailSource, Project};

/// Resolve the detail text for a project. Inline sources return their
/// text, file sources are read from the store, and a missing source or a
/// failed read falls back to the short description.
pub async fn resolve_detail(project: &Project, store: &MarkdownStore) -> String {
    match project.detail_source() {
        None => project.description.clone(),
        Some(DetailSource::Inline(text)) => text,
        Some(DetailSource::File(name)) => match store.read(&name).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    project_id = project.id.as_str(),
                    file = name.as_str(),
                    error = %e,
                    "detail load failed, falling back to description"
                );
                project.description.clone()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn project(extra: &str) -> Project {
        serde_json::from_str(&format!(
            r#"{{"id":"alpha","title":"Alpha","category":"Firmware",
                "description":"Alpha desc"{extra}}}"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_no_source_falls_back_to_description() {
        let store = MarkdownStore::new(Path::new("/nonexistent"));
        let text = resolve_detail(&project(""), &store).await;
        assert_eq!(text, "Alpha desc");
    }

    #[tokio::test]
    async fn test_inline_source_returned_verbatim() {
        let store = MarkdownStore::new(Path::new("/nonexistent"));
        let text = resolve_detail(
            &project(r#","longDescription":"Inline body""#),
            &store,
        )
        .await;
        assert_eq!(text, "Inline body");
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_description() {
        let store = MarkdownStore::new(Path::new("/nonexistent"));
        let text = resolve_detail(
            &project(r#","markdownFile":"alpha.md""#),
            &store,
        )
        .await;
        assert_eq!(text, "Alpha desc");
    }

    #[tokio::test]
    async fn test_file_source_read_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let projects_dir = dir.path().join("projects");
        std::fs::create_dir_all(&projects_dir).unwrap();
        std::fs::write(projects_dir.join("alpha.md"), "Alpha body text").unwrap();

        let store = MarkdownStore::new(dir.path());
        let text = resolve_detail(
            &project(r#","markdownFile":"alpha.md""#),
            &store,
        )
        .await;
        assert_eq!(text, "Alpha body text");
    }
}
