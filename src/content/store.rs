//! Markdown store — keyed async access to the long-form project texts,
//! scoped to the `projects/` directory of the content bundle.

use std::path::{Path, PathBuf};

use crate::content::error::ContentError;

#[derive(Debug, Clone)]
pub struct MarkdownStore {
    dir: PathBuf,
}

impl MarkdownStore {
    /// `content_dir` is the bundle root; texts live under its `projects/`
    /// subdirectory.
    pub fn new(content_dir: &Path) -> Self {
        Self {
            dir: content_dir.join("projects"),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a markdown file by bare name. Names carrying path components
    /// are rejected — the store never reaches outside its directory.
    pub async fn read(&self, name: &str) -> Result<String, ContentError> {
        if !is_bare_file_name(name) {
            return Err(ContentError::InvalidFileName(name.to_string()));
        }
        let path = self.dir.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ContentError::Io { path, source: e })
    }
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_file_names() {
        assert!(is_bare_file_name("alpha.md"));
        assert!(is_bare_file_name("heliostat-controller.md"));
        assert!(!is_bare_file_name(""));
        assert!(!is_bare_file_name(".."));
        assert!(!is_bare_file_name("../etc/passwd"));
        assert!(!is_bare_file_name("sub/dir.md"));
        assert!(!is_bare_file_name("sub\\dir.md"));
    }

    #[tokio::test]
    async fn test_read_rejects_escaping_names() {
        let store = MarkdownStore::new(Path::new("/nonexistent"));
        let err = store.read("../secret.md").await.unwrap_err();
        assert!(matches!(err, ContentError::InvalidFileName(_)));
    }
}
