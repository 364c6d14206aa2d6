use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    #[error("no content.json or content.yaml found in {0}")]
    ContentNotFound(PathBuf),

    #[error("invalid content file {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("duplicate project id `{0}` in content file")]
    DuplicateProject(String),

    #[error("no projects defined in {0}")]
    EmptyContent(PathBuf),

    #[error("invalid markdown file name `{0}`")]
    InvalidFileName(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
