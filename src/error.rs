use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirgeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl DirgeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirgeError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirgeError::Create {
            path: path.into(),
            source,
        }
    }
}
