use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What happened to a single directory during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum Generated {
    /// The directory was created.
    Created(PathBuf),
    /// The directory was already there and was left alone.
    Exists(PathBuf),
}

impl Generated {
    /// The path this outcome refers to.
    pub fn path(&self) -> &Path {
        match self {
            Generated::Created(path) | Generated::Exists(path) => path,
        }
    }
}

/// The complete result of a dirge run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DirgeResult {
    /// Every path the template describes, sorted.
    pub paths: Vec<PathBuf>,
    /// Directories created by this run. Empty when simulating.
    pub created: Vec<PathBuf>,
    /// Directories that already existed and were skipped.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub existing: Vec<PathBuf>,
}
