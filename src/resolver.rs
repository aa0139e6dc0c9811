//! Parent resolution over the record of directories seen so far.

use std::path::PathBuf;

/// A directory already placed by the walker, with the depth it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryEntry {
    pub path: PathBuf,
    pub depth: usize,
}

/// Append-only record of placed directories, in template order.
#[derive(Debug, Clone, Default)]
pub struct Ancestry {
    entries: Vec<AncestryEntry>,
}

impl Ancestry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, depth: usize) {
        self.entries.push(AncestryEntry {
            path: path.into(),
            depth,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AncestryEntry] {
        &self.entries
    }
}

/// Finds the path of the nearest enclosing directory for `name` at `depth`.
///
/// Walks the ancestry from the most recent entry backwards and stops at the
/// first one that is strictly shallower. Entries at the same depth or deeper
/// are siblings (or their descendants) and are skipped. Returns `None` when no
/// entry qualifies, meaning the directory sits at the root of the template.
///
/// Each call is a linear scan, so a whole template costs O(n²) in the worst
/// case. Irregular indentation depends on this exact rule, so there is no
/// per-depth index.
pub fn resolve_parent(ancestry: &Ancestry, name: &str, depth: usize) -> Option<PathBuf> {
    ancestry
        .entries
        .iter()
        .rev()
        .find(|entry| entry.depth < depth)
        .map(|entry| entry.path.join(name))
}
