//! Drives a whole template through the tokenizer and resolver.

use crate::resolver::{Ancestry, resolve_parent};
use crate::tokenizer::parse_line;
use std::path::{Path, PathBuf};

/// Line-by-line state for turning a template into paths.
///
/// Each walker owns its ancestry and output, so independent walkers can run on
/// separate threads without coordination.
#[derive(Debug, Default)]
pub struct TreeWalker {
    parent: PathBuf,
    ancestry: Ancestry,
    paths: Vec<PathBuf>,
}

impl TreeWalker {
    /// Creates a walker. Root-level directories are placed under `parent`.
    pub fn new(parent: Option<&Path>) -> Self {
        Self {
            parent: parent.map(Path::to_path_buf).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Consumes one template line. Lines without a directory leave the walker untouched.
    pub fn feed(&mut self, line: &str) {
        let Some(token) = parse_line(line) else {
            return;
        };
        let path = resolve_parent(&self.ancestry, token.name, token.depth)
            .unwrap_or_else(|| self.parent.join(token.name));
        #[cfg(feature = "logging")]
        tracing::trace!(depth = token.depth, path = %path.display(), "placed directory");
        self.ancestry.push(path.clone(), token.depth);
        self.paths.push(path);
    }

    /// Returns the paths in template order, before sorting.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Finishes the walk and returns every path, sorted by its string form.
    ///
    /// Duplicates are kept: two lines naming the same path both appear.
    pub fn finish(self) -> Vec<PathBuf> {
        let mut paths = self.paths;
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        paths
    }
}

/// Determines the list of paths a template describes.
///
/// `parent` prefixes only the directories that have no parent inside the
/// template itself.
pub fn determine_paths<I, S>(lines: I, parent: Option<&Path>) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut walker = TreeWalker::new(parent);
    for line in lines {
        walker.feed(line.as_ref());
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Template yielded {} paths", walker.paths().len());
    walker.finish()
}

/// Same as [`determine_paths`], for a template held in memory.
///
/// ```
/// use dirge::determine_paths_from_str;
/// use std::path::Path;
///
/// let paths = determine_paths_from_str("-path\n  +-along\n  `-for\n", None);
/// assert_eq!(paths, [
///     Path::new("path").to_path_buf(),
///     Path::new("path").join("along"),
///     Path::new("path").join("for"),
/// ]);
/// ```
pub fn determine_paths_from_str(text: &str, parent: Option<&Path>) -> Vec<PathBuf> {
    determine_paths(text.lines(), parent)
}
