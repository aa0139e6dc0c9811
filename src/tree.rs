//! Rendering a path list back into the ASCII template dialect.

use std::path::{Path, PathBuf};

/// Builds a template from a list of generated paths.
///
/// Paths are made relative to `parent` when they live under it. The first
/// level is written as `-name`, every deeper level as `+-name` indented by two
/// more spaces, so the output parses back to the same paths.
pub fn render_tree(paths: &[PathBuf], parent: Option<&Path>) -> String {
    let parent = parent.unwrap_or(Path::new(""));
    let mut sorted: Vec<&Path> = paths
        .iter()
        .map(|p| p.strip_prefix(parent).unwrap_or(p))
        .collect();
    sorted.sort_by(|a, b| a.components().cmp(b.components()));

    let mut lines = Vec::with_capacity(sorted.len());
    for entry in sorted {
        let depth = entry.components().count();
        let Some(name) = entry.file_name() else {
            continue;
        };
        let name = name.to_string_lossy();
        let line = if depth <= 1 {
            format!("-{}", name)
        } else {
            format!("{}+-{}", "  ".repeat(depth - 1), name)
        };
        lines.push(line);
    }

    lines.join("\n")
}
