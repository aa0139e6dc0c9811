//! Output formatting for generated paths.
//!
//! Provides functions to format a path list as plain lines, as a re-parseable
//! tree template, or as JSON.

use crate::DirgeError;
use crate::tree::render_tree;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Paths,
    Tree,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Paths | OutputFormat::Tree => "txt",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct JsonPaths<'a> {
    parent: Option<&'a Path>,
    paths: &'a [PathBuf],
}

/// Formats the generated paths into a string.
///
/// `parent` is the prefix the paths were generated under; the tree format
/// renders relative to it.
pub fn format_paths(
    paths: &[PathBuf],
    parent: Option<&Path>,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, DirgeError> {
    match format {
        OutputFormat::Paths => Ok(format_lines(paths)),
        OutputFormat::Tree => {
            let mut out = render_tree(paths, parent);
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => format_json(&JsonPaths { parent, paths }, pretty),
    }
}

fn format_lines(paths: &[PathBuf]) -> String {
    let mut out = String::with_capacity(paths.len() * 16);
    for path in paths {
        out.push_str(&path.display().to_string());
        out.push('\n');
    }
    out
}

fn format_json(value: &impl Serialize, pretty: bool) -> Result<String, DirgeError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
