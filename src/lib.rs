//! # Dirge
//!
//! `dirge` is a directory generator. It reads a plain-text, indentation or
//! ASCII-art picture of a directory tree and turns it into the ordered list of
//! paths that picture describes, then optionally creates them.
//!
//! ```text
//! -path
//!   |
//!   +-along
//!   |  |
//!   |  `-down
//!   |
//!   `-for
//! ```
//!
//! Each line holding a name is placed under the nearest earlier line that is
//! indented strictly less. Lines without a name (blank lines, `|` rails) are
//! ignored. Connector hyphens right before a name (`+-`, `` `- ``) do not count
//! as indentation.
//!
//! Template parsing ([`determine_paths`], [`parse_line`], [`resolve_parent`])
//! is pure and never fails. Only [`read_template`] and directory creation
//! ([`dirge`], [`DirgeStream`]) touch the filesystem.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirge::{DirgeBuilder, dirge};
//!
//! let options = DirgeBuilder::new("layout.txt")
//!     .parent("build")
//!     .simulate(true)
//!     .build();
//!
//! let result = dirge(options).expect("Failed to read template");
//! for path in result.paths {
//!     println!("{}", path.display());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod resolver;
mod tokenizer;
mod tree;
mod types;
mod walker;

pub use engine::{DirgeStream, dirge, read_template};
pub use error::DirgeError;
pub use options::{DirgeBuilder, DirgeOptions};
pub use resolver::{Ancestry, AncestryEntry, resolve_parent};
pub use tokenizer::{Token, parse_line};
pub use tree::render_tree;
pub use types::{DirgeResult, Generated};
pub use walker::{TreeWalker, determine_paths, determine_paths_from_str};
