use crate::error::DirgeError;
use crate::options::DirgeOptions;
use crate::types::{DirgeResult, Generated};
use crate::walker::TreeWalker;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Reads a template file and determines the paths it describes.
///
/// The file is opened and closed here; the walker only ever sees its lines.
pub fn read_template(
    template: impl AsRef<Path>,
    parent: Option<&Path>,
) -> Result<Vec<PathBuf>, DirgeError> {
    let template = template.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Reading template: {}", template.display());
    let file = File::open(template).map_err(|e| DirgeError::io(template, e))?;
    let mut walker = TreeWalker::new(parent);
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| DirgeError::io(template, e))?;
        walker.feed(&line);
    }
    Ok(walker.finish())
}

/// Creates directories one at a time, in the order given.
///
/// Each directory is created with a single non-recursive `create_dir`, so a
/// parent must come before its children (sorted template output guarantees
/// this). A directory that already exists yields [`Generated::Exists`]; any
/// other failure is yielded as an error and ends the stream.
pub struct DirgeStream {
    paths: std::vec::IntoIter<PathBuf>,
    failed: bool,
}

impl DirgeStream {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
            failed: false,
        }
    }
}

impl Iterator for DirgeStream {
    type Item = Result<Generated, DirgeError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let path = self.paths.next()?;
        match fs::create_dir(&path) {
            Ok(()) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Created {}", path.display());
                Some(Ok(Generated::Created(path)))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                #[cfg(feature = "logging")]
                tracing::info!("{} exists, skipping", path.display());
                Some(Ok(Generated::Exists(path)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(DirgeError::create(path, e)))
            }
        }
    }
}

/// Generates the directories described by `options.template`.
///
/// When `options.simulate` is set nothing is created and only
/// [`DirgeResult::paths`] is filled in.
pub fn dirge(options: DirgeOptions) -> Result<DirgeResult, DirgeError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting dirge with template: {}", options.template.display());
    let paths = read_template(&options.template, options.parent.as_deref())?;
    if options.simulate {
        return Ok(DirgeResult {
            paths,
            ..Default::default()
        });
    }
    let mut result = DirgeResult {
        paths: paths.clone(),
        ..Default::default()
    };
    for generated in DirgeStream::new(paths) {
        match generated? {
            Generated::Created(path) => result.created.push(path),
            Generated::Exists(path) => result.existing.push(path),
        }
    }
    Ok(result)
}
