use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirgeOptions {
    pub template: PathBuf,
    pub parent: Option<PathBuf>,
    pub simulate: bool,
    pub verbose: bool,
}
#[derive(Debug, Default)]
pub struct DirgeBuilder {
    options: DirgeOptions,
}
impl DirgeBuilder {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            options: DirgeOptions {
                template: template.into(),
                ..Default::default()
            },
        }
    }
    pub fn parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.options.parent = Some(parent.into());
        self
    }
    pub fn no_parent(mut self) -> Self {
        self.options.parent = None;
        self
    }
    pub fn simulate(mut self, yes: bool) -> Self {
        self.options.simulate = yes;
        self
    }
    pub fn verbose(mut self, yes: bool) -> Self {
        self.options.verbose = yes;
        self
    }
    pub fn build(self) -> DirgeOptions {
        self.options
    }
}
