use std::path::{Path, PathBuf};

use crate::adapters::EmbeddedTemplates;
use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner> {
    runner: R,
    templates: EmbeddedTemplates,
    root: PathBuf,
}

impl<R: CommandRunner> AppContext<R> {
    /// Create a new application context writing under `root`.
    pub fn new(runner: R, root: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self { runner, templates: EmbeddedTemplates::new()?, root: root.into() })
    }

    /// Get a reference to the host command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the embedded templates.
    pub fn templates(&self) -> &EmbeddedTemplates {
        &self.templates
    }

    /// Root prefix every target-host path is written under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
