//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{DialoguerPrompter, DryRunRunner, EmbeddedTemplates, SystemCommandRunner};
use crate::app::config::load_request_file;
use crate::app::{
    AppContext,
    commands::{collect, env, provision, render},
};
use crate::domain::{ProvisioningRequest, RequestDraft};
use crate::ports::{CommandRunner, Prompter};

pub use crate::app::commands::env::EnvOutcome;
pub use crate::app::commands::render::Artifact;
pub use crate::domain::{AppError, ProvisionReport};

/// Inputs for one `provision` invocation.
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Values given as flags. They win over the config file.
    pub draft: RequestDraft,
    pub config: Option<PathBuf>,
    /// Prefix every host path is written under.
    pub root: PathBuf,
    /// Log commands instead of running them.
    pub dry_run: bool,
    /// Prompt for values still missing after flags and config file.
    pub interactive: bool,
}

impl Default for ProvisionOptions {
    fn default() -> Self {
        Self {
            draft: RequestDraft::default(),
            config: None,
            root: PathBuf::from("/"),
            dry_run: false,
            interactive: false,
        }
    }
}

/// Merge flags with the config file and, when interactive, prompt for the rest.
pub fn collect_request(
    draft: RequestDraft,
    config: Option<&Path>,
    interactive: bool,
) -> Result<ProvisioningRequest, AppError> {
    let draft = match config {
        Some(path) => draft.or(load_request_file(path)?),
        None => draft,
    };
    let prompter = DialoguerPrompter::new();
    let prompter: Option<&dyn Prompter> = if interactive { Some(&prompter) } else { None };
    collect::collect(draft, prompter)
}

/// Provision this host.
///
/// `Err` is returned only for problems found before the run starts (bad
/// flags, unreadable config file); failures during the run are reported in
/// the returned report.
pub fn provision(options: ProvisionOptions) -> Result<ProvisionReport, AppError> {
    if options.dry_run && is_host_root(&options.root) {
        return Err(AppError::validation(
            "root",
            "a dry run writes files, so it needs a staging directory other than /",
        ));
    }
    let request = collect_request(options.draft, options.config.as_deref(), options.interactive)?;
    if options.dry_run {
        provision_with(DryRunRunner::new(), options.root, request)
    } else {
        provision_with(SystemCommandRunner::new(), options.root, request)
    }
}

fn is_host_root(root: &Path) -> bool {
    std::fs::canonicalize(root).map(|path| path == Path::new("/")).unwrap_or(root == Path::new("/"))
}

/// Provision with a caller-supplied command runner.
pub fn provision_with<R: CommandRunner>(
    runner: R,
    root: impl Into<PathBuf>,
    request: ProvisioningRequest,
) -> Result<ProvisionReport, AppError> {
    let ctx = AppContext::new(runner, root)?;
    Ok(provision::execute(&ctx, request))
}

/// Render the service unit or the proxy vhost for the given values.
pub fn render(
    draft: RequestDraft,
    config: Option<&Path>,
    artifact: Artifact,
) -> Result<String, AppError> {
    let request = collect_request(draft, config, false)?;
    render::execute(&EmbeddedTemplates::new()?, request, artifact)
}

/// Confirm a credentials file and optionally run `command` with it loaded.
pub fn env(path: &Path, command: &[String]) -> Result<EnvOutcome, AppError> {
    let catalog = EmbeddedTemplates::new()?.credential_catalog()?;
    env::execute(path, &catalog, command)
}
