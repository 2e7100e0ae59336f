//! Load a credentials file, confirm it with redacted values and optionally
//! run a command with the keys exported.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::domain::{AppError, CredentialSpec, CredentialsFile};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOutcome {
    /// `KEY=<redacted>` per loaded key, in file order.
    pub confirmations: Vec<String>,
    /// Required catalog keys that are absent or empty.
    pub missing_required: Vec<String>,
    /// Exit code of the child command, when one was run.
    pub exit_code: Option<i32>,
}

pub fn execute(
    path: &Path,
    catalog: &[CredentialSpec],
    command: &[String],
) -> Result<EnvOutcome, AppError> {
    let content = fs::read_to_string(path)?;
    let credentials = CredentialsFile::parse(&content)?;
    debug!(path = %path.display(), keys = credentials.entries().len(), "loaded credentials");

    let missing_required: Vec<String> =
        credentials.missing_required(catalog).into_iter().map(str::to_string).collect();
    for key in &missing_required {
        warn!(key = %key, "required credential missing");
    }

    let mut outcome = EnvOutcome {
        confirmations: credentials.confirmation_lines(),
        missing_required,
        exit_code: None,
    };

    if let Some((program, args)) = command.split_first() {
        let status = Command::new(program)
            .args(args)
            .envs(credentials.entries().iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .status()
            .map_err(|e| AppError::Command { command: program.clone(), detail: e.to_string() })?;
        outcome.exit_code = Some(status.code().unwrap_or(1));
    }
    Ok(outcome)
}
