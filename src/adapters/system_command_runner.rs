use std::env;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Runs host commands with `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        debug!(command = %format!("{} {}", program, args.join(" ")), "running");

        let output = Command::new(program)
            .args(args)
            .env("DEBIAN_FRONTEND", "noninteractive")
            .output()
            .map_err(|e| AppError::Command {
                command: format!("{} {}", program, args.join(" ")),
                detail: e.to_string(),
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!(program, status = %result.status_label(), "finished");
        Ok(result)
    }

    fn is_available(&self, program: &str) -> bool {
        if program.contains('/') {
            return Path::new(program).is_file();
        }
        env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
            .unwrap_or(false)
    }
}
