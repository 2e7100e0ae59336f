use std::cell::RefCell;

use tracing::info;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Runner for `--dry-run`: logs every command instead of executing it and
/// reports success with empty output.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    skipped: RefCell<Vec<String>>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command lines that would have run, in order.
    pub fn skipped(&self) -> Vec<String> {
        self.skipped.borrow().clone()
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let line = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        info!(command = %line, "skipped (dry run)");
        self.skipped.borrow_mut().push(line);
        Ok(CommandOutput::ok(""))
    }

    fn is_available(&self, _program: &str) -> bool {
        false
    }
}
