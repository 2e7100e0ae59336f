use crate::domain::AppError;

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: &str) -> Self {
        Self { status: Some(0), stdout: stdout.to_string(), stderr: String::new() }
    }

    pub fn failed(status: i32, stderr: &str) -> Self {
        Self { status: Some(status), stdout: String::new(), stderr: stderr.to_string() }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn status_label(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }

    /// Last stderr line, or the exit status when stderr is empty.
    pub fn failure_detail(&self) -> String {
        match self.stderr.lines().rev().find(|line| !line.trim().is_empty()) {
            Some(line) => line.trim().to_string(),
            None => format!("exit status {}", self.status_label()),
        }
    }
}

/// Port for the host commands hostprov delegates to (apt, pip, nginx, certbot...).
pub trait CommandRunner {
    /// Run `program` with `args` to completion.
    ///
    /// A non-zero exit is reported through [`CommandOutput`]; `Err` means the
    /// process could not be spawned.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError>;

    /// Whether `program` is present on the host.
    fn is_available(&self, program: &str) -> bool;
}
