use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

const INSTALLED_STATUS: &str = "install ok installed";

struct Failure {
    prefix: String,
    output: CommandOutput,
    remaining: Option<usize>,
}

/// Host double: records every command line and simulates dpkg, apt and
/// account lookups in memory.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<String>>,
    installed: Mutex<HashSet<String>>,
    users: Mutex<HashSet<String>>,
    programs: HashSet<String>,
    failures: Mutex<Vec<Failure>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(self, packages: &[&str]) -> Self {
        self.installed.lock().unwrap().extend(packages.iter().map(|p| p.to_string()));
        self
    }

    pub fn with_user(self, user: &str) -> Self {
        self.users.lock().unwrap().insert(user.to_string());
        self
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    /// Every command line starting with `prefix` returns `output`.
    pub fn fail_on(self, prefix: &str, output: CommandOutput) -> Self {
        self.push_failure(prefix, output, None)
    }

    /// The next `times` command lines starting with `prefix` return `output`.
    pub fn fail_times(self, prefix: &str, times: usize, output: CommandOutput) -> Self {
        self.push_failure(prefix, output, Some(times))
    }

    fn push_failure(self, prefix: &str, output: CommandOutput, remaining: Option<usize>) -> Self {
        self.failures.lock().unwrap().push(Failure {
            prefix: prefix.to_string(),
            output,
            remaining,
        });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ran(&self, prefix: &str) -> bool {
        self.position(prefix).is_some()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Index of the first call starting with `prefix`.
    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.calls.lock().unwrap().iter().position(|c| c.starts_with(prefix))
    }

    fn scripted_failure(&self, line: &str) -> Option<CommandOutput> {
        let mut failures = self.failures.lock().unwrap();
        let failure = failures
            .iter_mut()
            .find(|f| line.starts_with(&f.prefix) && f.remaining.is_none_or(|n| n > 0))?;
        if let Some(n) = failure.remaining.as_mut() {
            *n -= 1;
        }
        Some(failure.output.clone())
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let line = std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        self.calls.lock().unwrap().push(line.clone());

        if let Some(output) = self.scripted_failure(&line) {
            return Ok(output);
        }

        let last = args.last().copied().unwrap_or_default();
        let output = match program {
            "dpkg-query" if self.installed.lock().unwrap().contains(last) => {
                CommandOutput::ok(INSTALLED_STATUS)
            }
            "dpkg-query" => CommandOutput::failed(1, "no packages found matching"),
            "apt-get" if args.first() == Some(&"install") => {
                self.installed.lock().unwrap().insert(last.to_string());
                CommandOutput::ok("")
            }
            "id" if self.users.lock().unwrap().contains(last) => CommandOutput::ok("999"),
            "id" => CommandOutput::failed(1, "no such user"),
            "useradd" => {
                self.users.lock().unwrap().insert(last.to_string());
                CommandOutput::ok("")
            }
            _ => CommandOutput::ok(""),
        };
        Ok(output)
    }

    fn is_available(&self, program: &str) -> bool {
        self.programs.contains(program)
    }
}
