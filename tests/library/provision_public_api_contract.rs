use std::cell::RefCell;

use hostprov::ports::{CommandOutput, CommandRunner};
use hostprov::{
    AppError, ProvisionOptions, ProvisionState, RequestDraft, RunOutcome, collect_request,
    provision, provision_with,
};
use tempfile::TempDir;

/// Runner that records calls and fails `apt-get install` for one package.
struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    broken_package: Option<&'static str>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let line = format!("{} {}", program, args.join(" "));
        self.calls.borrow_mut().push(line);
        let broken = program == "apt-get"
            && args.first() == Some(&"install")
            && self.broken_package.is_some_and(|p| args.last() == Some(&p));
        if broken {
            return Ok(CommandOutput::failed(100, "E: Unable to locate package"));
        }
        Ok(CommandOutput::ok("install ok installed"))
    }

    fn is_available(&self, _program: &str) -> bool {
        false
    }
}

#[test]
fn public_api_provisions_with_custom_runner() {
    let temp = TempDir::new().unwrap();
    let draft = RequestDraft {
        domain: Some("shop.example.com".into()),
        tls: Some(true),
        ..Default::default()
    };
    let request = collect_request(draft, None, false).unwrap();
    let runner = RecordingRunner { calls: RefCell::new(Vec::new()), broken_package: None };

    let report = provision_with(runner, temp.path(), request).unwrap();

    assert_eq!(report.outcome, RunOutcome::Done);
    assert!(report.completed.contains(&ProvisionState::IssuingCertificate));
    assert!(temp.path().join("etc/nginx/sites-available/dashboard").exists());
}

#[test]
fn public_api_reports_abort_state_and_reason() {
    let temp = TempDir::new().unwrap();
    let request = collect_request(RequestDraft::default(), None, false).unwrap();
    let runner = RecordingRunner {
        calls: RefCell::new(Vec::new()),
        broken_package: Some("python3-venv"),
    };
    // Nothing is installed yet, so every package goes through apt-get.
    let runner = NotInstalled(runner);

    let report = provision_with(runner, temp.path(), request).unwrap();

    assert_eq!(report.outcome.abort_reason().as_deref(), Some("InstallingPackages: python3-venv"));
    assert_eq!(report.exit_code, 3);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_options_write_under_root() {
    let temp = TempDir::new().unwrap();
    let options = ProvisionOptions {
        root: temp.path().to_path_buf(),
        dry_run: true,
        ..Default::default()
    };

    let report = provision(options).unwrap();

    assert!(report.outcome.is_done());
    assert!(temp.path().join("etc/systemd/system/dashboard.service").exists());
}

#[test]
fn dry_run_against_host_root_is_refused() {
    let options = ProvisionOptions { root: "/".into(), dry_run: true, ..Default::default() };

    let err = provision(options).unwrap_err();

    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "root"));
    assert_eq!(err.exit_code(), 2);
}

/// Reports every package as missing from dpkg.
struct NotInstalled(RecordingRunner);

impl CommandRunner for NotInstalled {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        if program == "dpkg-query" {
            return Ok(CommandOutput::failed(1, "no packages found"));
        }
        self.0.run(program, args)
    }

    fn is_available(&self, program: &str) -> bool {
        self.0.is_available(program)
    }
}
