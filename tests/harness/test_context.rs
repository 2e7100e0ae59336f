//! Shared testing harness for `hostprov` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated host root for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    host_root: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let host_root = root.path().join("host");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&host_root).expect("Failed to create test host root");
        Self { root, work_dir, host_root }
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory standing in for `/` of the provisioned host.
    pub(crate) fn host_root(&self) -> &Path {
        &self.host_root
    }

    /// Build a command for invoking the compiled `hostprov` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hostprov").expect("Failed to locate hostprov binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// `hostprov provision` against the host root in dry-run, non-interactive mode.
    pub(crate) fn provision(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("provision")
            .arg("--root")
            .arg(&self.host_root)
            .arg("--dry-run")
            .arg("--non-interactive");
        cmd
    }

    /// Map a host path (e.g. `/etc/nginx/...`) into the test host root.
    pub(crate) fn host_path(&self, system_path: &str) -> PathBuf {
        self.host_root.join(system_path.trim_start_matches('/'))
    }

    /// Read a file written under the host root.
    pub(crate) fn read_host(&self, system_path: &str) -> String {
        let path = self.host_path(system_path);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
    }

    /// Write a file into the work directory and return its path.
    pub(crate) fn write_work_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write work file");
        path
    }
}
