use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AppError, ProvisionState, RunOutcome};

/// What happened to a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    Created,
    Updated,
    Unchanged,
    /// Existing operator-owned file left untouched.
    Preserved,
}

impl ArtifactStatus {
    pub fn label(self) -> &'static str {
        match self {
            ArtifactStatus::Created => "created",
            ArtifactStatus::Updated => "updated",
            ArtifactStatus::Unchanged => "unchanged",
            ArtifactStatus::Preserved => "preserved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    /// Path on the target host.
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub state: ProvisionState,
    pub message: String,
}

/// Result of one orchestrator run.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub outcome: RunOutcome,
    pub completed: Vec<ProvisionState>,
    pub artifacts: Vec<ArtifactRecord>,
    pub warnings: Vec<Warning>,
    pub next_steps: Vec<String>,
    /// Remediation command for an aborted run.
    pub remediation: Option<String>,
    #[serde(skip)]
    pub exit_code: i32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ProvisionReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            outcome: RunOutcome::Done,
            completed: Vec::new(),
            artifacts: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
            remediation: None,
            exit_code: 0,
            started_at,
            finished_at: started_at,
        }
    }

    pub fn record_artifact(&mut self, path: PathBuf, status: ArtifactStatus) {
        self.artifacts.push(ArtifactRecord { path, status });
    }

    pub fn warn<S: Into<String>>(&mut self, state: ProvisionState, message: S) {
        self.warnings.push(Warning { state, message: message.into() });
    }

    pub fn abort(&mut self, state: ProvisionState, detail: String, error: &AppError) {
        self.remediation = error.remediation();
        self.exit_code = error.exit_code();
        self.outcome = RunOutcome::Aborted { state, detail };
    }

    pub fn artifact_status(&self, path: &std::path::Path) -> Option<ArtifactStatus> {
        self.artifacts.iter().rev().find(|a| a.path == path).map(|a| a.status)
    }
}
