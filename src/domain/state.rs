//! Provisioning state machine.

use serde::Serialize;

/// Steps of a provisioning run in the order the orchestrator visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProvisionState {
    CollectingInput,
    InstallingPackages,
    CreatingServiceAccount,
    BuildingEnvironment,
    WritingSecretsTemplate,
    GeneratingServiceUnit,
    ConfiguringProxy,
    IssuingCertificate,
    ConfiguringFirewall,
    Done,
}

impl ProvisionState {
    /// The state after `self` for a run that does or does not issue certificates.
    pub fn next(self, issue_certificate: bool) -> Option<ProvisionState> {
        use ProvisionState::*;
        match self {
            CollectingInput => Some(InstallingPackages),
            InstallingPackages => Some(CreatingServiceAccount),
            CreatingServiceAccount => Some(BuildingEnvironment),
            BuildingEnvironment => Some(WritingSecretsTemplate),
            WritingSecretsTemplate => Some(GeneratingServiceUnit),
            GeneratingServiceUnit => Some(ConfiguringProxy),
            ConfiguringProxy if issue_certificate => Some(IssuingCertificate),
            ConfiguringProxy | IssuingCertificate => Some(ConfiguringFirewall),
            ConfiguringFirewall => Some(Done),
            Done => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProvisionState::CollectingInput => "CollectingInput",
            ProvisionState::InstallingPackages => "InstallingPackages",
            ProvisionState::CreatingServiceAccount => "CreatingServiceAccount",
            ProvisionState::BuildingEnvironment => "BuildingEnvironment",
            ProvisionState::WritingSecretsTemplate => "WritingSecretsTemplate",
            ProvisionState::GeneratingServiceUnit => "GeneratingServiceUnit",
            ProvisionState::ConfiguringProxy => "ConfiguringProxy",
            ProvisionState::IssuingCertificate => "IssuingCertificate",
            ProvisionState::ConfiguringFirewall => "ConfiguringFirewall",
            ProvisionState::Done => "Done",
        }
    }
}

impl std::fmt::Display for ProvisionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RunOutcome {
    Done,
    /// The run stopped in `state`; host mutations applied before it remain.
    Aborted { state: ProvisionState, detail: String },
}

impl RunOutcome {
    /// `"<State>: <detail>"` for aborted runs.
    pub fn abort_reason(&self) -> Option<String> {
        match self {
            RunOutcome::Done => None,
            RunOutcome::Aborted { state, detail } => Some(format!("{}: {}", state, detail)),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, RunOutcome::Done)
    }
}
