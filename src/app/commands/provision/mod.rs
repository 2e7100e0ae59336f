//! Provisioning orchestrator.
//!
//! Walks the [`ProvisionState`] machine once, strictly in order. A fatal
//! error stops the walk in the failing state; mutations already applied to
//! the host are left in place. Certificate failures only add a warning.

mod account;
mod certificate;
mod environment;
mod firewall;
mod next_steps;
mod packages;
mod proxy;
mod secrets;
mod service;

use std::path::Path;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::adapters::EmbeddedTemplates;
use crate::app::AppContext;
use crate::domain::{
    AppError, CredentialSpec, InstallationTarget, ProvisionReport, ProvisionState,
    ProvisioningRequest, ProxyRoute, ServiceDefinition,
};
use crate::ports::CommandRunner;

pub use proxy::render as render_proxy;
pub use service::render as render_service;

/// Everything a run writes, derived once from the request before any step runs.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub request: ProvisioningRequest,
    pub target: InstallationTarget,
    pub service: ServiceDefinition,
    pub route: ProxyRoute,
    /// Credential keys for this profile, in template order.
    pub credentials: Vec<CredentialSpec>,
}

impl DeploymentPlan {
    pub fn new(
        request: ProvisioningRequest,
        root: &Path,
        templates: &EmbeddedTemplates,
    ) -> Result<Self, AppError> {
        let target = InstallationTarget::resolve(&request, root);
        let service = ServiceDefinition::from_request(&request, &target);
        let route = ProxyRoute::for_service(&service, request.domain(), request.tls_requested());

        let include_google = request.profile().includes_google_integrations();
        let credentials = templates
            .credential_catalog()?
            .into_iter()
            .filter(|spec| include_google || !spec.google)
            .collect();

        Ok(Self { request, target, service, route, credentials })
    }

    pub fn issues_certificate(&self) -> bool {
        self.request.certificate_domain().is_some()
    }
}

/// Provision the host for `request`.
///
/// Never returns early with an error: every failure is captured in the
/// report's outcome together with its exit code and remediation.
pub fn execute<R: CommandRunner>(ctx: &AppContext<R>, request: ProvisioningRequest) -> ProvisionReport {
    let mut report = ProvisionReport::new(Utc::now());
    report.completed.push(ProvisionState::CollectingInput);

    let plan = match DeploymentPlan::new(request, ctx.root(), ctx.templates()) {
        Ok(plan) => plan,
        Err(err) => {
            error!(state = %ProvisionState::CollectingInput, error = %err, "aborted");
            report.abort(ProvisionState::CollectingInput, err.to_string(), &err);
            report.finished_at = Utc::now();
            return report;
        }
    };
    let issue_certificate = plan.issues_certificate();

    let mut state = ProvisionState::InstallingPackages;
    while state != ProvisionState::Done {
        info!(state = %state, "entering");
        match run_state(ctx, &plan, state, &mut report) {
            Ok(()) => report.completed.push(state),
            Err(err) if !err.is_fatal() => {
                warn!(state = %state, error = %err, "continuing");
                report.warn(state, err.to_string());
            }
            Err(err) => {
                error!(state = %state, error = %err, "aborted");
                report.abort(state, abort_detail(&err), &err);
                break;
            }
        }
        state = state.next(issue_certificate).unwrap_or(ProvisionState::Done);
    }

    if report.outcome.is_done() {
        report.completed.push(ProvisionState::Done);
        report.next_steps = next_steps::steps(&plan, &report);
        if let Err(err) = next_steps::write(ctx, &plan, &mut report) {
            warn!(error = %err, "could not write next steps file");
            report.warn(ProvisionState::Done, format!("next steps file not written: {}", err));
        }
        info!(artifacts = report.artifacts.len(), warnings = report.warnings.len(), "done");
    } else if let Some(remediation) = &report.remediation {
        report.next_steps = vec![remediation.clone()];
    }

    report.finished_at = Utc::now();
    report
}

fn run_state<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    state: ProvisionState,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    match state {
        ProvisionState::InstallingPackages => packages::install(ctx, plan),
        ProvisionState::CreatingServiceAccount => account::ensure(ctx, plan, report),
        ProvisionState::BuildingEnvironment => environment::build(ctx, plan, report),
        ProvisionState::WritingSecretsTemplate => secrets::write(ctx, plan, report),
        ProvisionState::GeneratingServiceUnit => service::generate(ctx, plan, report),
        ProvisionState::ConfiguringProxy => proxy::configure(ctx, plan, report),
        ProvisionState::IssuingCertificate => certificate::issue(ctx, plan),
        ProvisionState::ConfiguringFirewall => firewall::configure(ctx, report),
        ProvisionState::CollectingInput | ProvisionState::Done => Ok(()),
    }
}

/// Short reason for an abort. Package failures name just the package.
fn abort_detail(err: &AppError) -> String {
    match err {
        AppError::Dependency { package, .. } => package.clone(),
        other => other.to_string(),
    }
}

/// Run `program`, turning a non-zero exit into [`AppError::Command`].
fn run_checked<R: CommandRunner>(ctx: &AppContext<R>, program: &str, args: &[&str]) -> Result<(), AppError> {
    let output = ctx.runner().run(program, args)?;
    if output.success() {
        Ok(())
    } else {
        Err(AppError::Command {
            command: format!("{} {}", program, args.join(" ")),
            detail: output.failure_detail(),
        })
    }
}
