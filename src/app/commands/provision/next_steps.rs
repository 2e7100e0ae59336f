//! Manual follow-ups after a completed run.

use minijinja::context;

use super::DeploymentPlan;
use super::certificate::certbot_args;
use crate::adapters::HostFiles;
use crate::adapters::embedded_templates::NEXT_STEPS_TEMPLATE;
use crate::app::AppContext;
use crate::domain::{AppError, ProvisionReport, ProvisionState};
use crate::ports::CommandRunner;

pub(super) fn steps(plan: &DeploymentPlan, report: &ProvisionReport) -> Vec<String> {
    let request = &plan.request;
    let target = &plan.target;
    let name = request.service_name();

    let mut steps = vec![
        format!(
            "Copy the application code into {} (entry point {}).",
            target.install_dir().display(),
            request.app_entry()
        ),
        format!(
            "Fill in {} and check it with `hostprov env --file {}`.",
            target.credentials_file().display(),
            target.credentials_file().display()
        ),
        format!("Start the service: `sudo systemctl daemon-reload && sudo systemctl enable --now {}`", name),
    ];

    let certificate_issued = report.completed.contains(&ProvisionState::IssuingCertificate);
    match request.domain() {
        Some(domain) if !certificate_issued => {
            steps.push(format!(
                "Issue a certificate once DNS for {} points here: `sudo certbot {}`",
                domain,
                certbot_args(domain, request.email()).join(" ")
            ));
            steps.push(format!("Open http://{}/", domain));
        }
        Some(domain) => steps.push(format!("Open https://{}/", domain)),
        None => {
            if request.tls_requested() {
                steps.push(
                    "Point a DNS name at this host, then rerun `hostprov provision --domain <name> --tls yes`."
                        .to_string(),
                );
            }
            steps.push("Open http://<server-address>/".to_string());
        }
    }

    steps.push(format!("Follow the logs: `journalctl -u {} -f`", name));
    steps
}

pub(super) fn write<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    let content = ctx.templates().render(
        NEXT_STEPS_TEMPLATE,
        context! { service_name => plan.request.service_name(), steps => &report.next_steps },
    )?;
    let path = plan.target.next_steps_file();
    let status = HostFiles::new(&plan.target).write_managed(&path, &content)?;
    report.record_artifact(path, status);
    Ok(())
}
