//! Credentials template, operator credentials file and shell loader.

use minijinja::context;
use tracing::debug;

use super::{DeploymentPlan, run_checked};
use crate::adapters::HostFiles;
use crate::adapters::embedded_templates::{CREDENTIALS_TEMPLATE, LOADER_TEMPLATE};
use crate::app::AppContext;
use crate::domain::credentials::MIN_PARTIAL_REVEAL_LEN;
use crate::domain::{AppError, ArtifactStatus, ProvisionReport};
use crate::ports::CommandRunner;

const CREDENTIALS_MODE: u32 = 0o600;
const LOADER_MODE: u32 = 0o755;

pub(super) fn write<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    let target = &plan.target;
    let files = HostFiles::new(target);
    let service_name = plan.request.service_name();

    let render_credentials = |blank_values: bool| {
        ctx.templates().render(
            CREDENTIALS_TEMPLATE,
            context! {
                service_name => service_name,
                credentials => &plan.credentials,
                blank_values => blank_values,
            },
        )
    };

    let template = render_credentials(false)?;
    let status = files.write_managed(&target.credentials_template(), &template)?;
    report.record_artifact(target.credentials_template(), status);

    // The operator's file is seeded once, with empty values, and never touched again.
    let credentials = target.credentials_file();
    let credentials_status = files.write_if_absent(&credentials, &render_credentials(true)?)?;
    report.record_artifact(credentials.clone(), credentials_status);
    files.set_mode(&credentials, CREDENTIALS_MODE)?;

    let loader = ctx.templates().render(
        LOADER_TEMPLATE,
        context! {
            service_name => service_name,
            loader_path => target.loader_script().display().to_string(),
            credentials_path => credentials.display().to_string(),
            min_reveal_len => MIN_PARTIAL_REVEAL_LEN,
        },
    )?;
    let status = files.write_managed(&target.loader_script(), &loader)?;
    report.record_artifact(target.loader_script(), status);
    files.set_mode(&target.loader_script(), LOADER_MODE)?;

    let account = plan.request.service_user();
    if credentials_status != ArtifactStatus::Created || account.is_root() {
        return Ok(());
    }
    debug!(user = %account, "handing credentials file to service account");
    let owner = format!("{}:{}", account, account);
    let path = credentials.display().to_string();
    run_checked(ctx, "chown", &[owner.as_str(), path.as_str()])
}
