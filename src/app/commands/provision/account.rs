//! Dedicated system account for the service.

use tracing::{debug, info};

use super::{DeploymentPlan, run_checked};
use crate::app::AppContext;
use crate::domain::{AppError, ProvisionReport, ProvisionState};
use crate::ports::CommandRunner;

const NOLOGIN_SHELL: &str = "/usr/sbin/nologin";

pub(super) fn ensure<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    let account = plan.request.service_user();
    if account.is_root() {
        report.warn(ProvisionState::CreatingServiceAccount, "the service will run as root");
        return Ok(());
    }

    if ctx.runner().run("id", &["-u", account.as_str()])?.success() {
        debug!(user = %account, "account exists");
        return Ok(());
    }

    if !plan.request.create_user() {
        return Err(AppError::validation(
            "user",
            format!("account '{}' does not exist and --create-user is no", account),
        ));
    }

    info!(user = %account, "creating system account");
    let home = plan.target.install_dir().display().to_string();
    run_checked(
        ctx,
        "useradd",
        &[
            "--system",
            "--no-create-home",
            "--home-dir",
            home.as_str(),
            "--shell",
            NOLOGIN_SHELL,
            account.as_str(),
        ],
    )
}
