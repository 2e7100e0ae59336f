//! Best-effort firewall rules. Failures are warnings, never aborts.

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::{AppError, ProvisionReport, ProvisionState};
use crate::ports::CommandRunner;

const RULES: &[&str] = &["OpenSSH", "Nginx Full"];

/// Allow SSH and web traffic through ufw. ufw is never enabled here, so an
/// inactive firewall stays inactive.
pub(super) fn configure<R: CommandRunner>(
    ctx: &AppContext<R>,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    if !ctx.runner().is_available("ufw") {
        report.warn(
            ProvisionState::ConfiguringFirewall,
            "ufw not found; make sure ports 80 and 443 are reachable",
        );
        return Ok(());
    }

    match apply_rules(ctx.runner()) {
        Ok(true) => {}
        Ok(false) => report.warn(
            ProvisionState::ConfiguringFirewall,
            "ufw is inactive; rules were added but are not enforced",
        ),
        Err(err) => {
            warn!(error = %err, "firewall rules not applied");
            report.warn(ProvisionState::ConfiguringFirewall, err.to_string());
        }
    }
    Ok(())
}

/// Returns whether ufw is active.
fn apply_rules<R: CommandRunner>(runner: &R) -> Result<bool, AppError> {
    for rule in RULES {
        let output = runner.run("ufw", &["allow", rule])?;
        if !output.success() {
            return Err(AppError::Command {
                command: format!("ufw allow {}", rule),
                detail: output.failure_detail(),
            });
        }
        debug!(rule, "firewall rule applied");
    }

    let status = runner.run("ufw", &["status"])?;
    Ok(!status.stdout.contains("inactive"))
}
