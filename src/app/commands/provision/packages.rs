//! System package installation through apt.

use tracing::{debug, info};

use super::DeploymentPlan;
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::CommandRunner;

const INSTALLED_STATUS: &str = "install ok installed";

/// Install every missing package of the plan, stopping at the first failure.
pub(super) fn install<R: CommandRunner>(ctx: &AppContext<R>, plan: &DeploymentPlan) -> Result<(), AppError> {
    let runner = ctx.runner();
    let mut index_refreshed = false;

    for package in plan.request.required_packages() {
        if is_installed(runner, package)? {
            debug!(package, "already installed");
            continue;
        }

        if !index_refreshed {
            let output = runner.run("apt-get", &["update", "-q"]).map_err(|e| dependency(package, e))?;
            if !output.success() {
                return Err(AppError::Dependency {
                    package: package.to_string(),
                    detail: format!("apt-get update: {}", output.failure_detail()),
                });
            }
            index_refreshed = true;
        }

        info!(package, "installing");
        let output = runner
            .run("apt-get", &["install", "-y", "-q", package])
            .map_err(|e| dependency(package, e))?;
        if !output.success() {
            return Err(AppError::Dependency {
                package: package.to_string(),
                detail: output.failure_detail(),
            });
        }
    }
    Ok(())
}

fn is_installed<R: CommandRunner>(runner: &R, package: &str) -> Result<bool, AppError> {
    let output = runner.run("dpkg-query", &["-W", "-f=${Status}", package])?;
    Ok(output.success() && output.stdout.contains(INSTALLED_STATUS))
}

fn dependency(package: &str, err: AppError) -> AppError {
    AppError::Dependency { package: package.to_string(), detail: err.to_string() }
}
