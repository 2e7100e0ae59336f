//! Isolated Python environment for the application.

use tracing::{info, warn};

use super::{DeploymentPlan, run_checked};
use crate::adapters::HostFiles;
use crate::app::AppContext;
use crate::domain::{AppError, DeploymentProfile, ProvisionReport};
use crate::ports::CommandRunner;

pub(super) fn build<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    let target = &plan.target;
    let files = HostFiles::new(target);
    let profile = plan.request.profile();

    files.create_dir_all(target.install_dir())?;
    let status = files.write_if_absent(&target.requirements_file(), &requirements_manifest(profile))?;
    report.record_artifact(target.requirements_file(), status);

    if !files.exists(&target.env_bin("python")) {
        info!(env = %target.env_dir().display(), "creating virtual environment");
        let env_dir = target.env_dir().display().to_string();
        build_step(ctx, "python3", &["-m", "venv", env_dir.as_str()], false)?;
    }

    let pip = target.env_bin("pip").display().to_string();
    build_step(ctx, &pip, &["install", "--upgrade", "pip"], true)?;

    let binary_only = profile.binary_only_packages();
    if !binary_only.is_empty() {
        let mut args = vec!["install", "--only-binary=:all:"];
        args.extend_from_slice(binary_only);
        build_step(ctx, &pip, &args, true)?;
    }

    let requirements = target.requirements_file().display().to_string();
    build_step(ctx, &pip, &["install", "-r", requirements.as_str()], true)?;

    let account = plan.request.service_user();
    if !account.is_root() {
        let owner = format!("{}:{}", account, account);
        let install_dir = target.install_dir().display().to_string();
        run_checked(ctx, "chown", &["-R", owner.as_str(), install_dir.as_str()])?;
    }
    Ok(())
}

/// Run one build command, retrying once when `retry` is set.
fn build_step<R: CommandRunner>(
    ctx: &AppContext<R>,
    program: &str,
    args: &[&str],
    retry: bool,
) -> Result<(), AppError> {
    let step = format!("{} {}", program, args.join(" "));
    let attempts = if retry { 2 } else { 1 };

    let mut status = String::new();
    for attempt in 1..=attempts {
        let output = ctx.runner().run(program, args)?;
        if output.success() {
            return Ok(());
        }
        status = output.status_label();
        warn!(step = %step, attempt, detail = %output.failure_detail(), "build step failed");
    }
    Err(AppError::EnvironmentBuild { step, status })
}

fn requirements_manifest(profile: DeploymentProfile) -> String {
    let mut manifest = format!("# Python requirements for the {} profile.\n", profile);
    for line in profile.python_requirements() {
        manifest.push_str(line);
        manifest.push('\n');
    }
    manifest
}
