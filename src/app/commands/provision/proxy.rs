//! nginx virtual host for the application.

use minijinja::context;
use tracing::{info, warn};

use super::{DeploymentPlan, certificate, run_checked};
use crate::adapters::embedded_templates::PROXY_TEMPLATE;
use crate::adapters::{EmbeddedTemplates, HostFiles};
use crate::app::AppContext;
use crate::domain::{AppError, InstalledCertificate, ProvisionReport, ProvisionState, ProxyRoute};
use crate::ports::{CommandOutput, CommandRunner};

/// Render the virtual host. A wildcard route becomes the default server.
///
/// With an installed certificate, port 80 redirects to an HTTPS server
/// using it.
pub fn render(
    templates: &EmbeddedTemplates,
    route: &ProxyRoute,
    certificate: Option<&InstalledCertificate>,
) -> Result<String, AppError> {
    templates.render(
        PROXY_TEMPLATE,
        context! { route => route, wildcard => route.is_wildcard(), certificate => certificate },
    )
}

/// Install and enable the virtual host, validate it with `nginx -t` and
/// reload nginx.
///
/// A rejected configuration puts back the previous vhost, the enabled link
/// and the default site exactly as they were.
pub(super) fn configure<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    if plan.request.tls_requested() && plan.request.domain().is_none() {
        warn!("TLS requested without a domain");
        report.warn(
            ProvisionState::ConfiguringProxy,
            "TLS requested without a domain; serving plain HTTP on every hostname",
        );
    }

    let target = &plan.target;
    let files = HostFiles::new(target);
    let installed = certificate::installed(&files, plan);
    if installed.is_some() {
        info!("keeping HTTPS server for installed certificate");
    }
    let config = render(ctx.templates(), &plan.route, installed.as_ref())?;

    let status = files.write_managed(&target.local_proxy_config(), &config)?;
    report.record_artifact(target.local_proxy_config(), status);

    let available = target.proxy_available_path();
    let enabled = target.proxy_enabled_path();
    let default_site = target.default_site_enabled_path();

    let previous = files.read(&available)?;
    let enabled_link = files.link_target(&enabled);
    let enabled_file = match enabled_link {
        Some(_) => None,
        None => files.read(&enabled)?,
    };
    let default_link = files.link_target(&default_site);

    let status = files.write_managed(&available, &config)?;
    files.symlink(&available, &enabled)?;
    if files.remove(&default_site)? {
        info!("disabled default nginx site");
    }

    let test = ctx.runner().run("nginx", &["-t"])?;
    if !test.success() {
        warn!(detail = %test.failure_detail(), "nginx rejected configuration, restoring previous state");
        files.restore(&available, previous.as_deref())?;
        match &enabled_link {
            Some(raw_target) => files.relink(&enabled, raw_target)?,
            None => files.restore(&enabled, enabled_file.as_deref())?,
        }
        if let Some(raw_target) = default_link {
            files.relink(&default_site, &raw_target)?;
        }
        return Err(AppError::ProxyConfig(rejection_detail(&test)));
    }
    report.record_artifact(available, status);

    run_checked(ctx, "systemctl", &["reload-or-restart", "nginx"])
}

/// The `[emerg]` line nginx prints for a bad config, when there is one.
fn rejection_detail(output: &CommandOutput) -> String {
    output
        .stderr
        .lines()
        .find(|line| line.contains("[emerg]"))
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| output.failure_detail())
}
