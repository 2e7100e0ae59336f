//! systemd unit for the application.

use minijinja::context;

use super::DeploymentPlan;
use crate::adapters::HostFiles;
use crate::adapters::embedded_templates::SERVICE_TEMPLATE;
use crate::adapters::EmbeddedTemplates;
use crate::app::AppContext;
use crate::domain::{AppError, ProvisionReport, ServiceDefinition};
use crate::ports::CommandRunner;

/// Render the unit file. Identical definitions render byte-identical units.
pub fn render(templates: &EmbeddedTemplates, service: &ServiceDefinition) -> Result<String, AppError> {
    templates.render(SERVICE_TEMPLATE, context! { service => service })
}

/// Write the unit next to the application and into the systemd directory.
/// The unit is not enabled or started.
pub(super) fn generate<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &DeploymentPlan,
    report: &mut ProvisionReport,
) -> Result<(), AppError> {
    let unit = render(ctx.templates(), &plan.service)?;
    let files = HostFiles::new(&plan.target);

    for path in [plan.target.local_service_unit(), plan.target.service_unit_path()] {
        let status = files.write_managed(&path, &unit)?;
        report.record_artifact(path, status);
    }
    Ok(())
}
