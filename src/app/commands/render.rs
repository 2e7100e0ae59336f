//! Render a single artifact to text without touching the host.

use std::path::Path;

use crate::adapters::EmbeddedTemplates;
use crate::app::commands::provision::{DeploymentPlan, render_proxy, render_service};
use crate::domain::{AppError, ProvisioningRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Service,
    Proxy,
}

pub fn execute(
    templates: &EmbeddedTemplates,
    request: ProvisioningRequest,
    artifact: Artifact,
) -> Result<String, AppError> {
    let plan = DeploymentPlan::new(request, Path::new("/"), templates)?;
    match artifact {
        Artifact::Service => render_service(templates, &plan.service),
        Artifact::Proxy => render_proxy(templates, &plan.route, None),
    }
}
