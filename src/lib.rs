//! hostprov: provision a Linux host to serve a Streamlit dashboard behind nginx.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    Artifact, EnvOutcome, ProvisionOptions, collect_request, env, provision, provision_with, render,
};
pub use domain::{
    AppError, DeploymentProfile, ProvisionReport, ProvisionState, ProvisioningRequest,
    RequestDraft, RunOutcome,
};
