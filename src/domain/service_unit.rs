//! Process-supervisor definition for the deployed application.

use serde::Serialize;

use crate::domain::{InstallationTarget, Port, ProvisioningRequest};

/// Fixed delay between automatic restarts.
pub const RESTART_DELAY_SECS: u32 = 10;

/// Loopback address the application binds to; only the proxy is public.
pub const UPSTREAM_HOST: &str = "127.0.0.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    Always,
}

impl RestartPolicy {
    pub fn as_systemd(self) -> &'static str {
        match self {
            RestartPolicy::Always => "always",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    pub name: String,
    pub description: String,
    pub user: String,
    pub working_directory: String,
    pub environment_file: String,
    pub start_command: String,
    pub listen_host: &'static str,
    listen_port: Port,
    pub restart: &'static str,
    pub restart_delay_secs: u32,
    /// Journal identifier the service logs under.
    pub log_identifier: String,
}

impl ServiceDefinition {
    pub fn from_request(request: &ProvisioningRequest, target: &InstallationTarget) -> Self {
        let port = request.port();
        let start_command = format!(
            "{streamlit} run {entry} --server.port {port} --server.address {host} --server.headless true",
            streamlit = target.env_bin("streamlit").display(),
            entry = target.install_dir().join(request.app_entry()).display(),
            port = port,
            host = UPSTREAM_HOST,
        );

        Self {
            name: request.service_name().to_string(),
            description: format!("{} Streamlit dashboard", request.service_name()),
            user: request.service_user().to_string(),
            working_directory: target.install_dir().display().to_string(),
            environment_file: target.credentials_file().display().to_string(),
            start_command,
            listen_host: UPSTREAM_HOST,
            listen_port: port,
            restart: RestartPolicy::Always.as_systemd(),
            restart_delay_secs: RESTART_DELAY_SECS,
            log_identifier: request.service_name().to_string(),
        }
    }

    /// The only source the proxy route may take its upstream port from.
    pub fn listen_port(&self) -> Port {
        self.listen_port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestDraft;
    use std::path::Path;

    #[test]
    fn start_command_references_requested_port() {
        let request = RequestDraft::default().finalize().unwrap();
        let target = InstallationTarget::resolve(&request, Path::new("/"));

        let service = ServiceDefinition::from_request(&request, &target);

        assert_eq!(
            service.start_command,
            "/opt/dashboard/venv/bin/streamlit run /opt/dashboard/woocommerce_dashboard.py \
             --server.port 8501 --server.address 127.0.0.1 --server.headless true"
        );
        assert_eq!(service.listen_port().get(), 8501);
        assert_eq!(service.restart, "always");
    }
}
