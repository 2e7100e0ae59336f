//! Filesystem layout derived from a provisioning request.

use std::path::{Component, Path, PathBuf};

use crate::domain::{DomainName, ProvisioningRequest};

pub const ENV_DIR_NAME: &str = "venv";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const CREDENTIALS_FILE: &str = ".env";
pub const CREDENTIALS_TEMPLATE_FILE: &str = ".env.example";
pub const LOADER_FILE: &str = "load_env.sh";
pub const NEXT_STEPS_FILE: &str = "NEXT_STEPS.md";
pub const DEPLOY_DIR_NAME: &str = "deploy";

const SYSTEMD_DIR: &str = "/etc/systemd/system";
const NGINX_AVAILABLE_DIR: &str = "/etc/nginx/sites-available";
const NGINX_ENABLED_DIR: &str = "/etc/nginx/sites-enabled";
const LETSENCRYPT_LIVE_DIR: &str = "/etc/letsencrypt/live";
pub const LETSENCRYPT_OPTIONS_FILE: &str = "/etc/letsencrypt/options-ssl-nginx.conf";
pub const LETSENCRYPT_DHPARAMS_FILE: &str = "/etc/letsencrypt/ssl-dhparams.pem";

/// Resolved paths for one run.
///
/// Paths returned by the accessors are as seen on the target host and are the
/// ones written into generated files. [`InstallationTarget::host_path`] maps
/// them under the root prefix for actual filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationTarget {
    root: PathBuf,
    install_dir: PathBuf,
    service_name: String,
}

impl InstallationTarget {
    pub fn resolve(request: &ProvisioningRequest, root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            install_dir: request.install_dir().to_path_buf(),
            service_name: request.service_name().to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn env_dir(&self) -> PathBuf {
        self.install_dir.join(ENV_DIR_NAME)
    }

    pub fn env_bin(&self, program: &str) -> PathBuf {
        self.env_dir().join("bin").join(program)
    }

    pub fn requirements_file(&self) -> PathBuf {
        self.install_dir.join(REQUIREMENTS_FILE)
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.install_dir.join(CREDENTIALS_FILE)
    }

    pub fn credentials_template(&self) -> PathBuf {
        self.install_dir.join(CREDENTIALS_TEMPLATE_FILE)
    }

    pub fn loader_script(&self) -> PathBuf {
        self.install_dir.join(LOADER_FILE)
    }

    pub fn next_steps_file(&self) -> PathBuf {
        self.install_dir.join(NEXT_STEPS_FILE)
    }

    /// Copy of the unit kept next to the application for reference.
    pub fn local_service_unit(&self) -> PathBuf {
        self.install_dir.join(DEPLOY_DIR_NAME).join(format!("{}.service", self.service_name))
    }

    /// Copy of the virtual host kept next to the application for reference.
    pub fn local_proxy_config(&self) -> PathBuf {
        self.install_dir.join(DEPLOY_DIR_NAME).join(format!("{}.nginx.conf", self.service_name))
    }

    pub fn service_unit_path(&self) -> PathBuf {
        Path::new(SYSTEMD_DIR).join(format!("{}.service", self.service_name))
    }

    pub fn proxy_available_path(&self) -> PathBuf {
        Path::new(NGINX_AVAILABLE_DIR).join(&self.service_name)
    }

    pub fn proxy_enabled_path(&self) -> PathBuf {
        Path::new(NGINX_ENABLED_DIR).join(&self.service_name)
    }

    pub fn default_site_enabled_path(&self) -> PathBuf {
        Path::new(NGINX_ENABLED_DIR).join("default")
    }

    /// Where certbot keeps the current certificate for `domain`.
    pub fn certificate_dir(&self, domain: &DomainName) -> PathBuf {
        Path::new(LETSENCRYPT_LIVE_DIR).join(domain.as_str())
    }

    /// Map a target-host path under the root prefix.
    pub fn host_path(&self, system_path: &Path) -> PathBuf {
        let relative: PathBuf = system_path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect();
        self.root.join(relative)
    }
}
