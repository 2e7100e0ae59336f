use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::domain::{DeploymentProfile, RequestDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value == YesNo::Yes
    }
}

/// Request values shared by `provision` and `render`.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Public domain name (omit for IP-only access)
    #[arg(short, long)]
    pub domain: Option<String>,
    /// Port the application listens on (default depends on the profile)
    #[arg(long)]
    pub port: Option<u32>,
    /// System account the service runs as
    #[arg(short, long)]
    pub user: Option<String>,
    /// Create the service account when it does not exist
    #[arg(long, value_enum)]
    pub create_user: Option<YesNo>,
    /// Request a Let's Encrypt certificate (needs --domain)
    #[arg(long, value_enum)]
    pub tls: Option<YesNo>,
    /// Deployment profile: standard or constrained
    #[arg(long, value_parser = parse_profile)]
    pub profile: Option<DeploymentProfile>,
    /// Contact address for certificate expiry notices
    #[arg(long)]
    pub email: Option<String>,
    /// Install directory (default /opt/<service-name>)
    #[arg(long)]
    pub install_dir: Option<PathBuf>,
    /// Application entry script inside the install directory
    #[arg(long)]
    pub app_entry: Option<String>,
    /// Name of the systemd unit and nginx site
    #[arg(long)]
    pub service_name: Option<String>,
    /// TOML or YAML file with the same keys; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl RequestArgs {
    pub fn draft(&self) -> RequestDraft {
        RequestDraft {
            domain: self.domain.clone(),
            port: self.port,
            user: self.user.clone(),
            create_user: self.create_user.map(bool::from),
            tls: self.tls.map(bool::from),
            profile: self.profile,
            email: self.email.clone(),
            install_dir: self.install_dir.clone(),
            app_entry: self.app_entry.clone(),
            service_name: self.service_name.clone(),
        }
    }
}

fn parse_profile(raw: &str) -> Result<DeploymentProfile, String> {
    raw.parse().map_err(|e: crate::domain::AppError| e.to_string())
}
