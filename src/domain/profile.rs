//! Deployment profiles.
//!
//! A profile selects one consistent bundle: default port, system packages,
//! Python manifest and the packages that must be installed from wheels.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Packages added when TLS is requested for a domain.
pub const TLS_PACKAGES: &[&str] = &["certbot", "python3-certbot-nginx"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentProfile {
    /// Regular VPS or desktop host.
    #[default]
    Standard,
    /// Low-memory single-board computers (Raspberry Pi class).
    Constrained,
}

impl DeploymentProfile {
    pub const ALL: [DeploymentProfile; 2] =
        [DeploymentProfile::Standard, DeploymentProfile::Constrained];

    pub fn name(self) -> &'static str {
        match self {
            DeploymentProfile::Standard => "standard",
            DeploymentProfile::Constrained => "constrained",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            DeploymentProfile::Standard => 8501,
            DeploymentProfile::Constrained => 3000,
        }
    }

    pub fn system_packages(self) -> &'static [&'static str] {
        match self {
            DeploymentProfile::Standard => &["python3", "python3-venv", "python3-pip", "nginx"],
            DeploymentProfile::Constrained => {
                &["python3", "python3-venv", "python3-pip", "nginx", "libopenblas-dev"]
            }
        }
    }

    /// Lines of the generated `requirements.txt`.
    pub fn python_requirements(self) -> &'static [&'static str] {
        match self {
            DeploymentProfile::Standard => &[
                "streamlit>=1.28",
                "pandas",
                "plotly",
                "requests",
                "woocommerce",
                "python-dotenv",
                "reportlab",
                "pytz",
                "google-analytics-data",
                "google-auth",
                "google-auth-oauthlib",
                "google-api-python-client",
                "google-ads",
            ],
            DeploymentProfile::Constrained => &[
                "streamlit>=1.28",
                "pandas",
                "plotly",
                "requests",
                "woocommerce",
                "python-dotenv",
                "reportlab",
                "pytz",
            ],
        }
    }

    /// Numeric libraries installed from precompiled wheels before the manifest.
    pub fn binary_only_packages(self) -> &'static [&'static str] {
        match self {
            DeploymentProfile::Standard => &[],
            DeploymentProfile::Constrained => &["numpy", "pandas"],
        }
    }

    /// Whether the Google Ads/Analytics credentials belong in the template.
    pub fn includes_google_integrations(self) -> bool {
        matches!(self, DeploymentProfile::Standard)
    }
}

impl std::str::FromStr for DeploymentProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(DeploymentProfile::Standard),
            "constrained" | "raspberry-pi" | "pi" => Ok(DeploymentProfile::Constrained),
            other => Err(AppError::validation(
                "profile",
                format!("'{}' must be one of standard, constrained", other),
            )),
        }
    }
}

impl std::fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
