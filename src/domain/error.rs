use std::io;

use thiserror::Error;

/// Library-wide error type for hostprov operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Operator input failed validation.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A system package could not be installed.
    #[error("Failed to install package '{package}': {detail}")]
    Dependency { package: String, detail: String },

    /// The isolated Python environment could not be built.
    #[error("Environment build failed during {step} (exit status {status})")]
    EnvironmentBuild { step: String, status: String },

    /// The generated reverse-proxy configuration was rejected.
    #[error("Proxy configuration rejected: {0}")]
    ProxyConfig(String),

    /// Certificate issuance failed. The proxy keeps serving plain HTTP.
    #[error("Certificate issuance failed: {0}")]
    CertificateIssuance(String),

    /// An external command could not be spawned or failed outright.
    #[error("Command '{command}' failed: {detail}")]
    Command { command: String, detail: String },

    /// The provisioning config file could not be read or parsed.
    #[error("Invalid config file {path}: {details}")]
    ConfigFile { path: String, details: String },

    /// Credentials file could not be parsed.
    #[error("Malformed credentials file at line {line}: {details}")]
    MalformedCredentials { line: usize, details: String },

    /// Embedded template failed to load or render.
    #[error("Template '{name}' failed: {details}")]
    Template { name: String, details: String },

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn validation<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        AppError::Validation { field: field.into(), reason: reason.into() }
    }

    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation { .. } => 2,
            AppError::Dependency { .. } => 3,
            AppError::EnvironmentBuild { .. } => 4,
            AppError::ProxyConfig(_) => 5,
            AppError::Io(_)
            | AppError::CertificateIssuance(_)
            | AppError::Command { .. }
            | AppError::ConfigFile { .. }
            | AppError::MalformedCredentials { .. }
            | AppError::Template { .. }
            | AppError::Prompt(_) => 1,
        }
    }

    /// Whether the orchestrator may continue after this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::CertificateIssuance(_))
    }

    /// The exact shell command an operator can run to recover, when one is known.
    pub fn remediation(&self) -> Option<String> {
        match self {
            AppError::Dependency { package, .. } => {
                Some(format!("sudo apt-get update && sudo apt-get install -y {}", package))
            }
            AppError::ProxyConfig(_) => Some("sudo nginx -t".to_string()),
            AppError::EnvironmentBuild { step, .. } => Some(format!("sudo {}", step)),
            AppError::Validation { .. } => Some("hostprov provision --help".to_string()),
            _ => None,
        }
    }
}
