//! Operator intent for a single provisioning run.

mod domain_name;
mod port;
mod service_account;

use std::path::{Component, Path, PathBuf};

pub use domain_name::DomainName;
pub use port::Port;
pub use service_account::ServiceAccount;

use crate::domain::validation::validate_identifier;
use crate::domain::{AppError, DeploymentProfile};

pub const DEFAULT_SERVICE_NAME: &str = "dashboard";
pub const DEFAULT_SERVICE_USER: &str = "dashboard";
pub const DEFAULT_APP_ENTRY: &str = "woocommerce_dashboard.py";
pub const INSTALL_BASE: &str = "/opt";

/// Top-level directories owned by the OS. The install dir is chowned
/// recursively, so it may never live inside one of these.
const SYSTEM_DIRS: &[&str] = &[
    "bin", "boot", "dev", "etc", "lib", "lib32", "lib64", "libx32", "proc", "root", "run", "sbin",
    "sys", "tmp", "usr",
];

/// Directories under `/var` that other packages own.
const SYSTEM_VAR_DIRS: &[&str] =
    &["backups", "cache", "lib", "local", "lock", "log", "mail", "opt", "run", "spool", "tmp"];

/// Names already used by nginx sites or system units on a Debian host.
const RESERVED_SERVICE_NAMES: &[&str] =
    &["default", "nginx", "ssh", "sshd", "ufw", "certbot", "cron", "networking", "systemd"];

/// Validated, immutable provisioning intent.
///
/// Every generated artifact is derived from one of these; there is no other
/// source for the port, account or domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningRequest {
    domain: Option<DomainName>,
    port: Port,
    service_user: ServiceAccount,
    create_user: bool,
    tls: bool,
    profile: DeploymentProfile,
    email: Option<String>,
    install_dir: PathBuf,
    app_entry: String,
    service_name: String,
}

impl ProvisioningRequest {
    pub fn domain(&self) -> Option<&DomainName> {
        self.domain.as_ref()
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn service_user(&self) -> &ServiceAccount {
        &self.service_user
    }

    pub fn create_user(&self) -> bool {
        self.create_user
    }

    /// TLS as requested by the operator, regardless of whether a domain exists.
    pub fn tls_requested(&self) -> bool {
        self.tls
    }

    /// Certificates are only ever issued for a named host.
    pub fn certificate_domain(&self) -> Option<&DomainName> {
        if self.tls { self.domain.as_ref() } else { None }
    }

    pub fn profile(&self) -> DeploymentProfile {
        self.profile
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Absolute install directory on the target host.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn app_entry(&self) -> &str {
        &self.app_entry
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// System packages this request needs, in installation order.
    pub fn required_packages(&self) -> Vec<&'static str> {
        let mut packages = self.profile.system_packages().to_vec();
        if self.certificate_domain().is_some() {
            packages.extend_from_slice(crate::domain::profile::TLS_PACKAGES);
        }
        packages
    }
}

/// Partially collected request values.
///
/// Sources are layered with [`RequestDraft::or`]: the receiver wins, the
/// argument fills gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    pub domain: Option<String>,
    pub port: Option<u32>,
    pub user: Option<String>,
    pub create_user: Option<bool>,
    pub tls: Option<bool>,
    pub profile: Option<DeploymentProfile>,
    pub email: Option<String>,
    pub install_dir: Option<PathBuf>,
    pub app_entry: Option<String>,
    pub service_name: Option<String>,
}

impl RequestDraft {
    pub fn or(self, fallback: RequestDraft) -> RequestDraft {
        RequestDraft {
            domain: self.domain.or(fallback.domain),
            port: self.port.or(fallback.port),
            user: self.user.or(fallback.user),
            create_user: self.create_user.or(fallback.create_user),
            tls: self.tls.or(fallback.tls),
            profile: self.profile.or(fallback.profile),
            email: self.email.or(fallback.email),
            install_dir: self.install_dir.or(fallback.install_dir),
            app_entry: self.app_entry.or(fallback.app_entry),
            service_name: self.service_name.or(fallback.service_name),
        }
    }

    /// Validate the draft and fill every remaining gap with its default.
    pub fn finalize(self) -> Result<ProvisioningRequest, AppError> {
        let profile = self.profile.unwrap_or_default();
        let domain = DomainName::parse_optional(self.domain.as_deref())?;
        let port = Port::new(self.port.unwrap_or(u32::from(profile.default_port())))?;
        let service_user =
            ServiceAccount::new(self.user.as_deref().unwrap_or(DEFAULT_SERVICE_USER))?;

        let service_name = self.service_name.unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        if !validate_identifier(&service_name, false) {
            return Err(AppError::validation(
                "service name",
                format!("'{}' must be alphanumeric with hyphens or underscores", service_name),
            ));
        }
        if RESERVED_SERVICE_NAMES.contains(&service_name.to_ascii_lowercase().as_str()) {
            return Err(AppError::validation(
                "service name",
                format!("'{}' collides with an existing nginx site or system unit", service_name),
            ));
        }

        let app_entry = self.app_entry.unwrap_or_else(|| DEFAULT_APP_ENTRY.to_string());
        if !validate_identifier(&app_entry, true) {
            return Err(AppError::validation(
                "app entry",
                format!("'{}' must be a plain file name", app_entry),
            ));
        }

        let install_dir = match self.install_dir {
            Some(dir) => normalize_install_dir(&dir)?,
            None => Path::new(INSTALL_BASE).join(&service_name),
        };

        let email = match self.email.map(|e| e.trim().to_string()) {
            Some(e) if e.is_empty() => None,
            Some(e) if !e.contains('@') || e.chars().any(char::is_whitespace) => {
                return Err(AppError::validation("email", format!("'{}' is not an address", e)));
            }
            other => other,
        };

        Ok(ProvisioningRequest {
            domain,
            port,
            service_user,
            create_user: self.create_user.unwrap_or(true),
            tls: self.tls.unwrap_or(false),
            profile,
            email,
            install_dir,
            app_entry,
            service_name,
        })
    }
}

/// Absolute, free of `..`, at least two levels deep and outside the OS directories.
fn normalize_install_dir(dir: &Path) -> Result<PathBuf, AppError> {
    let invalid = |reason: &str| {
        AppError::validation("install dir", format!("'{}' {}", dir.display(), reason))
    };

    if !dir.is_absolute() {
        return Err(invalid("must be an absolute path"));
    }

    let mut parts = Vec::new();
    for component in dir.components() {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::Normal(part) => parts.push(part),
            Component::ParentDir | Component::Prefix(_) => {
                return Err(invalid("must not contain '..'"));
            }
        }
    }

    if parts.len() < 2 {
        return Err(invalid("must be a dedicated directory such as /opt/<name> or /srv/<name>"));
    }
    let top = parts[0].to_str().unwrap_or_default();
    let second = parts[1].to_str().unwrap_or_default();
    if SYSTEM_DIRS.contains(&top) || (top == "var" && SYSTEM_VAR_DIRS.contains(&second)) {
        return Err(invalid("must not be inside a system directory"));
    }

    let mut normalized = PathBuf::from("/");
    normalized.extend(parts);
    Ok(normalized)
}
