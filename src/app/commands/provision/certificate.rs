//! Let's Encrypt certificate through certbot's nginx plugin.

use std::path::Path;

use tracing::info;

use super::DeploymentPlan;
use crate::adapters::HostFiles;
use crate::app::AppContext;
use crate::domain::target::{LETSENCRYPT_DHPARAMS_FILE, LETSENCRYPT_OPTIONS_FILE};
use crate::domain::{AppError, DomainName, InstalledCertificate};
use crate::ports::CommandRunner;

/// The certificate certbot already issued for this run's domain, if any.
pub(super) fn installed(files: &HostFiles<'_>, plan: &DeploymentPlan) -> Option<InstalledCertificate> {
    let domain = plan.request.certificate_domain()?;
    let dir = plan.target.certificate_dir(domain);
    let fullchain = dir.join("fullchain.pem");
    let private_key = dir.join("privkey.pem");
    if !files.exists(&fullchain) || !files.exists(&private_key) {
        return None;
    }

    let optional = |path: &str| files.exists(Path::new(path)).then(|| path.to_string());
    Some(InstalledCertificate {
        fullchain: fullchain.display().to_string(),
        private_key: private_key.display().to_string(),
        options_include: optional(LETSENCRYPT_OPTIONS_FILE),
        dhparam: optional(LETSENCRYPT_DHPARAMS_FILE),
    })
}

/// certbot arguments for `domain` and every alias the proxy serves.
pub(super) fn certbot_args(domain: &DomainName, email: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = [
        "--nginx",
        "--non-interactive",
        "--agree-tos",
        "--redirect",
        "--keep-until-expiring",
    ]
    .iter()
    .map(|a| a.to_string())
    .collect();

    for name in domain.server_names() {
        args.push("-d".to_string());
        args.push(name);
    }

    match email {
        Some(email) => {
            args.push("-m".to_string());
            args.push(email.to_string());
        }
        None => args.push("--register-unsafely-without-email".to_string()),
    }
    args
}

/// Issue and install the certificate. Never invoked without a domain.
///
/// An existing certificate is left to certbot's renewal timer; the proxy
/// step already rendered the HTTPS server for it.
pub(super) fn issue<R: CommandRunner>(ctx: &AppContext<R>, plan: &DeploymentPlan) -> Result<(), AppError> {
    let Some(domain) = plan.request.certificate_domain() else {
        return Ok(());
    };
    if installed(&HostFiles::new(&plan.target), plan).is_some() {
        info!(domain = %domain, "certificate already installed");
        return Ok(());
    }

    info!(domain = %domain, "requesting certificate");
    let args = certbot_args(domain, plan.request.email());
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = ctx
        .runner()
        .run("certbot", &arg_refs)
        .map_err(|e| AppError::CertificateIssuance(e.to_string()))?;
    if !output.success() {
        return Err(AppError::CertificateIssuance(output.failure_detail()));
    }
    Ok(())
}
