//! Input collection: flags and config file first, prompts for the rest.

use tracing::debug;

use crate::domain::request::DEFAULT_SERVICE_USER;
use crate::domain::{
    AppError, DeploymentProfile, DomainName, Port, ProvisioningRequest, RequestDraft,
    ServiceAccount,
};
use crate::ports::Prompter;

/// Produce a validated request.
///
/// With a prompter, every value still missing from `draft` is asked for and
/// invalid answers are re-asked. Without one, defaults fill the gaps.
pub fn collect(
    draft: RequestDraft,
    prompter: Option<&dyn Prompter>,
) -> Result<ProvisioningRequest, AppError> {
    let draft = match prompter {
        Some(prompter) => prompt_missing(draft, prompter)?,
        None => draft,
    };
    let request = draft.finalize()?;
    debug!(?request, "collected request");
    Ok(request)
}

fn prompt_missing(mut draft: RequestDraft, prompter: &dyn Prompter) -> Result<RequestDraft, AppError> {
    if draft.profile.is_none() {
        let labels = ["standard (VPS or desktop)", "constrained (Raspberry Pi class hardware)"];
        let index = prompter.select("Deployment profile", &labels, 0)?;
        draft.profile = DeploymentProfile::ALL.get(index).copied();
    }
    let profile = draft.profile.unwrap_or_default();

    if draft.domain.is_none() {
        let answer = prompter.input(
            "Domain name (leave empty for IP-only access)",
            Some(""),
            &|value: &str| DomainName::parse_optional(Some(value)).map(|_| ()).map_err(|e| e.to_string()),
        )?;
        draft.domain = Some(answer);
    }

    if draft.port.is_none() {
        let default_port = profile.default_port().to_string();
        let answer = prompter.input("Application port", Some(&default_port), &|value: &str| {
            Port::parse(value).map(|_| ()).map_err(|e| e.to_string())
        })?;
        draft.port = Some(u32::from(Port::parse(&answer)?.get()));
    }

    if draft.create_user.is_none() {
        draft.create_user = Some(prompter.confirm("Create a dedicated service user?", true)?);
    }

    if draft.user.is_none() {
        let answer = prompter.input("Service user", Some(DEFAULT_SERVICE_USER), &|value: &str| {
            ServiceAccount::new(value).map(|_| ()).map_err(|e| e.to_string())
        })?;
        draft.user = Some(answer);
    }

    let has_domain = draft.domain.as_deref().is_some_and(|d| !d.trim().is_empty());
    if draft.tls.is_none() {
        draft.tls = Some(
            has_domain && prompter.confirm("Issue a TLS certificate with Let's Encrypt?", true)?,
        );
    }

    if draft.tls == Some(true) && has_domain && draft.email.is_none() {
        let answer = prompter.input(
            "Email for certificate expiry notices (leave empty to skip)",
            Some(""),
            &|value: &str| {
                if value.trim().is_empty() || value.contains('@') {
                    Ok(())
                } else {
                    Err("not an email address".to_string())
                }
            },
        )?;
        draft.email = Some(answer);
    }

    Ok(draft)
}
