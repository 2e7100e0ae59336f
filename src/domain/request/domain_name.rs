use crate::domain::AppError;

/// A validated public DNS name the proxy answers for.
///
/// Guarantees:
/// - Lowercase ASCII letters, digits, `-` and `.` only
/// - Every label is 1..=63 characters and does not start or end with `-`
/// - At most 253 characters in total
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// Validate and create a new `DomainName`.
    ///
    /// Accepts a pasted URL (`https://shop.example.com/`) and keeps only its host.
    /// A leading `www.` is kept as typed; the proxy adds the `www.` alias itself.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let host = if trimmed.contains("://") {
            let parsed = url::Url::parse(trimmed)
                .map_err(|e| AppError::validation("domain", format!("'{}': {}", trimmed, e)))?;
            match parsed.host() {
                Some(url::Host::Domain(host)) => host.to_string(),
                _ => {
                    return Err(AppError::validation(
                        "domain",
                        format!("'{}' does not contain a DNS name", trimmed),
                    ));
                }
            }
        } else {
            trimmed.trim_end_matches('.').to_ascii_lowercase()
        };

        if host.is_empty() || host.len() > 253 {
            return Err(AppError::validation("domain", format!("'{}' has invalid length", raw)));
        }

        for label in host.split('.') {
            let valid = !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
            if !valid {
                return Err(AppError::validation(
                    "domain",
                    format!("'{}' contains invalid characters", raw),
                ));
            }
        }

        Ok(Self(host))
    }

    /// Parse optional operator input where empty means "no domain".
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, AppError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::new(value).map(Some),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Names the virtual host answers for: the apex and its `www.` alias.
    pub fn server_names(&self) -> Vec<String> {
        if self.0.starts_with("www.") {
            vec![self.0.clone()]
        } else {
            vec![self.0.clone(), format!("www.{}", self.0)]
        }
    }
}

impl std::fmt::Display for DomainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
