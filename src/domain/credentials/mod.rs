//! Credentials template model, dotenv parsing and redacted confirmation.

mod redaction;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use redaction::{MIN_PARTIAL_REVEAL_LEN, REVEAL_CHARS, redact};

/// One key of the credentials file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSpec {
    pub name: String,
    /// What the application uses the value for.
    pub description: String,
    #[serde(default)]
    pub required: bool,
    /// Marked as secret in the generated template.
    #[serde(default)]
    pub secret: bool,
    /// Google integration keys are omitted from lean profiles.
    #[serde(default)]
    pub google: bool,
    #[serde(default)]
    pub placeholder: String,
}

/// A parsed `KEY=VALUE` credentials file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsFile {
    entries: Vec<(String, String)>,
}

impl CredentialsFile {
    /// Parse dotenv syntax: `#` comments, blank lines, optional `export `,
    /// and single- or double-quoted values. Later duplicates win.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let mut entries: Vec<(String, String)> = Vec::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);

            let Some((key, value)) = line.split_once('=') else {
                return Err(AppError::MalformedCredentials {
                    line: index + 1,
                    details: "expected KEY=VALUE".to_string(),
                });
            };

            let key = key.trim();
            let valid_key = !key.is_empty()
                && !key.starts_with(|c: char| c.is_ascii_digit())
                && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid_key {
                return Err(AppError::MalformedCredentials {
                    line: index + 1,
                    details: format!("invalid key '{}'", key),
                });
            }

            let value = unquote(value.trim()).ok_or_else(|| AppError::MalformedCredentials {
                line: index + 1,
                details: "unterminated quote".to_string(),
            })?;

            entries.retain(|(existing, _)| existing != key);
            entries.push((key.to_string(), value));
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Required keys that are absent, empty or still the template placeholder.
    pub fn missing_required<'a>(&self, specs: &'a [CredentialSpec]) -> Vec<&'a str> {
        specs
            .iter()
            .filter(|spec| spec.required)
            .filter(|spec| {
                self.get(&spec.name).is_none_or(|v| v.is_empty() || v == spec.placeholder)
            })
            .map(|spec| spec.name.as_str())
            .collect()
    }

    /// One line per key confirming it was loaded. Every value is redacted,
    /// including keys absent from the catalog.
    pub fn confirmation_lines(&self) -> Vec<String> {
        self.entries.iter().map(|(key, value)| format!("{}={}", key, redact(value))).collect()
    }
}

fn unquote(value: &str) -> Option<String> {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            let end = rest.rfind(quote)?;
            return Some(rest[..end].to_string());
        }
    }
    // Inline comments only apply to unquoted values.
    let value = match value.find(" #") {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    };
    Some(value.to_string())
}
