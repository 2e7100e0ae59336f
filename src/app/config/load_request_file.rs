//! Provisioning config file (`.toml`, `.yml` or `.yaml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::domain::{AppError, DeploymentProfile, RequestDraft};

/// On-disk shape of a provisioning config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProvisionConfigFile {
    domain: Option<String>,
    port: Option<u32>,
    user: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    create_user: Option<bool>,
    #[serde(default, deserialize_with = "yes_no")]
    tls: Option<bool>,
    #[serde(default, deserialize_with = "profile")]
    profile: Option<DeploymentProfile>,
    email: Option<String>,
    install_dir: Option<PathBuf>,
    app_entry: Option<String>,
    service_name: Option<String>,
}

impl From<ProvisionConfigFile> for RequestDraft {
    fn from(file: ProvisionConfigFile) -> Self {
        RequestDraft {
            domain: file.domain,
            port: file.port,
            user: file.user,
            create_user: file.create_user,
            tls: file.tls,
            profile: file.profile,
            email: file.email,
            install_dir: file.install_dir,
            app_entry: file.app_entry,
            service_name: file.service_name,
        }
    }
}

/// Accept `true`/`false` as well as the `yes`/`no` spelling the CLI uses.
fn yes_no<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Text(text)) => parse_yes_no(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected yes or no, got '{}'", text))),
    }
}

/// Same spellings as `--profile` (`standard`, `constrained`, `pi`, `raspberry-pi`).
fn profile<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DeploymentProfile>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|text| text.parse::<DeploymentProfile>().map_err(serde::de::Error::custom))
        .transpose()
}

pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}

/// Load a config file into a draft. The format follows the extension.
pub fn load_request_file(path: &Path) -> Result<RequestDraft, AppError> {
    let config_error = |details: String| AppError::ConfigFile {
        path: path.display().to_string(),
        details,
    };

    let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    parse_request_file(path, &content).map_err(config_error)
}

fn parse_request_file(path: &Path, content: &str) -> Result<RequestDraft, String> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let file: ProvisionConfigFile = match extension {
        "toml" => toml::from_str(content).map_err(|e| e.to_string())?,
        "yml" | "yaml" => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        other => return Err(format!("unsupported extension '{}' (use .toml or .yaml)", other)),
    };
    Ok(file.into())
}
