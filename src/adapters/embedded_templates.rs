//! Templates and catalogs embedded in the binary.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, CredentialSpec};

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

pub const SERVICE_TEMPLATE: &str = "service.j2";
pub const PROXY_TEMPLATE: &str = "nginx.conf.j2";
pub const CREDENTIALS_TEMPLATE: &str = "env.example.j2";
pub const LOADER_TEMPLATE: &str = "load_env.sh.j2";
pub const NEXT_STEPS_TEMPLATE: &str = "next_steps.md.j2";

const CREDENTIALS_CATALOG: &str = "credentials.toml";

#[derive(Debug, Deserialize)]
struct CredentialCatalog {
    #[serde(default)]
    credential: Vec<CredentialSpec>,
}

/// Renders the embedded artifact templates.
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl EmbeddedTemplates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let templates = ASSETS_DIR.get_dir("templates").ok_or_else(|| AppError::Template {
            name: "templates".to_string(),
            details: "embedded template directory missing".to_string(),
        })?;

        for file in templates.files() {
            let name = file.path().file_name().and_then(|n| n.to_str()).unwrap_or_default();
            let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                name: name.to_string(),
                details: "template is not valid UTF-8".to_string(),
            })?;
            env.add_template(name, source).map_err(|e| AppError::Template {
                name: name.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| AppError::Template {
            name: name.to_string(),
            details: e.to_string(),
        })?;
        template
            .render(ctx)
            .map_err(|e| AppError::Template { name: name.to_string(), details: e.to_string() })
    }

    /// Credential keys in template order.
    pub fn credential_catalog(&self) -> Result<Vec<CredentialSpec>, AppError> {
        let file = ASSETS_DIR.get_file(CREDENTIALS_CATALOG).ok_or_else(|| {
            AppError::Template {
                name: CREDENTIALS_CATALOG.to_string(),
                details: "embedded catalog missing".to_string(),
            }
        })?;
        let content = file.contents_utf8().ok_or_else(|| AppError::Template {
            name: CREDENTIALS_CATALOG.to_string(),
            details: "catalog is not valid UTF-8".to_string(),
        })?;
        let catalog: CredentialCatalog = toml::from_str(content).map_err(|e| {
            AppError::Template { name: CREDENTIALS_CATALOG.to_string(), details: e.to_string() }
        })?;
        Ok(catalog.credential)
    }
}
