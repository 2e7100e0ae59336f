use crate::domain::AppError;
use crate::domain::validation::validate_account_name;

/// A validated system account the service runs as.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceAccount(String);

impl ServiceAccount {
    pub fn new(name: &str) -> Result<Self, AppError> {
        let name = name.trim();
        if validate_account_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::validation(
                "user",
                format!(
                    "'{}' must start with a lowercase letter or '_' and contain only [a-z0-9_-]",
                    name
                ),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "root"
    }
}

impl std::fmt::Display for ServiceAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
