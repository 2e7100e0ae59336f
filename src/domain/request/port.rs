use serde::Serialize;

use crate::domain::AppError;

/// A TCP port in the range 1..=65535.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    pub fn new(value: u32) -> Result<Self, AppError> {
        match u16::try_from(value) {
            Ok(port) if port != 0 => Ok(Self(port)),
            _ => Err(AppError::validation(
                "port",
                format!("{} is outside the range 1-65535", value),
            )),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let value: u32 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::validation("port", format!("'{}' is not a number", raw)))?;
        Self::new(value)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
