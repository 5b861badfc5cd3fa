use thiserror::Error;

use crate::shared::core::api_key::ApiKey;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_KEY environment variable is not set")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: ApiKey,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY")
            .and_then(ApiKey::new)
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self { api_key })
    }
}
