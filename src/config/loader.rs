//! Load endpoint config from a JSON document or from environment variables.

use crate::config::{validate, EndpointsConfig};
use crate::error::ConfigError;
use crate::route::RouteTable;

pub const ENV_BASE_URL: &str = "ENDPOINTS_BASE_URL";
/// Fallback when `ENDPOINTS_BASE_URL` is not set.
pub const ENV_APP_URL: &str = "APP_URL";
pub const ENV_FORMATTER: &str = "ENDPOINTS_FORMATTER";

impl EndpointsConfig {
    /// Parse and validate a JSON config document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EndpointsConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        validate(&config)?;
        Ok(config)
    }

    /// Read config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read config through `lookup` (key -> value), e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EndpointsConfig::default();
        if let Some(url) = lookup(ENV_BASE_URL).or_else(|| lookup(ENV_APP_URL)) {
            config.base_url = url;
        }
        if let Some(formatter) = lookup(ENV_FORMATTER) {
            config.formatter = formatter.parse()?;
        }
        tracing::debug!(base_url = %config.base_url, formatter = ?config.formatter, "endpoint config loaded");
        validate(&config)?;
        Ok(config)
    }

    /// Empty route table rooted at the configured base URL.
    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(self.base_url.clone())
    }
}
