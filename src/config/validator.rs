//! Config validation.

use crate::config::EndpointsConfig;
use crate::error::ConfigError;

pub fn validate(config: &EndpointsConfig) -> Result<(), ConfigError> {
    let url = config.base_url.trim();
    if url.is_empty() {
        return Err(ConfigError::Validation("base_url must not be empty".into()));
    }
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::Validation(format!("base_url must be an http(s) URL: {}", url)))?;
    if host.is_empty() || host.starts_with('/') {
        return Err(ConfigError::Validation(format!("base_url has no host: {}", url)));
    }
    Ok(())
}
