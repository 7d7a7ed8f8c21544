//! Endpoint configuration as read from JSON or the environment.

use crate::formatter::FormatterKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Absolute URL every route path is joined to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Output shape for handlers that do not choose one.
    #[serde(default)]
    pub formatter: FormatterKind,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        EndpointsConfig {
            base_url: default_base_url(),
            formatter: FormatterKind::default(),
        }
    }
}
