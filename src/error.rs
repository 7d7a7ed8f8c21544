//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse: {0}")]
    Parse(String),
    #[error("invalid formatter: {0} (expected flat or layered)")]
    InvalidFormatter(String),
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum EndpointError {
    /// A route judged resolvable still needs a parameter nobody bound.
    #[error("unresolvable route '{uri}': missing parameter '{parameter}'")]
    UnresolvableRoute { uri: String, parameter: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        let (code, details) = match &self {
            EndpointError::UnresolvableRoute { uri, parameter } => (
                "unresolvable_route",
                Some(serde_json::json!({ "uri": uri, "parameter": parameter })),
            ),
            EndpointError::Config(_) => ("config_error", None),
            EndpointError::Serialization(_) => ("serialization_error", None),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
