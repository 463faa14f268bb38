use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Malformed model output is never an error here; the segmenter absorbs it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::Configuration(err.to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("Failed to tailor resume: {msg}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_maps_to_configuration() {
        let err: AppError = LlmError::MissingApiKey.into();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_empty_content_maps_to_upstream() {
        let err: AppError = LlmError::EmptyContent.into();
        match err {
            AppError::Upstream(msg) => assert!(msg.contains("empty")),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_api_error_keeps_upstream_description() {
        let err: AppError = LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        }
        .into();
        assert!(err.to_string().contains("invalid x-api-key"));
    }

    #[test]
    fn test_status_codes() {
        let config = AppError::Configuration("missing".to_string()).into_response();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = AppError::Upstream("timeout".to_string()).into_response();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }
}
