use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// 400 body for missing or blank request fields.
pub const MISSING_CONTENT: &str = "Missing content for analysis.";
/// 405 body for any method other than POST/OPTIONS on the analyze route.
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
/// 500 body for every provider, parse, or contract failure. Internal
/// detail stays in server-side logs.
pub const ANALYSIS_FAILED: &str = "Analysis failed. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only three fixed messages ever cross the trust boundary to the caller.
/// The variants stay distinct so logs can tell an unreachable provider from
/// an empty completion from a contract violation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("Provider returned an empty completion")]
    EmptyCompletion,

    #[error("Completion violated the response contract: {0}")]
    MalformedCompletion(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Request validation failed: {msg}");
                (StatusCode::BAD_REQUEST, MISSING_CONTENT)
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED),
            AppError::Provider(e) => {
                tracing::error!("Provider call failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED)
            }
            AppError::EmptyCompletion => {
                tracing::error!("Provider returned an empty completion");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED)
            }
            AppError::MalformedCompletion(detail) => {
                tracing::error!("Completion violated the response contract: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn status_and_body(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_fixed_message() {
        let (status, body) =
            status_and_body(AppError::Validation("resumeText is blank".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_CONTENT);
    }

    #[tokio::test]
    async fn test_method_not_allowed_maps_to_405() {
        let (status, body) = status_and_body(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_all_upstream_failures_share_the_same_opaque_500() {
        let failures = vec![
            AppError::Provider(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            }),
            AppError::EmptyCompletion,
            AppError::MalformedCompletion("not JSON".to_string()),
        ];

        for err in failures {
            let (status, body) = status_and_body(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["error"], ANALYSIS_FAILED);
        }
    }

    #[tokio::test]
    async fn test_internal_detail_never_reaches_the_body() {
        let (_, body) = status_and_body(AppError::Provider(LlmError::Api {
            status: 403,
            message: "API key sk-secret rejected".to_string(),
        }))
        .await;
        assert!(!body.to_string().contains("sk-secret"));
    }
}
