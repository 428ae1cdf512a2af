//! Error types for the tutoring service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for tutoring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tutoring service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing credential or connection parameter)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vector store unreachable or returned malformed records
    #[error("Retrieval failure: {0}")]
    Retrieval(String),

    /// Chat-completion or web-search call failed or timed out
    #[error("Tool execution failure: {0}")]
    ToolExecution(String),

    /// Model output could not be parsed after the documented normalization steps
    #[error("Malformed model output: {message}")]
    MalformedOutput { message: String, raw: String },

    /// Retrieval returned no chunks where content was required
    #[error("No content found: {0}")]
    EmptyRetrieval(String),

    /// The request is missing a required field or carries an unusable value
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Create a retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval(message.into())
    }

    /// Create a tool execution error
    pub fn tool(message: impl Into<String>) -> Self {
        Self::ToolExecution(message.into())
    }

    /// Create a malformed-output error carrying the raw model text
    pub fn malformed(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::MalformedOutput {
            message: message.into(),
            raw: raw.into(),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Retrieval(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::ToolExecution(format!("request timed out: {}", err))
        } else {
            Error::ToolExecution(err.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": {"type": "config_error", "message": msg}}),
            ),
            Error::Retrieval(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": {"type": "retrieval_error", "message": msg}}),
            ),
            // Internals are logged; the caller only sees a generic apology.
            Error::ToolExecution(msg) => {
                tracing::error!("tool execution failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": {
                        "type": "tool_error",
                        "message": "Sorry, the assistant could not complete this request. Please try again."
                    }}),
                )
            }
            Error::MalformedOutput { message, raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": {"type": "malformed_output", "message": message, "raw": raw}}),
            ),
            Error::EmptyRetrieval(msg) => (
                StatusCode::NOT_FOUND,
                json!({"error": {"type": "no_content", "message": msg}}),
            ),
            Error::InvalidRequest(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": {"type": "invalid_request", "message": msg}}),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_error_maps_to_retrieval() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, Error::Retrieval(_)));
    }

    #[test]
    fn test_invalid_request_maps_to_422() {
        let response = Error::InvalidRequest("document is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_malformed_keeps_raw_text() {
        let err = Error::malformed("bad quiz", "not json at all");
        match err {
            Error::MalformedOutput { raw, .. } => assert_eq!(raw, "not json at all"),
            _ => panic!("wrong variant"),
        }
    }
}
