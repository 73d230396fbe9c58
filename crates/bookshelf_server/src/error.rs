//! Error types for the server.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::net::SocketAddr;
use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur in the server.
///
/// GraphQL-level failures (unknown fields, missing arguments) are not
/// represented here; they travel in the `errors` member of the response body.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Invalid configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid HTTP request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Operation not allowed for this HTTP method.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServerError::InvalidRequest(_) | ServerError::MethodNotAllowed(_)
        )
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        match self {
            ServerError::MethodNotAllowed(msg) => {
                (status, [(header::ALLOW, "POST")], error_body(msg)).into_response()
            }
            ServerError::InvalidRequest(msg) => (status, error_body(msg)).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

/// GraphQL-shaped error body: `{"errors":[{"message":...}]}`.
fn error_body(message: String) -> Json<serde_json::Value> {
    Json(json!({ "errors": [ { "message": message } ] }))
}
