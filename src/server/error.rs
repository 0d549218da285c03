//! Error-to-HTTP response conversion.
//!
//! Route handlers return `Result<T, AppError>`; every service error is turned
//! into a JSON body `{ "error": ..., "code": ... }` with the status code from
//! [`Error::http_status`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mediaaccess_common::Error;
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: Error,
}

impl AppError {
    pub fn new(inner: Error) -> Self {
        Self { inner }
    }

    fn code(&self) -> &'static str {
        match &self.inner {
            Error::ProviderNotFound { .. } => "provider_not_found",
            Error::DuplicateProvider { .. } => "duplicate_provider",
            Error::EntityNotFound { .. } => "not_found",
            Error::InvalidMediaType(_) => "invalid_media_type",
            Error::Backend { .. } => "backend_error",
            Error::Io(_) => "io_error",
            Error::Config(_) => "config_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::new(e)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::new(Error::Internal(format!("Request task failed: {}", e)))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
        }

        let body = json!({
            "error": self.inner.to_string(),
            "code": self.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
