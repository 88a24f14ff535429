//! HTTP error response handling for the API
//!
//! Converts domain errors to HTTP responses with the fixed wire contract of
//! the login endpoint: a flat `{"error": "..."}` body whose label is stable
//! per error class (`"invalid"` for credential mismatch, `"db error"` for
//! datastore failures).

use crate::error::{Error, ToHttpStatus};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Implement IntoResponse for Error to automatically convert errors to HTTP responses
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side failures get logged here, at the boundary; the body
        // deliberately carries only the label, never the underlying message.
        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status_code, Json(json!({ "error": self.error_label() }))).into_response()
    }
}
