/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware return
 * it directly. This is the single place a rejected request is logged: client
 * errors at `warn`, server errors at `error`, both with the full error chain.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Fallback for unknown routes, in the same JSON shape as every other error
pub async fn not_found_fallback() -> Response {
    let body = serde_json::json!({
        "error": "route not found",
        "status": StatusCode::NOT_FOUND.as_u16(),
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
