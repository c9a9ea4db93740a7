//! Error-to-response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use loadbench_core::Error;
use serde_json::json;

/// Wrapper turning core errors into HTTP responses
///
/// `Validation` → 400, `NotFound` → 404, `Execution` → 502 (the runner is
/// upstream infrastructure from the API's point of view), `Io` → 500.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Execution(_) => StatusCode::BAD_GATEWAY,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
