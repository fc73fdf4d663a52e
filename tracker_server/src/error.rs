//! HTTP mapping of internal failures.
//!
//! Chart requests never fail at the HTTP level; fetch problems become the
//! error figure. `ApiError` only covers the remaining internal faults (such as
//! a poisoned favorites lock) and answers `500` with a JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;
use tracker_common::TrackerError;

/// Internal failure surfaced by a handler.
#[derive(Debug)]
pub struct ApiError(pub TrackerError);

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
