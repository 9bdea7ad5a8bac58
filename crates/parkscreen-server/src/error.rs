//! Mapping from inference faults to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parkscreen_model::InferenceError;
use serde_json::json;
use thiserror::Error;

/// Faults surfaced by the API.
///
/// A bad feature vector is the caller's error and carries a diagnostic
/// payload; it must never surface as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Inference(err) => {
                let body = match &err {
                    InferenceError::DimensionMismatch { expected, actual } => json!({
                        "error": err.to_string(),
                        "expected": expected,
                        "actual": actual,
                    }),
                    InferenceError::NonFiniteFeature { index } => json!({
                        "error": err.to_string(),
                        "index": index,
                    }),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
