//! Route handlers and router assembly.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use parkscreen_core::{FeaturesResponse, HealthResponse, PredictRequest, PredictResponse};
use parkscreen_model::Classifier;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiError;

/// Shared read-only state: the classifier loaded at startup.
pub type AppState = Arc<Classifier>;

/// Assemble the API router around a loaded classifier.
///
/// CORS policy is deliberate and uniform: any origin, any method, any
/// header, credentials disallowed.
pub fn router(classifier: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/features", get(features))
        .route("/health", get(health))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(classifier)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// `POST /predict` — classify one feature vector.
async fn predict(
    State(classifier): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let prediction = classifier.predict(&req.features)?;
    debug!(
        label = prediction.label.as_str(),
        confidence = prediction.confidence,
        "served prediction"
    );
    Ok(Json(prediction.into()))
}

/// `GET /features` — declared input feature names, in training order.
async fn features(State(classifier): State<AppState>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        features: classifier.feature_names().to_vec(),
    })
}

/// `GET /health` — liveness plus the dimensionality contract.
async fn health(State(classifier): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        n_features: classifier.n_features(),
    })
}
