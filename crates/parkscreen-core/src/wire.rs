//! HTTP wire contract shared by the server and the client.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::prediction::{Label, Prediction};

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: FeatureVector,
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: Label,
    pub confidence: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            prediction: p.label,
            confidence: p.confidence,
        }
    }
}

/// Response of `GET /features`: the classifier's declared input feature
/// names, in training order. A form UI renders one numeric input per name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesResponse {
    pub features: Vec<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub n_features: usize,
}
