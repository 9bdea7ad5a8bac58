//! On-disk model artifact schema.
//!
//! The artifact is a JSON document holding a trained binary
//! logistic-regression classifier: the declared input feature names (in
//! training order), an optional standard scaler, one coefficient per
//! feature, and the intercept. Produced offline by the training pipeline;
//! this crate only reads it.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Artifact format version this build reads.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Standardization parameters applied before the linear model:
/// `x' = (x - mean) / scale`, one pair per feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

/// Serialized trained classifier as written by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model_type: String,
    /// Input feature names in training order. Dimensionality contract for
    /// every prediction.
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    /// Check internal consistency. Called once at load; a malformed
    /// artifact must never reach inference.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }
        if self.model_type != "logistic_regression" {
            return Err(ModelError::UnsupportedModelType(self.model_type.clone()));
        }

        let n = self.feature_names.len();
        if n == 0 {
            return Err(ModelError::Malformed("no feature names declared".into()));
        }
        if self.coefficients.len() != n {
            return Err(ModelError::Malformed(format!(
                "{} coefficients for {n} features",
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() {
            return Err(ModelError::Malformed("intercept is not finite".into()));
        }
        if let Some(idx) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(ModelError::Malformed(format!(
                "coefficient {idx} is not finite"
            )));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.means.len() != n || scaler.scales.len() != n {
                return Err(ModelError::Malformed(format!(
                    "scaler has {} means and {} scales for {n} features",
                    scaler.means.len(),
                    scaler.scales.len()
                )));
            }
            if let Some(idx) = scaler.scales.iter().position(|s| !s.is_finite() || *s <= 0.0) {
                return Err(ModelError::Malformed(format!(
                    "scaler scale {idx} must be finite and positive"
                )));
            }
            if let Some(idx) = scaler.means.iter().position(|m| !m.is_finite()) {
                return Err(ModelError::Malformed(format!(
                    "scaler mean {idx} is not finite"
                )));
            }
        }

        Ok(())
    }
}
