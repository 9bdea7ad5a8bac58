//! Clinical feature vectors.
//!
//! A feature vector is one patient's ordered clinical measurements. Order
//! and length must match the feature order the classifier was trained on;
//! the classifier enforces the length at predict time.

use serde::{Deserialize, Serialize};

/// Ordered numeric input representing one patient's clinical measurements.
///
/// Wraps the raw values without any dimensional guarantee of its own; the
/// classifier owning the trained weights checks the length against its
/// declared feature names when asked to predict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of measurements in the vector.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Index of the first non-finite value (NaN or infinity), if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|v| !v.is_finite())
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
