//! Classifier artifact loading and single-sample inference.

mod artifact;
mod classifier;
mod error;

pub use artifact::{ModelArtifact, Scaler, ARTIFACT_FORMAT_VERSION};
pub use classifier::Classifier;
pub use error::{InferenceError, ModelError};
