use thiserror::Error;

/// Faults raised while loading a model artifact. All of these are fatal at
/// process startup: a service cannot serve without a valid classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("unsupported model type: {0:?}")]
    UnsupportedModelType(String),

    #[error("malformed model artifact: {0}")]
    Malformed(String),
}

/// Faults raised at predict time. These are caller errors, not server
/// faults, and map to a 4xx response on the HTTP surface.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("feature vector has {actual} values, classifier expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("feature at index {index} is not a finite number")]
    NonFiniteFeature { index: usize },
}
