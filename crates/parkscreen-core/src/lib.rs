pub mod features;
pub mod prediction;
pub mod wire;

pub use features::FeatureVector;
pub use prediction::{Label, Prediction};
pub use wire::{FeaturesResponse, HealthResponse, PredictRequest, PredictResponse};
