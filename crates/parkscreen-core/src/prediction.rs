//! Prediction outcome types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary verdict of the Parkinson's classifier.
///
/// Serialized on the wire as the integers the original dataset uses:
/// 0 = healthy, 1 = Parkinson's detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    Healthy,
    Parkinsons,
}

#[derive(Debug, Error)]
#[error("invalid class label {0}, expected 0 or 1")]
pub struct InvalidLabel(pub u8);

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        match label {
            Label::Healthy => 0,
            Label::Parkinsons => 1,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = InvalidLabel;

    fn try_from(value: u8) -> Result<Self, InvalidLabel> {
        match value {
            0 => Ok(Label::Healthy),
            1 => Ok(Label::Parkinsons),
            other => Err(InvalidLabel(other)),
        }
    }
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Parkinsons => "parkinsons",
        }
    }
}

/// Result of classifying a single feature vector.
///
/// `confidence` is the probability mass assigned to the *predicted* class,
/// not the probability of the positive class: when the label is
/// [`Label::Healthy`] it equals `1 - p(parkinsons)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Probability of the predicted class, in `[0, 1]`.
    pub confidence: f64,
}
