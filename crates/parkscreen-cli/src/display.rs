//! Human-readable rendering of prediction results.

use parkscreen_core::{Label, Prediction};

/// One-line verdict with a confidence percentage, e.g.
/// `Parkinson's detected (confidence: 87.32%)`.
pub fn verdict_line(prediction: &Prediction) -> String {
    let pct = prediction.confidence * 100.0;
    match prediction.label {
        Label::Parkinsons => format!("Parkinson's detected (confidence: {pct:.2}%)"),
        Label::Healthy => format!("No Parkinson's detected (confidence: {pct:.2}%)"),
    }
}
