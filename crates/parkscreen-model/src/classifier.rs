//! Binary logistic-regression classifier over clinical feature vectors.
//!
//! Loaded once at process start from a JSON artifact and shared read-only
//! across requests. Inference is a dot product, an intercept, and a
//! sigmoid; nothing here mutates after load, so two calls with the same
//! input always produce the same output.

use std::fs;
use std::path::Path;

use parkscreen_core::{FeatureVector, Label, Prediction};
use tracing::info;

use crate::artifact::{ModelArtifact, Scaler};
use crate::error::{InferenceError, ModelError};

/// Pre-trained Parkinson's detector.
///
/// Holds the artifact's declared feature names (the dimensionality
/// contract), the optional standard scaler, and the linear model weights.
#[derive(Debug)]
pub struct Classifier {
    feature_names: Vec<String>,
    scaler: Option<Scaler>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl Classifier {
    /// Load and validate a model artifact from disk.
    ///
    /// Any failure here is fatal to the caller: a missing or malformed
    /// artifact means the process has nothing to serve.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        let classifier = Self::from_artifact(artifact)?;

        info!(
            model = %path.display(),
            n_features = classifier.n_features(),
            scaled = classifier.scaler.is_some(),
            "loaded classifier artifact"
        );

        Ok(classifier)
    }

    /// Build a classifier from an in-memory artifact, validating it first.
    ///
    /// Validation here keeps inconsistent weights out of inference no
    /// matter how the artifact was obtained; `predict_proba` indexes the
    /// coefficient and scaler arrays on the strength of it.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        Ok(Self {
            feature_names: artifact.feature_names,
            scaler: artifact.scaler,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    /// Number of input features the classifier expects.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Declared input feature names, in training order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Classify a single feature vector.
    ///
    /// The confidence is the probability of the *predicted* class: for a
    /// [`Label::Healthy`] verdict it is `1 - p(parkinsons)`.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        let [p0, p1] = self.predict_proba(features)?;

        let (label, confidence) = if p1 >= 0.5 {
            (Label::Parkinsons, p1)
        } else {
            (Label::Healthy, p0)
        };

        Ok(Prediction { label, confidence })
    }

    /// Per-class probability distribution `[p(healthy), p(parkinsons)]`.
    ///
    /// Rejects vectors whose length does not match the declared feature
    /// names, and vectors containing NaN or infinity, before any
    /// arithmetic runs.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], InferenceError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(InferenceError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }
        if let Some(index) = features.first_non_finite() {
            return Err(InferenceError::NonFiniteFeature { index });
        }

        let mut z = self.intercept;
        match &self.scaler {
            Some(scaler) => {
                for (i, &x) in features.as_slice().iter().enumerate() {
                    let standardized = (x - scaler.means[i]) / scaler.scales[i];
                    z += self.coefficients[i] * standardized;
                }
            }
            None => {
                for (coef, &x) in self.coefficients.iter().zip(features.as_slice()) {
                    z += coef * x;
                }
            }
        }

        let p1 = sigmoid(z);
        Ok([1.0 - p1, p1])
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ARTIFACT_FORMAT_VERSION;
    use std::path::PathBuf;

    /// Hand-built two-feature classifier: p1 = sigmoid(x0 - x1).
    fn two_feature_classifier() -> Classifier {
        Classifier::from_artifact(ModelArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_type: "logistic_regression".into(),
            feature_names: vec!["a".into(), "b".into()],
            scaler: None,
            coefficients: vec![1.0, -1.0],
            intercept: 0.0,
        })
        .unwrap()
    }

    fn demo_artifact_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("models")
            .join("parkinsons.json")
    }

    #[test]
    fn sigmoid_midpoint_and_symmetry() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
        assert!(sigmoid(40.0) > 0.999999);
        assert!(sigmoid(-40.0) < 1e-6);
    }

    #[test]
    fn positive_margin_predicts_parkinsons() {
        let clf = two_feature_classifier();
        let pred = clf.predict(&vec![3.0, 1.0].into()).unwrap();
        assert_eq!(pred.label, Label::Parkinsons);
        assert!(pred.confidence > 0.5 && pred.confidence <= 1.0);
    }

    #[test]
    fn negative_margin_predicts_healthy() {
        let clf = two_feature_classifier();
        let pred = clf.predict(&vec![1.0, 3.0].into()).unwrap();
        assert_eq!(pred.label, Label::Healthy);
        assert!(pred.confidence > 0.5 && pred.confidence <= 1.0);
    }

    #[test]
    fn proba_sums_to_one() {
        let clf = two_feature_classifier();
        let [p0, p1] = clf.predict_proba(&vec![0.3, -1.7].into()).unwrap();
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&p0));
        assert!((0.0..=1.0).contains(&p1));
    }

    #[test]
    fn confidence_is_predicted_class_probability() {
        let clf = two_feature_classifier();

        // Label 1: confidence equals p1 (max-probability and positive-class
        // conventions agree).
        let input: FeatureVector = vec![5.0, 0.0].into();
        let [_, p1] = clf.predict_proba(&input).unwrap();
        let pred = clf.predict(&input).unwrap();
        assert_eq!(pred.label, Label::Parkinsons);
        assert!((pred.confidence - p1).abs() < 1e-12);

        // Label 0: confidence equals 1 - p1, so the two conventions differ.
        let input: FeatureVector = vec![0.0, 5.0].into();
        let [_, p1] = clf.predict_proba(&input).unwrap();
        let pred = clf.predict(&input).unwrap();
        assert_eq!(pred.label, Label::Healthy);
        assert!((pred.confidence - (1.0 - p1)).abs() < 1e-12);
        assert!((pred.confidence - p1).abs() > 0.9);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let clf = two_feature_classifier();
        let input: FeatureVector = vec![0.12345, -9.87].into();
        let a = clf.predict(&input).unwrap();
        let b = clf.predict(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_dimension_is_a_typed_fault() {
        let clf = two_feature_classifier();
        // One fewer feature than expected.
        let err = clf.predict(&vec![1.0].into()).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn non_finite_feature_is_rejected() {
        let clf = two_feature_classifier();
        let err = clf.predict(&vec![1.0, f64::NAN].into()).unwrap_err();
        assert!(matches!(err, InferenceError::NonFiniteFeature { index: 1 }));
    }

    #[test]
    fn scaler_standardizes_before_linear_model() {
        let clf = Classifier::from_artifact(ModelArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_type: "logistic_regression".into(),
            feature_names: vec!["a".into()],
            scaler: Some(Scaler {
                means: vec![10.0],
                scales: vec![2.0],
            }),
            coefficients: vec![1.0],
            intercept: 0.0,
        })
        .unwrap();

        // x = 10 standardizes to 0, so p1 = sigmoid(0) = 0.5 exactly and
        // the tie goes to the positive class.
        let [_, p1] = clf.predict_proba(&vec![10.0].into()).unwrap();
        assert!((p1 - 0.5).abs() < 1e-12);

        // x = 14 standardizes to +2.
        let [_, p1] = clf.predict_proba(&vec![14.0].into()).unwrap();
        assert!((p1 - sigmoid(2.0)).abs() < 1e-12);
    }

    #[test]
    fn from_artifact_rejects_inconsistent_weights() {
        // Fewer coefficients than feature names must fail up front, not
        // panic on indexing during a later prediction.
        let err = Classifier::from_artifact(ModelArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_type: "logistic_regression".into(),
            feature_names: vec!["a".into(), "b".into()],
            scaler: None,
            coefficients: vec![1.0],
            intercept: 0.0,
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));

        // Same for scaler arrays shorter than the feature list.
        let err = Classifier::from_artifact(ModelArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_type: "logistic_regression".into(),
            feature_names: vec!["a".into(), "b".into()],
            scaler: Some(Scaler {
                means: vec![0.0],
                scales: vec![1.0],
            }),
            coefficients: vec![1.0, -1.0],
            intercept: 0.0,
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));
    }

    #[test]
    fn load_missing_artifact_fails() {
        let err = Classifier::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn load_demo_artifact() {
        let clf = Classifier::load(&demo_artifact_path()).unwrap();
        assert_eq!(clf.n_features(), 22);
        assert_eq!(clf.feature_names()[0], "MDVP:Fo(Hz)");
        assert_eq!(clf.feature_names()[21], "PPE");
    }

    /// Regression fixture: the all-zeros vector against the committed demo
    /// artifact. Pins both the verdict and the confidence so artifact edits
    /// are caught.
    #[test]
    fn all_zeros_fixture_against_demo_artifact() {
        let clf = Classifier::load(&demo_artifact_path()).unwrap();
        let zeros: FeatureVector = vec![0.0; clf.n_features()].into();

        let pred = clf.predict(&zeros).unwrap();
        let again = clf.predict(&zeros).unwrap();
        assert_eq!(pred, again);

        // Zero jitter, shimmer, and noise ratios standardize far below
        // their training means, which the weights read as an implausibly
        // clean voice: the artifact calls this healthy, decisively.
        assert_eq!(pred.label, Label::Healthy);
        assert!(pred.confidence > 0.99 && pred.confidence <= 1.0);
    }
}
