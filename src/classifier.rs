//! Optional machine-learned strength classifier.
//!
//! The analyzer never trains or loads a model. Callers plug one in through
//! [`StrengthClassifier`]; any failure only removes the score boost.

use thiserror::Error;

use crate::types::CharacterProfile;

/// Maximum number of points the classifier can add to a score.
pub const ML_BOOST_POINTS: f64 = 20.0;

/// Features handed to the classifier, in model order:
/// `[length, has_upper, has_lower, has_digit, has_special, entropy, diversity_count]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; 7]);

impl FeatureVector {
    pub fn new(length: usize, profile: &CharacterProfile, entropy: f64) -> Self {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        Self([
            length as f64,
            flag(profile.has_upper),
            flag(profile.has_lower),
            flag(profile.has_digit),
            flag(profile.has_special),
            entropy,
            f64::from(profile.diversity_count),
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Classifier prediction failed: {0}")]
    Prediction(String),
    #[error("Classifier returned an out-of-range probability: {0}")]
    OutOfRange(f64),
}

/// Capability: probability in `[0, 1]` that a password is strong.
pub trait StrengthClassifier: Send + Sync {
    fn predict_strength_probability(&self, features: &FeatureVector)
    -> Result<f64, ClassifierError>;
}

impl<F> StrengthClassifier for F
where
    F: Fn(&FeatureVector) -> Result<f64, ClassifierError> + Send + Sync,
{
    fn predict_strength_probability(
        &self,
        features: &FeatureVector,
    ) -> Result<f64, ClassifierError> {
        self(features)
    }
}

/// What happened at the classifier stage of one analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ClassifierOutcome {
    #[default]
    NotConfigured,
    Applied {
        probability: f64,
    },
    Failed(ClassifierError),
}

impl ClassifierOutcome {
    /// Points added to the score.
    pub fn boost(&self) -> f64 {
        match self {
            Self::Applied { probability } => probability * ML_BOOST_POINTS,
            _ => 0.0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Runs the classifier, if any, and neutralizes its failures.
pub(crate) fn run_classifier(
    classifier: Option<&dyn StrengthClassifier>,
    features: &FeatureVector,
) -> ClassifierOutcome {
    let Some(classifier) = classifier else {
        return ClassifierOutcome::NotConfigured;
    };

    let result = classifier
        .predict_strength_probability(features)
        .and_then(|p| {
            if (0.0..=1.0).contains(&p) {
                Ok(p)
            } else {
                Err(ClassifierError::OutOfRange(p))
            }
        });

    match result {
        Ok(probability) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("ML prediction: {:.4}", probability);
            ClassifierOutcome::Applied { probability }
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Strength classifier failed, skipping boost: {}", e);
            ClassifierOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CharacterProfile {
        CharacterProfile {
            has_upper: true,
            has_lower: true,
            has_digit: false,
            has_special: true,
            diversity_count: 3,
        }
    }

    #[test]
    fn test_feature_vector_order() {
        let features = FeatureVector::new(10, &profile(), 12.5);
        assert_eq!(
            features.as_slice(),
            &[10.0, 1.0, 1.0, 0.0, 1.0, 12.5, 3.0]
        );
    }

    #[test]
    fn test_no_classifier() {
        let features = FeatureVector::new(1, &profile(), 0.0);
        let outcome = run_classifier(None, &features);
        assert_eq!(outcome, ClassifierOutcome::NotConfigured);
        assert_eq!(outcome.boost(), 0.0);
    }

    #[test]
    fn test_applied_boost() {
        let clf = |_: &FeatureVector| -> Result<f64, ClassifierError> { Ok(0.5) };
        let features = FeatureVector::new(1, &profile(), 0.0);
        let outcome = run_classifier(Some(&clf as &dyn StrengthClassifier), &features);
        assert_eq!(outcome, ClassifierOutcome::Applied { probability: 0.5 });
        assert_eq!(outcome.boost(), 10.0);
    }

    #[test]
    fn test_prediction_error_is_swallowed() {
        let clf = |_: &FeatureVector| -> Result<f64, ClassifierError> {
            Err(ClassifierError::Prediction("model missing".into()))
        };
        let features = FeatureVector::new(1, &profile(), 0.0);
        let outcome = run_classifier(Some(&clf as &dyn StrengthClassifier), &features);
        assert!(outcome.is_failed());
        assert_eq!(outcome.boost(), 0.0);
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        let clf = |_: &FeatureVector| -> Result<f64, ClassifierError> { Ok(1.5) };
        let features = FeatureVector::new(1, &profile(), 0.0);
        let outcome = run_classifier(Some(&clf as &dyn StrengthClassifier), &features);
        assert_eq!(outcome, ClassifierOutcome::Failed(ClassifierError::OutOfRange(1.5)));

        let nan = |_: &FeatureVector| -> Result<f64, ClassifierError> { Ok(f64::NAN) };
        assert!(run_classifier(Some(&nan as &dyn StrengthClassifier), &features).is_failed());
    }
}
