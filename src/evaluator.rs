//! Password analyzer - chains the sections into one report.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::classifier::{run_classifier, FeatureVector, StrengthClassifier};
use crate::corpus::CommonPasswords;
use crate::sections::{
    character_profile, crack_time_section, entropy_section, feedback_section, format_duration,
    improver_section, pattern_analysis_section, score_section, Feedback,
};
use crate::types::{mask_password, AnalysisReport};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Minimum crack time must be a finite, non-negative number of seconds, got {0:?}")]
    InvalidMinCrackTime(String),
}

/// Checks a caller-supplied minimum crack time.
fn validate_min_crack_seconds(seconds: f64) -> Result<f64, AnalysisError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(AnalysisError::InvalidMinCrackTime(seconds.to_string()))
    }
}

/// Parses a minimum crack time received as text, e.g. from a form field.
///
/// # Errors
///
/// Returns `InvalidMinCrackTime` for non-numeric, negative or non-finite input.
pub fn parse_min_crack_seconds(raw: &str) -> Result<f64, AnalysisError> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AnalysisError::InvalidMinCrackTime(raw.to_string()))?;
    validate_min_crack_seconds(seconds)
}

/// Analyzer bound to its shared, read-only collaborators.
///
/// Cheap to copy; safe to share between threads.
#[derive(Clone, Copy, Default)]
pub struct Analyzer<'a> {
    common: Option<&'a CommonPasswords>,
    classifier: Option<&'a dyn StrengthClassifier>,
}

impl<'a> Analyzer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `common` for the common-password check. Without it the check
    /// never fires.
    pub fn with_common_passwords(mut self, common: &'a CommonPasswords) -> Self {
        self.common = Some(common);
        self
    }

    /// Adds the ML score boost.
    pub fn with_classifier(mut self, classifier: &'a dyn StrengthClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Analyzes a password.
    ///
    /// # Arguments
    /// * `password` - The password to analyze
    /// * `min_crack_seconds` - Optional required crack time; a shortfall adds
    ///   one advisory feedback line and leaves the score alone
    ///
    /// # Errors
    ///
    /// Only an invalid `min_crack_seconds` is rejected. Every password,
    /// empty or not, yields a report.
    pub fn analyze(
        &self,
        password: &SecretString,
        min_crack_seconds: Option<f64>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let min_crack_seconds = min_crack_seconds
            .map(validate_min_crack_seconds)
            .transpose()?;

        let pwd = password.expose_secret();
        let length = pwd.chars().count();

        #[cfg(feature = "tracing")]
        tracing::debug!("Analyzing password length: {}", length);

        if length == 0 {
            return Ok(AnalysisReport::empty());
        }

        let profile = character_profile(pwd);
        let flags = pattern_analysis_section(pwd, self.common);
        let entropy = entropy_section(pwd);

        let features = FeatureVector::new(length, &profile, entropy);
        let classifier = run_classifier(self.classifier, &features);

        let (score, strength) =
            score_section(length, &profile, entropy, &flags, classifier.boost());
        let crack_time = crack_time_section(length, &profile, &flags);

        let Feedback {
            mut messages,
            reasons,
        } = feedback_section(length, &profile, &flags);
        let improved = improver_section(pwd, &reasons);

        if let Some(required) = min_crack_seconds {
            if crack_time.seconds < required {
                messages.push(format!(
                    "Password doesn't meet the required strength (needs to take longer than {} to crack)",
                    format_duration(required)
                ));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Analysis complete: score={} strength={}", score, strength);

        Ok(AnalysisReport {
            score,
            strength,
            entropy,
            length,
            profile,
            flags,
            reasons,
            feedback: messages,
            crack_time,
            improved,
            masked: mask_password(pwd),
            classifier,
        })
    }
}

/// Analyzes a password with no common-password corpus and no classifier.
pub fn analyze_password_strength(
    password: &SecretString,
    min_crack_seconds: Option<f64>,
) -> Result<AnalysisReport, AnalysisError> {
    Analyzer::new().analyze(password, min_crack_seconds)
}

/// Async version that sends the analysis result via channel.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    analyzer: &Analyzer<'_>,
    password: &SecretString,
    min_crack_seconds: Option<f64>,
    tx: mpsc::Sender<Result<AnalysisReport, AnalysisError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let result = analyzer.analyze(password, min_crack_seconds);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassifierError, ClassifierOutcome};
    use crate::types::{PasswordStrength, WeaknessReason};

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn corpus() -> CommonPasswords {
        ["password", "123456", "qwerty", "admin"].into_iter().collect()
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze_password_strength(&secret(""), None).unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, PasswordStrength::None);
        assert_eq!(report.feedback, vec!["Password is empty".to_string()]);
        assert_eq!(report.classifier, ClassifierOutcome::NotConfigured);
    }

    #[test]
    fn test_analyze_common_password() {
        let common = corpus();
        let analyzer = Analyzer::new().with_common_passwords(&common);
        let report = analyzer.analyze(&secret("password"), None).unwrap();

        assert!(report.flags.is_common);
        assert!(report.flags.has_common_word);
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, PasswordStrength::VeryWeak);
        assert!(report
            .feedback
            .iter()
            .any(|f| f.starts_with("This is a commonly used password")));
        assert_eq!(report.crack_time.seconds, 0.1);
        assert_eq!(report.crack_time.formatted, "Less than a second");
        assert_eq!(report.improved, "P455w0rd9!K!9z");
        assert_eq!(report.masked, "********");
    }

    #[test]
    fn test_analyze_common_password_without_corpus() {
        let report = analyze_password_strength(&secret("password"), None).unwrap();
        assert!(!report.flags.is_common);
        assert!(report.flags.has_common_word);
        // 32 + 10 + 14.67 - 20
        assert_eq!(report.score, 37);
        assert_eq!(report.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_analyze_strong_password() {
        let report = analyze_password_strength(&secret("Tr0ub4dor&3xyz!"), None).unwrap();

        assert_eq!(report.length, 15);
        assert_eq!(report.profile.diversity_count, 4);
        assert!(!report.flags.is_common);
        assert!(!report.flags.has_common_word);
        assert!(!report.flags.has_repeated);
        assert!(!report.flags.has_keyboard_pattern);
        assert!(!report.flags.has_date_pattern);
        // "xyz" is an alphabet run
        assert!(report.flags.has_sequential);
        assert_eq!(report.reasons, vec![WeaknessReason::SequentialChars]);
        assert!(report.strength >= PasswordStrength::Strong);
        assert_eq!(report.score, 100);
        assert_eq!(report.crack_time.formatted, "Millions of years");
        assert_eq!(report.improved, "Tr0ub4d0r&3xyz!");
    }

    #[test]
    fn test_analyze_repeated_and_short() {
        let report = analyze_password_strength(&secret("aaa111"), None).unwrap();

        assert!(report.flags.has_repeated);
        assert!(!report.flags.has_sequential);
        // 24 + 20 + 4 - 15
        assert_eq!(report.score, 33);
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert_eq!(
            report.reasons,
            vec![
                WeaknessReason::TooShort,
                WeaknessReason::NoUppercase,
                WeaknessReason::NoSpecial,
                WeaknessReason::RepeatedChars,
            ]
        );
        assert_eq!(report.improved, "Aaa111Str0ng!");
    }

    #[test]
    fn test_analyze_looks_good() {
        let report = analyze_password_strength(&secret("Zebra#42Q"), None).unwrap();
        assert_eq!(report.feedback, vec!["Password looks good!".to_string()]);
        assert!(report.reasons.is_empty());
        assert_ne!(report.improved, "Zebra#42Q");
    }

    #[test]
    fn test_analyze_min_crack_time_shortfall() {
        let pwd = secret("aaa111");
        let plain = analyze_password_strength(&pwd, None).unwrap();
        let required = analyze_password_strength(&pwd, Some(3600.0)).unwrap();

        assert_eq!(required.feedback.len(), plain.feedback.len() + 1);
        assert_eq!(
            required.feedback.last().unwrap(),
            "Password doesn't meet the required strength (needs to take longer than 1.0 hours to crack)"
        );
        assert_eq!(required.score, plain.score);
        assert_eq!(required.strength, plain.strength);
    }

    #[test]
    fn test_analyze_min_crack_time_met() {
        let pwd = secret("Tr0ub4dor&3xyz!");
        let plain = analyze_password_strength(&pwd, None).unwrap();
        let required = analyze_password_strength(&pwd, Some(3600.0)).unwrap();
        assert_eq!(required.feedback, plain.feedback);
    }

    #[test]
    fn test_analyze_invalid_min_crack_time() {
        for bad in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = analyze_password_strength(&secret("whatever"), Some(bad));
            assert!(matches!(result, Err(AnalysisError::InvalidMinCrackTime(_))));
        }
        // rejected before the empty-password branch
        assert!(analyze_password_strength(&secret(""), Some(-1.0)).is_err());
        assert!(analyze_password_strength(&secret("x"), Some(0.0)).is_ok());
    }

    #[test]
    fn test_parse_min_crack_seconds() {
        assert_eq!(parse_min_crack_seconds(" 3600 "), Ok(3600.0));
        assert_eq!(parse_min_crack_seconds("0.5"), Ok(0.5));
        for bad in ["", "abc", "-5", "inf", "NaN", "1e400"] {
            assert!(parse_min_crack_seconds(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_analyze_classifier_boost() {
        let clf = |_: &FeatureVector| -> Result<f64, ClassifierError> { Ok(1.0) };
        let analyzer = Analyzer::new().with_classifier(&clf);
        let report = analyzer.analyze(&secret("password"), None).unwrap();
        // 36.67 + 20
        assert_eq!(report.score, 57);
        assert_eq!(report.strength, PasswordStrength::Moderate);
        assert_eq!(report.classifier, ClassifierOutcome::Applied { probability: 1.0 });
    }

    #[test]
    fn test_analyze_classifier_receives_features() {
        let clf = |f: &FeatureVector| -> Result<f64, ClassifierError> {
            assert_eq!(f.as_slice()[0], 6.0);
            assert_eq!(f.as_slice()[6], 2.0);
            Ok(0.0)
        };
        let analyzer = Analyzer::new().with_classifier(&clf);
        analyzer.analyze(&secret("aaa111"), None).unwrap();
    }

    #[test]
    fn test_analyze_classifier_failure_degrades() {
        let clf = |_: &FeatureVector| -> Result<f64, ClassifierError> {
            Err(ClassifierError::Prediction("corrupt model".into()))
        };
        let analyzer = Analyzer::new().with_classifier(&clf);
        let report = analyzer.analyze(&secret("password"), None).unwrap();
        let baseline = analyze_password_strength(&secret("password"), None).unwrap();

        assert!(report.classifier.is_failed());
        assert_eq!(report.score, baseline.score);
        assert_eq!(report.feedback, baseline.feedback);
    }

    #[test]
    fn test_analyze_score_boundaries() {
        let common = corpus();
        let analyzer = Analyzer::new().with_common_passwords(&common);
        let passwords = [
            "a",
            "password",
            "aaa111",
            "MyPass123!",
            "qwerty1990",
            "VeryStrongPassword123!@#",
            "日本語パスワード",
            "\u{0}\u{7f}\n\t",
            "𝔘𝔫𝔦𝔠𝔬𝔡𝔢🔑🔑🔑",
        ];
        for pwd in passwords {
            let report = analyzer.analyze(&secret(pwd), None).unwrap();
            assert!(report.score <= 100, "score out of bounds for {pwd:?}");
            assert_eq!(report.strength, PasswordStrength::from_score(report.score));
            assert_eq!(report.masked.chars().count(), pwd.chars().count());
            assert_ne!(report.improved, pwd);
            assert!(report.crack_time.seconds >= 0.0);
        }
    }

    #[test]
    fn test_analyze_adding_classes_never_lowers_score() {
        let cases = [
            ("blue", "blueK7#"),
            ("river", "riverK7#"),
            ("HOUSE", "HOUSEm7#"),
            ("moon", "moonK7#"),
        ];
        for (weak, stronger) in cases {
            let before = analyze_password_strength(&secret(weak), None).unwrap();
            let after = analyze_password_strength(&secret(stronger), None).unwrap();
            assert!(after.score >= before.score, "{weak} -> {stronger}");
        }
    }

    #[test]
    fn test_report_serializes_flat() {
        let common = corpus();
        let analyzer = Analyzer::new().with_common_passwords(&common);
        let report = analyzer.analyze(&secret("password"), None).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["score"], 0);
        assert_eq!(json["strength"], "Very Weak");
        assert_eq!(json["is_common"], true);
        assert_eq!(json["has_lowercase"], true);
        assert_eq!(json["has_uppercase"], false);
        assert_eq!(json["has_digits"], false);
        assert_eq!(json["has_common_words"], true);
        assert_eq!(json["entropy"], 7.3);
        assert_eq!(json["time_to_crack"], "Less than a second");
        assert_eq!(json["password_masked"], "********");
        assert_eq!(json["weakness_reasons"][0], "no_uppercase");

        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        let mut expected = vec![
            "score",
            "strength",
            "entropy",
            "length",
            "has_uppercase",
            "has_lowercase",
            "has_digits",
            "has_special",
            "is_common",
            "has_repeated",
            "has_sequential",
            "has_keyboard_pattern",
            "has_date_pattern",
            "has_common_words",
            "feedback",
            "weakness_reasons",
            "improved_suggestion",
            "time_to_crack",
            "time_to_crack_seconds",
            "password_masked",
        ];
        expected.sort_unstable();
        assert_eq!(keys, expected);
        // the in-memory value keeps full precision
        assert!((report.entropy - 22.0 / 3.0).abs() < 1e-9);
    }
}
