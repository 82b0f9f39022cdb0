//! Report types produced by a password analysis.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::classifier::ClassifierOutcome;

/// Ordered strength categories derived from the numeric score.
///
/// `None` is reserved for the empty password and never produced by
/// [`PasswordStrength::from_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PasswordStrength {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a clamped score to its band. Lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::VeryStrong,
            65..=79 => Self::Strong,
            50..=64 => Self::Moderate,
            25..=49 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    #[serde(rename = "has_uppercase")]
    pub has_upper: bool,
    #[serde(rename = "has_lowercase")]
    pub has_lower: bool,
    #[serde(rename = "has_digits")]
    pub has_digit: bool,
    pub has_special: bool,
    /// Number of classes present, 0 to 4.
    #[serde(skip)]
    pub diversity_count: u8,
}

/// One flag per structural detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeaknessFlags {
    pub is_common: bool,
    pub has_repeated: bool,
    pub has_sequential: bool,
    pub has_keyboard_pattern: bool,
    pub has_date_pattern: bool,
    #[serde(rename = "has_common_words")]
    pub has_common_word: bool,
}

impl WeaknessFlags {
    pub fn any(&self) -> bool {
        self.is_common
            || self.has_repeated
            || self.has_sequential
            || self.has_keyboard_pattern
            || self.has_date_pattern
            || self.has_common_word
    }
}

/// Machine-readable weakness codes, in feedback order.
///
/// These are also the only input the password improver looks at.
/// Serialized as their [`code`](WeaknessReason::code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaknessReason {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoDigit,
    NoSpecial,
    RepeatedChars,
    SequentialChars,
    KeyboardPattern,
    DatePattern,
    CommonWord,
    CommonPassword,
}

impl WeaknessReason {
    /// Stable snake_case identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::NoUppercase => "no_uppercase",
            Self::NoLowercase => "no_lowercase",
            Self::NoDigit => "no_digit",
            Self::NoSpecial => "no_special",
            Self::RepeatedChars => "repeated_chars",
            Self::SequentialChars => "sequential_chars",
            Self::KeyboardPattern => "keyboard_pattern",
            Self::DatePattern => "date_pattern",
            Self::CommonWord => "common_word",
            Self::CommonPassword => "common_password",
        }
    }

    /// Short description, suitable for summaries handed to downstream advisors.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TooShort => "Password is too short",
            Self::NoUppercase => "No uppercase letters",
            Self::NoLowercase => "No lowercase letters",
            Self::NoDigit => "No numbers",
            Self::NoSpecial => "No special characters",
            Self::RepeatedChars => "Contains repeated characters",
            Self::SequentialChars => "Contains sequential patterns",
            Self::KeyboardPattern => "Contains keyboard patterns",
            Self::DatePattern => "Contains date patterns",
            Self::CommonWord => "Contains common words",
            Self::CommonPassword => "Is a commonly used password",
        }
    }
}

impl Serialize for WeaknessReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for WeaknessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Analytic brute-force estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackTimeEstimate {
    #[serde(rename = "time_to_crack_seconds")]
    pub seconds: f64,
    #[serde(rename = "time_to_crack")]
    pub formatted: String,
}

impl CrackTimeEstimate {
    /// Builds an estimate whose text is derived from `seconds`.
    ///
    /// Negative and NaN inputs collapse to zero, infinities to `f64::MAX`.
    pub fn from_seconds(seconds: f64) -> Self {
        let seconds = if seconds.is_nan() {
            0.0
        } else {
            seconds.clamp(0.0, f64::MAX)
        };
        Self {
            seconds,
            formatted: crate::sections::format_duration(seconds),
        }
    }
}

/// Full result of analysing one password.
///
/// Serializes to a flat key/value map; nested profile, flag and crack-time
/// fields are flattened into the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub strength: PasswordStrength,
    #[serde(serialize_with = "serialize_one_decimal")]
    pub entropy: f64,
    pub length: usize,
    #[serde(flatten)]
    pub profile: CharacterProfile,
    #[serde(flatten)]
    pub flags: WeaknessFlags,
    #[serde(rename = "weakness_reasons")]
    pub reasons: Vec<WeaknessReason>,
    pub feedback: Vec<String>,
    #[serde(flatten)]
    pub crack_time: CrackTimeEstimate,
    #[serde(rename = "improved_suggestion")]
    pub improved: String,
    #[serde(rename = "password_masked")]
    pub masked: String,
    /// Kept out of the serialized form so internal error text never leaks.
    #[serde(skip)]
    pub classifier: ClassifierOutcome,
}

impl AnalysisReport {
    /// Minimal report for the empty password.
    pub fn empty() -> Self {
        Self {
            score: 0,
            strength: PasswordStrength::None,
            entropy: 0.0,
            length: 0,
            profile: CharacterProfile::default(),
            flags: WeaknessFlags::default(),
            reasons: Vec::new(),
            feedback: vec!["Password is empty".to_string()],
            crack_time: CrackTimeEstimate::from_seconds(0.0),
            improved: String::new(),
            masked: String::new(),
            classifier: ClassifierOutcome::NotConfigured,
        }
    }
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}

/// Masks every character of the password with `*`.
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}
