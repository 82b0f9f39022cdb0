//! Feedback section - maps detected weaknesses to messages and reason codes.

use crate::types::{CharacterProfile, WeaknessFlags, WeaknessReason};

const MIN_LENGTH: usize = 8;

pub const LOOKS_GOOD: &str = "Password looks good!";

/// Ordered feedback lines with their matching reason codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub messages: Vec<String>,
    pub reasons: Vec<WeaknessReason>,
}

/// User-facing message for a weakness.
pub fn reason_message(reason: WeaknessReason) -> String {
    match reason {
        WeaknessReason::TooShort => format!(
            "Password is too short (minimum {} characters recommended)",
            MIN_LENGTH
        ),
        WeaknessReason::NoUppercase => "Add uppercase letters (A-Z)".to_string(),
        WeaknessReason::NoLowercase => "Add lowercase letters (a-z)".to_string(),
        WeaknessReason::NoDigit => "Add numbers (0-9)".to_string(),
        WeaknessReason::NoSpecial => "Add special characters (!@#$%^&*)".to_string(),
        WeaknessReason::RepeatedChars => {
            "Avoid repeated characters (e.g., 'aaa', '111')".to_string()
        }
        WeaknessReason::SequentialChars => {
            "Avoid sequential patterns (e.g., 'abc', '123')".to_string()
        }
        WeaknessReason::KeyboardPattern => {
            "Avoid keyboard patterns (e.g., 'qwerty', 'asdfgh')".to_string()
        }
        WeaknessReason::DatePattern => "Avoid using dates, which are easily guessable".to_string(),
        WeaknessReason::CommonWord => "Avoid using common words or names".to_string(),
        WeaknessReason::CommonPassword => {
            "This is a commonly used password that's likely in hackers' dictionaries".to_string()
        }
    }
}

/// Evaluates every condition in its fixed order.
///
/// With no weakness the result is the single "looks good" line and no
/// reasons.
pub fn feedback_section(
    length: usize,
    profile: &CharacterProfile,
    flags: &WeaknessFlags,
) -> Feedback {
    let checks = [
        (length < MIN_LENGTH, WeaknessReason::TooShort),
        (!profile.has_upper, WeaknessReason::NoUppercase),
        (!profile.has_lower, WeaknessReason::NoLowercase),
        (!profile.has_digit, WeaknessReason::NoDigit),
        (!profile.has_special, WeaknessReason::NoSpecial),
        (flags.has_repeated, WeaknessReason::RepeatedChars),
        (flags.has_sequential, WeaknessReason::SequentialChars),
        (flags.has_keyboard_pattern, WeaknessReason::KeyboardPattern),
        (flags.has_date_pattern, WeaknessReason::DatePattern),
        (flags.has_common_word, WeaknessReason::CommonWord),
        (flags.is_common, WeaknessReason::CommonPassword),
    ];

    let reasons: Vec<WeaknessReason> = checks
        .into_iter()
        .filter_map(|(triggered, reason)| triggered.then_some(reason))
        .collect();

    if reasons.is_empty() {
        return Feedback {
            messages: vec![LOOKS_GOOD.to_string()],
            reasons,
        };
    }

    Feedback {
        messages: reasons.iter().map(|&r| reason_message(r)).collect(),
        reasons,
    }
}
