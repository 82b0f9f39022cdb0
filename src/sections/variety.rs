//! Character variety section - detects uppercase, lowercase, digits, special chars.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::CharacterProfile;

// Unicode decimal digits (general category Nd)
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is a valid regex"));

/// Classifies the character composition of a password.
///
/// Letters are matched on the ASCII ranges, digits on any Unicode decimal
/// digit. Everything outside `[A-Za-z0-9]` counts as special, so a
/// non-ASCII digit sets both the digit and the special class.
pub fn character_profile(password: &str) -> CharacterProfile {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = DIGIT.is_match(password);
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let diversity_count = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count() as u8;

    CharacterProfile {
        has_upper,
        has_lower,
        has_digit,
        has_special,
        diversity_count,
    }
}
