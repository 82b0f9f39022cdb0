//! Improver section - rewrites a password into a stronger suggestion.
//!
//! The rewrite is driven only by the reason codes, so the same password and
//! reasons always give the same suggestion.

use crate::types::WeaknessReason;

const TARGET_LENGTH: usize = 12;
const LENGTH_FILLER: &str = "Str0ng!";
const COMPLEXITY_SUFFIX: &str = "K!9z";
const FALLBACK_SUFFIX: &str = "#2Fx!";

const RISKY_CHUNKS: [&str; 5] = ["123", "abc", "qwe", "asd", "zxc"];
const CHUNK_REPLACEMENT: &str = "q8Z";

fn leet(c: char) -> char {
    match c {
        'a' => '4',
        'e' => '3',
        'i' => '1',
        'o' => '0',
        's' => '5',
        't' => '7',
        other => other,
    }
}

fn leet_speak(password: &str) -> String {
    password.chars().map(leet).collect()
}

/// Rewrites the first char matching `pick` with `convert`.
fn convert_first<P, C, I>(password: &str, pick: P, convert: C) -> String
where
    P: Fn(char) -> bool,
    C: Fn(char) -> I,
    I: Iterator<Item = char>,
{
    let mut out = String::with_capacity(password.len());
    let mut done = false;
    for c in password.chars() {
        if !done && pick(c) {
            out.extend(convert(c));
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Builds an improved suggestion. For non-empty input the result always
/// differs from `original`.
pub fn improver_section(original: &str, reasons: &[WeaknessReason]) -> String {
    let has = |r: WeaknessReason| reasons.contains(&r);
    let mut improved = original.to_string();

    let length = improved.chars().count();
    if has(WeaknessReason::TooShort) && length < TARGET_LENGTH {
        improved.extend(LENGTH_FILLER.chars().take(TARGET_LENGTH - length));
    }

    if has(WeaknessReason::NoUppercase) {
        improved = convert_first(&improved, char::is_lowercase, char::to_uppercase);
    }

    if has(WeaknessReason::NoLowercase) {
        improved = convert_first(&improved, char::is_uppercase, char::to_lowercase);
    }

    if has(WeaknessReason::NoDigit) {
        improved.push('9');
    }

    if has(WeaknessReason::NoSpecial) {
        improved.push('!');
    }

    if has(WeaknessReason::SequentialChars) || has(WeaknessReason::KeyboardPattern) {
        for chunk in RISKY_CHUNKS {
            improved = improved.replace(chunk, CHUNK_REPLACEMENT);
        }
    }

    if has(WeaknessReason::CommonPassword) || has(WeaknessReason::CommonWord) {
        improved = leet_speak(&improved);
        if improved.chars().count() < TARGET_LENGTH {
            improved.push_str(COMPLEXITY_SUFFIX);
        }
    }

    if improved == original {
        improved = leet_speak(&improved);
        if improved == original {
            improved.push_str(FALLBACK_SUFFIX);
        }
    }

    improved
}
