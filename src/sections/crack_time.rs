//! Crack-time section - analytic brute-force estimate and its wording.

use crate::types::{CharacterProfile, CrackTimeEstimate, WeaknessFlags};

/// Guesses per second assumed for an offline attacker.
pub const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SPECIAL_POOL: u32 = 33;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;
const DECADE: f64 = 315_360_000.0;
const CENTURY: f64 = 3_153_600_000.0;
const MILLENNIUM: f64 = 31_536_000_000.0;

/// Size of the alphabet an attacker must cover. Falls back to 26 when no
/// class is present.
pub fn charset_size(profile: &CharacterProfile) -> u32 {
    let pools = [
        (profile.has_lower, LOWERCASE_POOL),
        (profile.has_upper, UPPERCASE_POOL),
        (profile.has_digit, DIGIT_POOL),
        (profile.has_special, SPECIAL_POOL),
    ];
    let size: u32 = pools
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, pool)| pool)
        .sum();
    if size == 0 { LOWERCASE_POOL } else { size }
}

/// Average-case brute force time, then pattern and length discounts.
///
/// Discounts apply in a fixed order: common password cap, sequence or
/// keyboard walk, date, short length.
pub fn crack_time_section(
    length: usize,
    profile: &CharacterProfile,
    flags: &WeaknessFlags,
) -> CrackTimeEstimate {
    let combinations = f64::from(charset_size(profile)).powf(length as f64);
    let mut seconds = (combinations / (2.0 * GUESSES_PER_SECOND)).min(f64::MAX);

    if flags.is_common {
        seconds = seconds.min(0.1);
    }
    if flags.has_sequential || flags.has_keyboard_pattern {
        seconds /= 1000.0;
    }
    if flags.has_date_pattern {
        seconds /= 500.0;
    }
    if length < 8 {
        seconds /= 100.0;
    }

    CrackTimeEstimate::from_seconds(seconds)
}

/// Human-readable bucket for a duration in seconds.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.001 {
        return "Instantly".to_string();
    }
    if seconds < 1.0 {
        return "Less than a second".to_string();
    }

    let buckets = [
        (MINUTE, 1.0, "seconds"),
        (HOUR, MINUTE, "minutes"),
        (DAY, HOUR, "hours"),
        (MONTH, DAY, "days"),
        (YEAR, MONTH, "months"),
        (DECADE, YEAR, "years"),
        (CENTURY, DECADE, "decades"),
        (MILLENNIUM, CENTURY, "centuries"),
    ];
    for (limit, unit, name) in buckets {
        if seconds < limit {
            return format!("{:.1} {}", seconds / unit, name);
        }
    }

    "Millions of years".to_string()
}
