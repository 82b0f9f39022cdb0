//! Score section - turns profile, patterns and entropy into a 0-100 score.

use crate::types::{CharacterProfile, PasswordStrength, WeaknessFlags};

const MAX_LENGTH_POINTS: f64 = 40.0;
const MAX_ENTROPY_POINTS: f64 = 30.0;

const COMMON_PASSWORD_PENALTY: f64 = 40.0;
const REPEATED_PENALTY: f64 = 15.0;
const SEQUENTIAL_PENALTY: f64 = 15.0;
const KEYBOARD_PENALTY: f64 = 10.0;
const DATE_PENALTY: f64 = 10.0;
const COMMON_WORD_PENALTY: f64 = 20.0;

/// Unclamped sum of bonuses and penalties, before the ML boost.
pub fn base_score(
    length: usize,
    profile: &CharacterProfile,
    entropy: f64,
    flags: &WeaknessFlags,
) -> f64 {
    let mut score = (length as f64 * 4.0).min(MAX_LENGTH_POINTS);

    if profile.has_upper {
        score += 10.0;
    }
    if profile.has_lower {
        score += 10.0;
    }
    if profile.has_digit {
        score += 10.0;
    }
    if profile.has_special {
        score += 15.0;
    }
    score += (entropy * 2.0).min(MAX_ENTROPY_POINTS);

    // Penalties stack; overlapping detectors are charged separately.
    let penalties = [
        (flags.is_common, COMMON_PASSWORD_PENALTY),
        (flags.has_repeated, REPEATED_PENALTY),
        (flags.has_sequential, SEQUENTIAL_PENALTY),
        (flags.has_keyboard_pattern, KEYBOARD_PENALTY),
        (flags.has_date_pattern, DATE_PENALTY),
        (flags.has_common_word, COMMON_WORD_PENALTY),
    ];
    for (triggered, penalty) in penalties {
        if triggered {
            score -= penalty;
        }
    }

    score
}

/// Adds the boost, clamps to `[0, 100]` and rounds half to even.
pub fn final_score(base: f64, boost: f64) -> u8 {
    let score = (base + boost).clamp(0.0, 100.0);
    score.round_ties_even() as u8
}

/// Score and its strength band. The band is read from the rounded score so
/// the two always agree.
pub fn score_section(
    length: usize,
    profile: &CharacterProfile,
    entropy: f64,
    flags: &WeaknessFlags,
    boost: f64,
) -> (u8, PasswordStrength) {
    let score = final_score(base_score(length, profile, entropy, flags), boost);
    (score, PasswordStrength::from_score(score))
}
