//! Pattern analysis section - detects repetition, sequences, keyboard walks,
//! dates and common words.
//!
//! Every detector is a pure function of the password. They overlap on
//! purpose: "qwe" is both a sequential and a keyboard pattern and is
//! penalized twice by the score.

use regex::Regex;
use std::sync::LazyLock;

use crate::corpus::CommonPasswords;
use crate::types::WeaknessFlags;

const REFERENCE_SEQUENCES: [&str; 5] = [
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "0123456789",
];

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const KEYBOARD_WALKS: [&str; 11] = [
    "qwerty", "qwertz", "azerty", "asdfgh", "zxcvbn", "qweasdzxc", "1qaz2wsx", "qazwsx",
    "zxcvbnm", "poiuyt", "lkjhgf",
];

const COMMON_WORDS: [&str; 20] = [
    "password", "admin", "user", "login", "welcome", "secret", "qwerty", "letmein", "monkey",
    "dragon", "baseball", "football", "superman", "batman", "trustno", "summer", "winter",
    "spring", "autumn", "apple",
];

// dd/mm/yyyy-like, a bare 4-8 digit run, or a 19xx/20xx year; `\d` is any
// Unicode decimal digit
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{2}[/\-_.]\d{2}[/\-_.]\d{2,4}|\d{4,8}|19\d{2}|20\d{2}")
        .expect("date pattern is a valid regex")
});

/// Runs every detector and collects the flags.
pub fn pattern_analysis_section(
    password: &str,
    common: Option<&CommonPasswords>,
) -> WeaknessFlags {
    WeaknessFlags {
        is_common: common.is_some_and(|c| c.contains(password)),
        has_repeated: has_repeated_chars(password),
        has_sequential: has_sequential_pattern(password),
        has_keyboard_pattern: has_keyboard_pattern(password),
        has_date_pattern: has_date_pattern(password),
        has_common_word: has_common_word(password),
    }
}

/// True if any character (newlines excepted) appears 3+ times in a row.
pub fn has_repeated_chars(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] && chars[i] != '\n' {
            repeated_count += 1;
            if repeated_count >= 3 {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

/// True if the case-folded password contains a 3-char window of the
/// alphabet, the digits or one of the keyboard rows (forward only).
pub fn has_sequential_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    REFERENCE_SEQUENCES.iter().any(|seq| {
        (0..seq.len().saturating_sub(2)).any(|i| lower.contains(&seq[i..i + 3]))
    })
}

/// True if the password contains a known keyboard walk, or a 3-char
/// window of it lies on a single keyboard row.
pub fn has_keyboard_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    if KEYBOARD_WALKS.iter().any(|walk| lower.contains(walk)) {
        return true;
    }

    let chars: Vec<char> = lower.chars().collect();
    chars.windows(3).any(|w| {
        let segment: String = w.iter().collect();
        KEYBOARD_ROWS.iter().any(|row| row.contains(segment.as_str()))
    })
}

/// True for delimited dates, 4-8 digit runs and 1900-2099 years.
pub fn has_date_pattern(password: &str) -> bool {
    DATE_PATTERN.is_match(password)
}

pub fn has_common_word(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_WORDS.iter().any(|word| lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_repeated_chars() {
        assert!(has_repeated_chars("aaaaBBBB1111"));
        assert!(has_repeated_chars("xx111"));
        assert!(!has_repeated_chars("aabbcc"));
        assert!(!has_repeated_chars("ab"));
        assert!(!has_repeated_chars(""));
    }

    #[test]
    fn test_pattern_repeated_ignores_newlines() {
        assert!(!has_repeated_chars("a\n\n\nb"));
        assert!(has_repeated_chars("ééé"));
    }

    #[test]
    fn test_pattern_sequential_letters_and_digits() {
        assert!(has_sequential_pattern("xAbC9"));
        assert!(has_sequential_pattern("pass789"));
        assert!(has_sequential_pattern("Tr0ub4dor&3xyz!"));
        assert!(!has_sequential_pattern("cba"));
        assert!(!has_sequential_pattern("111"));
    }

    #[test]
    fn test_pattern_sequential_keyboard_rows() {
        assert!(has_sequential_pattern("myQWEpass"));
        assert!(has_sequential_pattern("hjk"));
    }

    #[test]
    fn test_pattern_keyboard_walks() {
        assert!(has_keyboard_pattern("1QAZ2wsx"));
        assert!(has_keyboard_pattern("my-poiuyt"));
        assert!(has_keyboard_pattern("azerty"));
    }

    #[test]
    fn test_pattern_keyboard_row_window() {
        assert!(has_keyboard_pattern("xxRTYxx"));
        assert!(has_keyboard_pattern("vbn"));
        assert!(!has_keyboard_pattern("qaz"));
        assert!(!has_keyboard_pattern("password"));
    }

    #[test]
    fn test_pattern_dates() {
        assert!(has_date_pattern("born12/05/88"));
        assert!(has_date_pattern("x01-02-2003y"));
        assert!(has_date_pattern("1987"));
        assert!(has_date_pattern("abc20301"));
        assert!(!has_date_pattern("abc123"));
        assert!(!has_date_pattern("12/5/88"));
    }

    #[test]
    fn test_pattern_dates_unicode_digits() {
        assert!(has_date_pattern("١٢٣٤"));
        assert!(has_date_pattern("x١٢/٠٥/٨٨"));
        assert!(!has_date_pattern("١٢٣"));
    }

    #[test]
    fn test_pattern_common_words() {
        assert!(has_common_word("MyDragon!"));
        assert!(has_common_word("TRUSTNO1"));
        assert!(!has_common_word("Zebra#42Q"));
    }

    #[test]
    fn test_pattern_is_common_needs_corpus() {
        let corpus: CommonPasswords = ["hunter2"].into_iter().collect();
        assert!(pattern_analysis_section("Hunter2", Some(&corpus)).is_common);
        assert!(!pattern_analysis_section("Hunter2", None).is_common);
    }

    #[test]
    fn test_pattern_detectors_are_independent() {
        let flags = pattern_analysis_section("qwerty1990", None);
        assert!(flags.has_sequential);
        assert!(flags.has_keyboard_pattern);
        assert!(flags.has_date_pattern);
        assert!(flags.has_common_word);
        assert!(!flags.has_repeated);
        assert!(!flags.is_common);
    }

    #[test]
    fn test_pattern_detectors_are_pure() {
        let first = pattern_analysis_section("Summer2024!!!", None);
        let second = pattern_analysis_section("Summer2024!!!", None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pattern_clean_password() {
        let flags = pattern_analysis_section("Zebra#42Q", None);
        assert!(!flags.any());
    }
}
