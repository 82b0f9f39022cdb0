//! Advisory helpers for a downstream text generator.
//!
//! The analyzer never calls anything here. A caller that wants free-text
//! advice builds a prompt from a finished [`AnalysisReport`] (the password
//! itself is never part of it), sends it to whatever service it uses, and
//! parses the reply back into sections.

use serde::Serialize;

use crate::types::AnalysisReport;

/// Reply split into the sections the prompt asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdviceSections {
    pub explanation: Vec<String>,
    pub vulnerabilities: Vec<String>,
    pub suggestions: Vec<String>,
    pub example: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Explanation,
    Vulnerabilities,
    Suggestions,
    Example,
}

const EXPLANATION_MARKERS: [&str; 3] = ["security risk", "risk", "explanation"];
const VULNERABILITY_MARKERS: [&str; 3] = ["why", "vulnerabilit", "weakness"];
const SUGGESTION_MARKERS: [&str; 4] = ["suggestion", "recommend", "improve", "tip"];
const EXAMPLE_MARKERS: [&str; 2] = ["example", "stronger password"];

const ITEM_PREFIXES: [&str; 8] = ["-", "•", "*", "1.", "2.", "3.", "4.", "5."];

/// Builds the advisory request from report data only.
pub fn build_prompt(report: &AnalysisReport) -> String {
    let reasons = report
        .reasons
        .iter()
        .map(|r| r.description())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I need detailed recommendations for improving a password with the following characteristics:\n\
         - Strength rating: {strength}\n\
         - Length: {length}\n\
         - Has uppercase: {upper}\n\
         - Has lowercase: {lower}\n\
         - Has digits: {digit}\n\
         - Has special characters: {special}\n\
         - Is common password: {common}\n\
         - Has repeated characters: {repeated}\n\
         - Has sequential patterns: {sequential}\n\
         - Has keyboard patterns: {keyboard}\n\
         - Has date patterns: {date}\n\
         - Contains common words: {word}\n\
         - Entropy score: {entropy:.1}\n\
         - Estimated time to crack: {crack}\n\
         \n\
         The main reasons this password is weak are: {reasons}\n\
         \n\
         Provide:\n\
         1. A detailed explanation of the security risks associated with this specific type of password\n\
         2. Exactly why this password is {strength_lower} (focus on specific vulnerabilities)\n\
         3. Actionable suggestions for creating a stronger password (3-5 specific tips)\n\
         4. An example of a stronger password that follows a similar pattern but addresses the weaknesses\n\
         \n\
         Important: Do not include speculative information about the actual password - only use the analysis data provided above.\n\
         Format your response in a concise, user-friendly way with clearly separated sections.\n",
        strength = report.strength,
        length = report.length,
        upper = report.profile.has_upper,
        lower = report.profile.has_lower,
        digit = report.profile.has_digit,
        special = report.profile.has_special,
        common = report.flags.is_common,
        repeated = report.flags.has_repeated,
        sequential = report.flags.has_sequential,
        keyboard = report.flags.has_keyboard_pattern,
        date = report.flags.has_date_pattern,
        word = report.flags.has_common_word,
        entropy = report.entropy,
        crack = report.crack_time.formatted,
        reasons = reasons,
        strength_lower = report.strength.label().to_lowercase(),
    )
}

fn contains_any(lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lower.contains(m))
}

fn header_section(lower: &str) -> Option<Section> {
    if contains_any(lower, &EXPLANATION_MARKERS) {
        Some(Section::Explanation)
    } else if contains_any(lower, &VULNERABILITY_MARKERS) {
        Some(Section::Vulnerabilities)
    } else if contains_any(lower, &SUGGESTION_MARKERS) {
        Some(Section::Suggestions)
    } else if contains_any(lower, &EXAMPLE_MARKERS) {
        Some(Section::Example)
    } else {
        None
    }
}

/// Splits a free-text reply into sections.
///
/// Lines that mention a section keyword (and are not bullets) switch the
/// current section. Bullet and numbered lines are collected into it; in the
/// example section any line is taken as the example, keeping the text after
/// the first `:` when there is one.
pub fn parse_advice(text: &str) -> AdviceSections {
    let mut sections = AdviceSections::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with('-') {
            if let Some(section) = header_section(&line.to_lowercase()) {
                current = Some(section);
                if section == Section::Example {
                    if let Some((_, tail)) = line.split_once(':') {
                        let tail = tail.trim();
                        if !tail.is_empty() {
                            sections.example = Some(tail.to_string());
                        }
                    }
                }
                continue;
            }
        }

        match current {
            Some(Section::Example) => {
                let example = match line.split_once(':') {
                    Some((_, tail)) => tail.trim(),
                    None => line,
                };
                sections.example = Some(example.to_string());
            }
            Some(section) if ITEM_PREFIXES.iter().any(|p| line.starts_with(p)) => {
                let item = line
                    .trim_start_matches(|c: char| "-•* 123456789.".contains(c))
                    .trim();
                if item.is_empty() {
                    continue;
                }
                let bucket = match section {
                    Section::Explanation => &mut sections.explanation,
                    Section::Vulnerabilities => &mut sections.vulnerabilities,
                    Section::Suggestions => &mut sections.suggestions,
                    Section::Example => continue,
                };
                bucket.push(item.to_string());
            }
            _ => {}
        }
    }

    sections
}
