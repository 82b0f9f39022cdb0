//! Entropy section.

use std::collections::BTreeMap;

/// Shannon entropy of the character distribution, rescaled by `length / 3`.
///
/// This is a scoring heuristic, not textbook entropy: longer passwords with
/// a flat distribution grow linearly. Empty input yields 0.
///
/// Terms are summed in char order so the result is bit-for-bit stable.
pub fn entropy_section(password: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let length: usize = counts.values().sum();
    if length == 0 {
        return 0.0;
    }

    let len = length as f64;
    let shannon = counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum::<f64>();

    shannon * len / 3.0
}
