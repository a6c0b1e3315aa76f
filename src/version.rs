//! Version-label ranking for upstream release-track directories.
//!
//! Labels look like "7.1", "7.2-preview", "4.1-preview.1". Stable labels
//! outrank every prerelease label; within a group, numeric token sequences
//! decide; ties fall back to reverse lexical order so the result is fully
//! deterministic for any input, duplicates included.

use std::cmp::Ordering;

/// Substrings (case-insensitive) that mark a label as a prerelease track.
const PRERELEASE_MARKERS: &[&str] = &["preview", "beta", "rc", "alpha"];

/// Whether a label names a prerelease track.
pub fn is_prerelease(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    PRERELEASE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Numeric tokens of a label: split on runs of non-digits, parse each run.
/// "4.1-preview.2" -> [4, 1, 2]. Digit runs too long for u64 saturate.
fn numeric_tokens(label: &str) -> Vec<u64> {
    label
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().unwrap_or(u64::MAX))
        .collect()
}

fn cmp_descending(a: &str, b: &str) -> Ordering {
    match (is_prerelease(a), is_prerelease(b)) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => {
            let tokens_a = numeric_tokens(a);
            let tokens_b = numeric_tokens(b);
            // Missing trailing tokens compare as zero, so "7" == "7.0".
            for i in 0..tokens_a.len().max(tokens_b.len()) {
                let x = tokens_a.get(i).copied().unwrap_or(0);
                let y = tokens_b.get(i).copied().unwrap_or(0);
                match y.cmp(&x) {
                    Ordering::Equal => continue,
                    decided => return decided,
                }
            }
            b.cmp(a)
        }
    }
}

/// Order labels from most to least recent: stable tracks first, then numeric
/// descending within each group. Total order, empty in yields empty out.
pub fn rank_descending(labels: &[String]) -> Vec<String> {
    let mut ranked = labels.to_vec();
    ranked.sort_by(|a, b| cmp_descending(a, b));
    ranked
}

/// The most recent label, preferring stable tracks. None for empty input.
pub fn latest(labels: &[String]) -> Option<String> {
    rank_descending(labels).into_iter().next()
}
