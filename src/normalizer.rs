//! Input normalization.
//!
//! Normalization runs before intent detection and slot extraction:
//! lowercase, trim, collapse whitespace runs, then strip noise phrases.
//! Noise removal happens after case normalization so the phrases match
//! case-insensitively by construction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Courtesy and filler phrases that never carry slot content.
///
/// Removal is literal substring matching, not token-aware, so phrases are
/// ordered longest-first to avoid leaving fragments behind.
pub const NOISE_PHRASES: &[&str] = &[
    "i would like to",
    "i'd like to",
    "i want to",
    "i need to",
    "could you",
    "would you",
    "can you",
    "will you",
    "for me",
    "kindly",
    "please",
];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compiles"));

/// Lowercase, trim, and collapse internal whitespace runs to single spaces.
#[must_use]
pub fn basic_cleanup(input: &str) -> String {
    WHITESPACE_RUN
        .replace_all(input.to_lowercase().trim(), " ")
        .into_owned()
}

/// Strip every configured noise phrase, then re-collapse whitespace.
#[must_use]
pub fn remove_noise(input: &str) -> String {
    let mut result = input.to_string();
    for phrase in NOISE_PHRASES {
        result = result.replace(phrase, "");
    }
    WHITESPACE_RUN.replace_all(result.trim(), " ").into_owned()
}

/// Full normalization pass: cleanup then noise removal.
///
/// Pure and total; re-normalizing an already-normalized string returns the
/// same string.
///
/// # Examples
///
/// ```
/// use tasktalk::normalizer::normalize_input;
///
/// assert_eq!(normalize_input("  Could you ADD  buy milk  "), "add buy milk");
/// ```
#[must_use]
pub fn normalize_input(input: &str) -> String {
    remove_noise(&basic_cleanup(input))
}
