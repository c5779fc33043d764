//! Time expression extractor.
//!
//! Recognizes a bare hour ("10"), hour:minute ("10:30"), am/pm forms
//! ("10am", "3 pm") and the 24-hour suffix form ("22h"). ISO date
//! substrings are stripped first so a year is never misread as an hour.

use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("static regex compiles"));
static H_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})h\b").expect("static regex compiles"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(:\d{2})?\s?(am|pm)?\b").expect("static regex compiles"));

/// Extract every time expression in the text.
///
/// Numeric tokens above 24, or above 12 without a colon or am/pm qualifier,
/// are rejected: they are more likely a day-of-month or similar.
///
/// # Examples
///
/// ```
/// use tasktalk::slots::time::extract_times;
///
/// assert_eq!(extract_times("at 10:30"), vec!["10:30"]);
/// assert_eq!(extract_times("22h"), vec!["22h"]);
/// assert!(extract_times("buy milk tomorrow").is_empty());
/// ```
#[must_use]
pub fn extract_times(text: &str) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();

    let text = ISO_DATE_RE.replace_all(text, "");

    for caps in H_SUFFIX_RE.captures_iter(&text) {
        results.push(caps[0].to_string());
    }

    for caps in TIME_RE.captures_iter(&text) {
        let num: u32 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        // Plain large numbers are day-of-month or year fragments, not hours.
        if num > 24 || (num > 12 && caps.get(2).is_none() && caps.get(3).is_none()) {
            continue;
        }
        let token = caps[0].trim().to_string();
        if !results.contains(&token) {
            results.push(token);
        }
    }

    results
}
