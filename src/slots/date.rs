//! Date expression extractor.
//!
//! Maps free text to an ordered list of canonical date tokens. Pattern
//! categories are checked in a fixed order and are not mutually exclusive:
//! every distinct date expression in the input pushes its own candidate, and
//! multiple candidates later surface as an ambiguous slot. Candidates are
//! tokens like `"tomorrow"`, `"next friday"`, `"in 3 days"` or `"jan 15"`;
//! resolution to calendar dates happens in [`crate::resolve`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::{MONTHS_ALT, WEEKDAYS};

static TODAY_RE: Lazy<Regex> = Lazy::new(|| re(r"\btoday\b"));
static TOMORROW_RE: Lazy<Regex> = Lazy::new(|| re(r"\btomorrow\b"));
static NEXT_DAY_RE: Lazy<Regex> = Lazy::new(|| re(r"\bnext\s+day\b"));
static YESTERDAY_RE: Lazy<Regex> = Lazy::new(|| re(r"\byesterday\b"));
static DAY_AFTER_TOMORROW_RE: Lazy<Regex> = Lazy::new(|| re(r"\bday after tomorrow\b"));

/// Per-weekday pair: "this <day>" vs bare/"next "/"on <day>".
static WEEKDAY_RES: Lazy<Vec<(&'static str, Regex, Regex)>> = Lazy::new(|| {
    WEEKDAYS
        .iter()
        .map(|day| {
            (
                *day,
                re(&format!(r"\bthis\s+{day}\b")),
                re(&format!(r"\b(next\s+|on\s+)?{day}\b")),
            )
        })
        .collect()
});

static IN_A_DAY_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+a\s+day\b"));
static IN_DAYS_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+(\d+)\s+days?\b"));
static NEXT_WEEK_RE: Lazy<Regex> = Lazy::new(|| re(r"\bnext\s+week\b"));
static THIS_WEEK_RE: Lazy<Regex> = Lazy::new(|| re(r"\bthis\s+week\b"));
static IN_A_WEEK_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+a\s+week\b"));
static IN_WEEKS_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+(\d+)\s+weeks?\b"));
static END_OF_WEEK_RE: Lazy<Regex> = Lazy::new(|| re(r"\bend\s+of\s+(the\s+)?week\b"));
static END_OF_MONTH_RE: Lazy<Regex> = Lazy::new(|| re(r"\bend\s+of\s+(the\s+)?month\b"));
static END_OF_DAY_RE: Lazy<Regex> = Lazy::new(|| re(r"\bend\s+of\s+(the\s+)?day\b"));
static NEXT_MONTH_RE: Lazy<Regex> = Lazy::new(|| re(r"\bnext\s+month\b"));
static IN_A_MONTH_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+a\s+month\b"));
static IN_MONTHS_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+(\d+)\s+months?\b"));
static THIS_WEEKEND_RE: Lazy<Regex> = Lazy::new(|| re(r"\bthis\s+weekend\b"));
static NEXT_WEEKEND_RE: Lazy<Regex> = Lazy::new(|| re(r"\bnext\s+weekend\b"));
static BARE_WEEKEND_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(on\s+the\s+)?weekend\b"));

static MONTH_DAY_RE: Lazy<Regex> =
    Lazy::new(|| re(&format!(r"\b({MONTHS_ALT})\s+(\d{{1,2}})\b")));
static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| re(&format!(r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTHS_ALT})\b")));
static DAY_OF_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| re(&format!(r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+of\s+({MONTHS_ALT})\b")));

static ISO_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{4}-\d{2}-\d{2}\b"));
static PT_SLASH_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{2}/\d{2}/\d{4}\b"));
static PT_DASH_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{2}-\d{2}-\d{4}\b"));
static US_SLASH_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{1,2}/\d{1,2}/\d{4}\b"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

/// Extract every date expression in the text as a canonical token.
///
/// Returns the empty list when no pattern matches.
///
/// # Examples
///
/// ```
/// use tasktalk::slots::date::extract_dates;
///
/// assert_eq!(extract_dates("on tuesday"), vec!["next tuesday"]);
/// assert_eq!(extract_dates("15th jan"), vec!["jan 15"]);
/// assert!(extract_dates("buy milk").is_empty());
/// ```
#[must_use]
pub fn extract_dates(text: &str) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();
    let lower = text.to_lowercase();

    // Basic keywords. "next day" is an alias for tomorrow.
    if TODAY_RE.is_match(&lower) {
        results.push("today".into());
    }
    if TOMORROW_RE.is_match(&lower) {
        results.push("tomorrow".into());
    }
    if NEXT_DAY_RE.is_match(&lower) {
        results.push("tomorrow".into());
    }
    if YESTERDAY_RE.is_match(&lower) {
        results.push("yesterday".into());
    }
    if DAY_AFTER_TOMORROW_RE.is_match(&lower) {
        results.push("day after tomorrow".into());
    }

    // Weekdays: "this <day>" keeps the same-week reading; bare, "on <day>"
    // and "next <day>" all normalize to "next <day>".
    for (day, this_re, next_re) in WEEKDAY_RES.iter() {
        if this_re.is_match(&lower) {
            results.push(format!("this {day}"));
        } else if next_re.is_match(&lower) {
            results.push(format!("next {day}"));
        }
    }

    // Relative days.
    if IN_A_DAY_RE.is_match(&lower) {
        results.push("in 1 day".into());
    }
    if let Some(caps) = IN_DAYS_RE.captures(&lower) {
        let num = &caps[1];
        let suffix = if num == "1" { "" } else { "s" };
        results.push(format!("in {num} day{suffix}"));
    }

    // Relative weeks.
    if NEXT_WEEK_RE.is_match(&lower) {
        results.push("next week".into());
    }
    if THIS_WEEK_RE.is_match(&lower) {
        results.push("this week".into());
    }
    if IN_A_WEEK_RE.is_match(&lower) {
        results.push("in 1 week".into());
    }
    if let Some(caps) = IN_WEEKS_RE.captures(&lower) {
        let num = &caps[1];
        let suffix = if num == "1" { "" } else { "s" };
        results.push(format!("in {num} week{suffix}"));
    }

    // End of period.
    if END_OF_WEEK_RE.is_match(&lower) {
        results.push("end of week".into());
    }
    if END_OF_MONTH_RE.is_match(&lower) {
        results.push("end of month".into());
    }
    if END_OF_DAY_RE.is_match(&lower) {
        results.push("end of day".into());
    }

    // Relative months.
    if NEXT_MONTH_RE.is_match(&lower) {
        results.push("next month".into());
    }
    if IN_A_MONTH_RE.is_match(&lower) {
        results.push("in 1 month".into());
    }
    if let Some(caps) = IN_MONTHS_RE.captures(&lower) {
        let num = &caps[1];
        let suffix = if num == "1" { "" } else { "s" };
        results.push(format!("in {num} month{suffix}"));
    }

    // Weekend. A bare "weekend" defaults to next weekend.
    if THIS_WEEKEND_RE.is_match(&lower) {
        results.push("this weekend".into());
    }
    if NEXT_WEEKEND_RE.is_match(&lower) {
        results.push("next weekend".into());
    }
    if BARE_WEEKEND_RE.is_match(&lower) && !results.iter().any(|r| r.contains("weekend")) {
        results.push("next weekend".into());
    }

    // Month-day pairs, normalized to "<month> <day>".
    if let Some(caps) = MONTH_DAY_RE.captures(&lower) {
        results.push(format!("{} {}", &caps[1], &caps[2]));
    }
    if let Some(caps) = DAY_MONTH_RE.captures(&lower) {
        results.push(format!("{} {}", &caps[2], &caps[1]));
    }
    if let Some(caps) = DAY_OF_MONTH_RE.captures(&lower) {
        results.push(format!("{} {}", &caps[2], &caps[1]));
    }

    // Numeric formats: ISO, Portuguese slash/dash, US slash.
    if let Some(m) = ISO_RE.find(&lower) {
        results.push(m.as_str().into());
    }
    if let Some(m) = PT_SLASH_RE.find(&lower) {
        results.push(m.as_str().into());
    }
    if let Some(m) = PT_DASH_RE.find(&lower) {
        results.push(m.as_str().into());
    }
    if let Some(m) = US_SLASH_RE.find(&lower) {
        // dd/mm/yyyy already matched the same span for two-digit pairs.
        if !results.iter().any(|r| r == m.as_str()) {
            results.push(m.as_str().into());
        }
    }

    results
}
