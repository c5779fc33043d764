//! Description extractor.
//!
//! Supported shapes:
//! - "description: some text" (also desc:/details:/note:/notes:), capturing
//!   up to the next date/time keyword or end of input
//! - "description some text" — the keyword leading the whole input
//! - "with description some text"
//!
//! A separate helper detects when the entire input is just one of the bare
//! keywords, which tells the state machine to prompt for the actual text
//! instead of storing the keyword itself.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static COLON_FORM_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(?:description|desc|details|note|notes)\s*:\s*(.+)")
});
static LEADING_FORM_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)^(?:description|desc|details|note|notes)\s+(.+)$"));
static WITH_FORM_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)with\s+(?:description|desc|details|note|notes)\s+(.+)"));

/// Terminates a captured description: the next date/time-ish keyword.
static TERMINATOR_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\s+(?:for|on|at|tomorrow|today|next|this|\d{1,2}(?:st|nd|rd|th)?|\d{1,2}[:/]\d{2})")
});

static TRAILING_KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)\s+(?:description|desc|details|note|notes)\s*:?\s*$"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| re(r"\s+"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

/// A single pattern match: the span to cut out of the text and the
/// captured description (already truncated at the first terminator).
fn match_pattern(
    text: &str,
    pattern: &Regex,
    truncate: bool,
) -> Option<(Range<usize>, String)> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    let captured = caps.get(1)?;

    let (body, cut_end) = if truncate {
        match TERMINATOR_RE.find(captured.as_str()) {
            Some(term) => (
                &captured.as_str()[..term.start()],
                captured.start() + term.start(),
            ),
            None => (captured.as_str(), whole.end()),
        }
    } else {
        (captured.as_str(), whole.end())
    };

    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    Some((whole.start()..cut_end, body.to_string()))
}

fn patterns() -> [(&'static Regex, bool); 3] {
    [
        (&*COLON_FORM_RE, true),
        (&*LEADING_FORM_RE, false),
        (&*WITH_FORM_RE, true),
    ]
}

/// True when the whole input is just a description keyword, signaling the
/// state machine to ask for the actual text.
#[must_use]
pub fn is_description_keyword_only(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "description" | "desc" | "details" | "note" | "notes"
    )
}

/// Extract a description, trying each supported shape in order.
#[must_use]
pub fn extract_description(text: &str) -> Option<String> {
    patterns()
        .iter()
        .find_map(|(pattern, truncate)| match_pattern(text, pattern, *truncate).map(|(_, d)| d))
}

/// Remove the description phrase so it cannot pollute title extraction.
#[must_use]
pub fn remove_description_from_text(text: &str) -> String {
    let mut cleaned = text.to_string();

    for (pattern, truncate) in patterns() {
        if let Some((range, _)) = match_pattern(&cleaned, pattern, truncate) {
            cleaned.replace_range(range, "");
        }
    }
    cleaned = TRAILING_KEYWORD_RE.replace(&cleaned, "").into_owned();

    WHITESPACE_RE.replace_all(&cleaned, " ").trim().to_string()
}
