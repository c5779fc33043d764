//! Title extractor.
//!
//! The title is whatever survives after stripping command verbs, task
//! stop-words, priority and recurrence phrases, every supported date and
//! time expression, and leftover punctuation. A result that is empty,
//! shorter than two characters, or purely numeric is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use super::MONTHS_ALT;
use crate::intent::Intent;

static STOP_WORDS_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(add|create|new|schedule|edit|change|update|move|delete|remove|list|show|view|see|task|for|to|on|my|a)\b")
});
static PRIORITY_WORDS_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(urgent|asap|immediately|critical|emergency|high\s*priority|important|low\s*priority|whenever|not\s+urgent|normal\s*priority)\b")
});
static RECURRENCE_WORDS_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(every\s+day|daily|every\s+week|weekly|every\s+month|monthly|every\s+year|yearly|annually|weekdays|every\s+weekday|weekends|every\s+weekend|every\s+\d+\s+(?:days?|weeks?)|every\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)(?:\s*(?:,|and)\s*(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday))*)\b")
});

static HASH_ID_RE: Lazy<Regex> = Lazy::new(|| re(r"#\d+"));
static DATE_KEYWORDS_RE: Lazy<Regex> =
    Lazy::new(|| re(r"\b(today|tomorrow|day after tomorrow|yesterday)\b"));
static THIS_NEXT_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(this|next)\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|week|weekend)\b")
});
static IN_N_RE: Lazy<Regex> = Lazy::new(|| re(r"\bin\s+\d+\s+(?:days?|weeks?|months?)\b"));
static END_OF_RE: Lazy<Regex> = Lazy::new(|| re(r"\bend\s+of\s+(?:day|week|month)\b"));
static MONTH_DAY_RE: Lazy<Regex> =
    Lazy::new(|| re(&format!(r"\b(?:{MONTHS_ALT})\s+\d{{1,2}}\b")));
static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| re(&format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS_ALT})\b")));
static DAY_OF_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| re(&format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+of\s+(?:{MONTHS_ALT})\b")));
static BARE_TIME_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{1,2}(:\d{2})?\s?(am|pm|h)?\b"));
static ISO_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{4}-\d{2}-\d{2}\b"));
static PT_SLASH_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{2}/\d{2}/\d{4}\b"));
static PT_DASH_RE: Lazy<Regex> = Lazy::new(|| re(r"\b\d{2}-\d{2}-\d{4}\b"));
static AT_IN_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(at|in)\b"));
static SYMBOLS_RE: Lazy<Regex> = Lazy::new(|| re(r#"[#@$%^&*()+=\[\]{}|\\;:'"<>?,./]+"#));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| re(r"\s+"));

// Whole-input literals that are dates or times, never titles.
static PURE_ISO_RE: Lazy<Regex> = Lazy::new(|| re(r"^\d{4}-\d{2}-\d{2}$"));
static PURE_PT_SLASH_RE: Lazy<Regex> = Lazy::new(|| re(r"^\d{2}/\d{2}/\d{4}$"));
static PURE_PT_DASH_RE: Lazy<Regex> = Lazy::new(|| re(r"^\d{2}-\d{2}-\d{4}$"));
static PURE_TIME_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)^\d{1,2}(:\d{2})?\s?(am|pm|h)?$"));
static PURE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| re(r"^\d+$"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

/// Extract a task title from the text, intent-dependent.
///
/// List commands never carry a title. Inputs that are a pure date or time
/// literal yield nothing.
#[must_use]
pub fn extract_title(text: &str, intent: Option<Intent>) -> Vec<String> {
    if intent == Some(Intent::ListTasks) {
        return Vec::new();
    }

    let trimmed = text.trim();
    if PURE_ISO_RE.is_match(trimmed)
        || PURE_PT_SLASH_RE.is_match(trimmed)
        || PURE_PT_DASH_RE.is_match(trimmed)
        || PURE_TIME_RE.is_match(trimmed)
    {
        return Vec::new();
    }

    let mut cleaned = text.to_lowercase();
    for regex in [
        &*HASH_ID_RE,
        &*STOP_WORDS_RE,
        &*PRIORITY_WORDS_RE,
        &*RECURRENCE_WORDS_RE,
        &*DATE_KEYWORDS_RE,
        &*THIS_NEXT_RE,
        &*IN_N_RE,
        &*END_OF_RE,
        &*MONTH_DAY_RE,
        &*DAY_MONTH_RE,
        &*DAY_OF_MONTH_RE,
        &*BARE_TIME_RE,
        &*ISO_RE,
        &*PT_SLASH_RE,
        &*PT_DASH_RE,
        &*AT_IN_RE,
    ] {
        cleaned = regex.replace_all(&cleaned, "").into_owned();
    }
    cleaned = SYMBOLS_RE.replace_all(&cleaned, " ").into_owned();
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ").trim().to_string();

    if cleaned.len() < 2 || PURE_NUMBER_RE.is_match(&cleaned) {
        return Vec::new();
    }

    vec![cleaned]
}
