//! Recurrence pattern extractor.
//!
//! Parses repetition phrases into a typed pattern and serializes the
//! pattern back to a canonical string for the slot bag ("daily",
//! "every 2 weeks", "monday,friday", ...). The canonical string is stable
//! under re-parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::WEEKDAYS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrencePattern {
    Daily { interval: Option<u32> },
    Weekly { interval: Option<u32> },
    Monthly,
    Yearly,
    /// Specific weekdays, e.g. every Monday and Friday. Also covers the
    /// "weekdays" (Mon-Fri) and "weekends" (Sat-Sun) shorthands.
    Weekdays { days: Vec<&'static str> },
}

static DAILY_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(every\s+day|daily)\b"));
static EVERY_N_DAYS_RE: Lazy<Regex> = Lazy::new(|| re(r"\bevery\s+(\d+)\s+days?\b"));
static WEEKLY_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(every\s+week|weekly)\b"));
static EVERY_N_WEEKS_RE: Lazy<Regex> = Lazy::new(|| re(r"\bevery\s+(\d+)\s+weeks?\b"));
static MONTHLY_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(every\s+month|monthly)\b"));
static YEARLY_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(every\s+year|yearly|annually)\b"));
static WEEKDAYS_SHORTHAND_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(weekdays|every\s+weekday)\b"));
static WEEKENDS_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(weekends|every\s+weekend)\b"));

/// "every monday, wednesday, and friday" — the grouped weekday list.
static EVERY_DAY_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"\bevery\s+((?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)(?:\s*(?:,|and)\s*(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday))*)\b")
});

/// Per-weekday "every ... <day>" probes, to catch "every monday and friday".
static EVERY_WEEKDAY_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    WEEKDAYS
        .iter()
        .map(|day| (*day, re(&format!(r"\bevery\s+(?:.*\b)?{day}\b"))))
        .collect()
});

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

/// Parse a recurrence phrase, if any.
#[must_use]
pub fn extract_recurrence(text: &str) -> Option<RecurrencePattern> {
    let lower = text.to_lowercase();

    if DAILY_RE.is_match(&lower) {
        return Some(RecurrencePattern::Daily { interval: None });
    }
    if let Some(caps) = EVERY_N_DAYS_RE.captures(&lower) {
        let interval: u32 = caps[1].parse().ok()?;
        return Some(RecurrencePattern::Daily {
            interval: Some(interval),
        });
    }
    if WEEKLY_RE.is_match(&lower) {
        return Some(RecurrencePattern::Weekly { interval: None });
    }
    if let Some(caps) = EVERY_N_WEEKS_RE.captures(&lower) {
        let interval: u32 = caps[1].parse().ok()?;
        return Some(RecurrencePattern::Weekly {
            interval: Some(interval),
        });
    }
    if MONTHLY_RE.is_match(&lower) {
        return Some(RecurrencePattern::Monthly);
    }
    if YEARLY_RE.is_match(&lower) {
        return Some(RecurrencePattern::Yearly);
    }

    let mut found_days: Vec<&'static str> = Vec::new();
    for (day, probe) in EVERY_WEEKDAY_RES.iter() {
        if probe.is_match(&lower) {
            found_days.push(*day);
        }
    }
    if let Some(caps) = EVERY_DAY_LIST_RE.captures(&lower) {
        let days_part = &caps[1];
        for day in WEEKDAYS {
            if days_part.contains(day) && !found_days.contains(day) {
                found_days.push(*day);
            }
        }
    }
    if !found_days.is_empty() {
        return Some(RecurrencePattern::Weekdays { days: found_days });
    }

    if WEEKDAYS_SHORTHAND_RE.is_match(&lower) {
        return Some(RecurrencePattern::Weekdays {
            days: vec!["monday", "tuesday", "wednesday", "thursday", "friday"],
        });
    }
    if WEEKENDS_RE.is_match(&lower) {
        return Some(RecurrencePattern::Weekdays {
            days: vec!["saturday", "sunday"],
        });
    }

    None
}

/// Canonical string form stored in the slot bag and final payload.
#[must_use]
pub fn recurrence_to_string(pattern: &RecurrencePattern) -> String {
    match pattern {
        RecurrencePattern::Daily {
            interval: Some(n),
        } if *n > 1 => format!("every {n} days"),
        RecurrencePattern::Daily { .. } => "daily".to_string(),
        RecurrencePattern::Weekly {
            interval: Some(n),
        } if *n > 1 => format!("every {n} weeks"),
        RecurrencePattern::Weekly { .. } => "weekly".to_string(),
        RecurrencePattern::Monthly => "monthly".to_string(),
        RecurrencePattern::Yearly => "yearly".to_string(),
        RecurrencePattern::Weekdays { days } => days.join(","),
    }
}
