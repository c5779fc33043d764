//! Priority keyword classifier.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static URGENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(urgent|asap|immediately|critical|emergency)\b").expect("static regex compiles")
});
static HIGH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(high\s*priority|important|high)\b").expect("static regex compiles")
});
static LOW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(low\s*priority|whenever|not\s+urgent|low)\b").expect("static regex compiles")
});
static NORMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(normal\s*priority|normal)\b").expect("static regex compiles"));

/// Single-label classification with fixed precedence:
/// urgent beats high beats low beats normal. The order is load-bearing;
/// reordering the checks silently changes behavior.
#[must_use]
pub fn extract_priority(text: &str) -> Option<Priority> {
    let lower = text.to_lowercase();

    if URGENT_RE.is_match(&lower) {
        return Some(Priority::Urgent);
    }
    if HIGH_RE.is_match(&lower) {
        return Some(Priority::High);
    }
    if LOW_RE.is_match(&lower) {
        return Some(Priority::Low);
    }
    if NORMAL_RE.is_match(&lower) {
        return Some(Priority::Normal);
    }

    None
}

/// Display marker for list renderings.
#[must_use]
pub fn priority_emoji(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "🔴",
        Priority::High => "🟠",
        Priority::Normal => "🟢",
        Priority::Low => "⚪",
    }
}
