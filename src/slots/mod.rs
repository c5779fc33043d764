//! Slot extraction.
//!
//! Each extractor is a pure function from text to zero or more candidate
//! values for one slot type. [`extract_slots`] runs the battery that is
//! relevant for the detected intent and merges the outputs into one slot
//! bag. A bag entry is never an empty list — absence means the key is
//! omitted — and multiple candidates for one key signal ambiguity.

pub mod date;
pub mod description;
pub mod priority;
pub mod recurrence;
pub mod time;
pub mod title;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Month-name alternation shared by the date and title extractors.
pub(crate) const MONTHS_ALT: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// Weekday names in canonical order.
pub(crate) const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// One candidate value for a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Number(i64),
    Text(String),
}

impl SlotValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SlotValue::Text(s) => Some(s),
            SlotValue::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            SlotValue::Number(n) => Some(*n),
            SlotValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<&str> for SlotValue {
    fn from(s: &str) -> Self {
        SlotValue::Text(s.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(s: String) -> Self {
        SlotValue::Text(s)
    }
}

impl From<i64> for SlotValue {
    fn from(n: i64) -> Self {
        SlotValue::Number(n)
    }
}

/// Slot name mapped to an ordered candidate list. A `BTreeMap` keeps
/// iteration order stable, which the ambiguity checker relies on.
pub type SlotBag = BTreeMap<String, Vec<SlotValue>>;

static HASH_ID_RE: Lazy<Regex> = Lazy::new(|| re(r"#(\d+)"));
static BARE_ID_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(\d+)\b"));
static DELETE_BY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| re(r#"(?i)(?:delete|remove)\s+(?:task\s+)?["']?([^"']+)["']?"#));
static LEADING_ARTICLE_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)^(the|task)\s+"));

static COMPLETION_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(completed|done|finished|i\s+did)\b"));
static YESTERDAY_RE: Lazy<Regex> = Lazy::new(|| re(r"\byesterday\b"));
static PENDING_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(pending|todo|to\s*-?\s*do|not\s+done|remaining)\b"));
static DAILY_LIST_RE: Lazy<Regex> = Lazy::new(|| re(r"\b(daily|today'?s?)\b"));
static TOMORROW_LIST_RE: Lazy<Regex> = Lazy::new(|| re(r"\btomorrow'?s?\b"));

static TRAILING_CONNECTOR_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)\b(at|on|for)$"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

fn put(bag: &mut SlotBag, key: &str, values: Vec<SlotValue>) {
    if !values.is_empty() {
        bag.insert(key.to_string(), values);
    }
}

/// Run every extractor relevant for the intent over the normalized text
/// and merge the candidates into one slot bag.
#[must_use]
pub fn extract_slots(text: &str, intent: Option<Intent>) -> SlotBag {
    let mut slots = SlotBag::new();
    let lower = text.to_lowercase();

    // Id, for delete/edit. A `#`-prefixed token wins over a bare integer;
    // with neither, a quoted or trailing phrase becomes a title-based
    // delete target.
    if intent == Some(Intent::DeleteTask) || intent == Some(Intent::EditTask) {
        if let Some(caps) = HASH_ID_RE.captures(text) {
            if let Ok(id) = caps[1].parse::<i64>() {
                put(&mut slots, "id", vec![SlotValue::Number(id)]);
            }
        } else if let Some(caps) = BARE_ID_RE.captures(text) {
            if let Ok(id) = caps[1].parse::<i64>() {
                put(&mut slots, "id", vec![SlotValue::Number(id)]);
            }
        }

        if !slots.contains_key("id") {
            if let Some(caps) = DELETE_BY_NAME_RE.captures(text) {
                let title = LEADING_ARTICLE_RE
                    .replace(caps[1].trim(), "")
                    .trim()
                    .to_string();
                if !title.is_empty() {
                    put(&mut slots, "title", vec![SlotValue::Text(title)]);
                }
            }
        }
    }

    // List filters, by keyword precedence: completion first (optionally
    // narrowed to a date), then pending, today, tomorrow, generic date.
    if intent == Some(Intent::ListTasks) {
        if COMPLETION_RE.is_match(&lower) {
            if YESTERDAY_RE.is_match(&lower) {
                put(&mut slots, "filter", vec!["COMPLETED_ON_DATE".into()]);
                put(&mut slots, "value", vec!["yesterday".into()]);
            } else {
                let dates = date::extract_dates(text);
                if dates.is_empty() {
                    put(&mut slots, "filter", vec!["COMPLETED".into()]);
                } else {
                    put(&mut slots, "filter", vec!["COMPLETED_ON_DATE".into()]);
                    put(&mut slots, "value", dates.into_iter().map(Into::into).collect());
                }
            }
        } else if PENDING_RE.is_match(&lower) {
            put(&mut slots, "filter", vec!["PENDING".into()]);
        } else if DAILY_LIST_RE.is_match(&lower) {
            put(&mut slots, "filter", vec!["TODAY".into()]);
        } else if TOMORROW_LIST_RE.is_match(&lower) {
            put(&mut slots, "filter", vec!["TOMORROW".into()]);
        } else {
            let dates = date::extract_dates(text);
            if let Some(first) = dates.first() {
                match first.as_str() {
                    "today" => put(&mut slots, "filter", vec!["TODAY".into()]),
                    "tomorrow" => put(&mut slots, "filter", vec!["TOMORROW".into()]),
                    _ => {
                        put(&mut slots, "filter", vec!["DATE".into()]);
                        put(&mut slots, "value", dates.into_iter().map(Into::into).collect());
                    }
                }
            }
        }
    }

    // Date. List commands consume dates through the filter instead.
    if intent != Some(Intent::ListTasks) {
        let dates = date::extract_dates(text);
        put(&mut slots, "date", dates.into_iter().map(Into::into).collect());
    }

    // Time. A hash id ("#7") would otherwise read as a bare hour, so it
    // is scrubbed first for the id-carrying intents.
    let time_text = if intent == Some(Intent::DeleteTask) || intent == Some(Intent::EditTask) {
        HASH_ID_RE.replace_all(text, "").into_owned()
    } else {
        text.to_string()
    };
    let times = time::extract_times(&time_text);
    put(&mut slots, "time", times.into_iter().map(Into::into).collect());

    // Recurrence, create only.
    if intent == Some(Intent::CreateTask) {
        if let Some(pattern) = recurrence::extract_recurrence(text) {
            put(
                &mut slots,
                "recurrence",
                vec![recurrence::recurrence_to_string(&pattern).into()],
            );
        }
    }

    // Priority, create/edit.
    if intent == Some(Intent::CreateTask) || intent == Some(Intent::EditTask) {
        if let Some(priority) = priority::extract_priority(text) {
            put(&mut slots, "priority", vec![priority.as_str().into()]);
        }
    }

    // Description, any intent: the edit follow-up turn arrives with no
    // intent at all.
    if let Some(description) = description::extract_description(text) {
        put(&mut slots, "description", vec![description.into()]);
    }

    // Title, except for list and delete (delete-by-name was handled above).
    if intent != Some(Intent::ListTasks) && intent != Some(Intent::DeleteTask) {
        let without_description = description::remove_description_from_text(text);
        let titles = title::extract_title(&without_description, intent);
        put(&mut slots, "title", titles.into_iter().map(Into::into).collect());
    }

    // Implicit title: no intent keyword fired but a date was found, so the
    // text before the date reads as a create-task title.
    if intent.is_none() && !slots.contains_key("title") {
        if let Some(title) = implicit_title(text, &slots) {
            put(&mut slots, "title", vec![title.into()]);
        }
    }

    slots
}

fn implicit_title(text: &str, slots: &SlotBag) -> Option<String> {
    let date = slots.get("date")?.first()?.as_str()?;
    let date_index = text.find(date)?;
    if date_index == 0 {
        return None;
    }

    let before_date = text[..date_index].trim();
    let cleaned = TRAILING_CONNECTOR_RE.replace(before_date, "").trim().to_string();
    if cleaned.len() < 2 {
        return None;
    }
    Some(cleaned)
}
