//! Payload normalization: the boundary between the candidate-list world of
//! the slot bag and the executor's flat, single-valued payload.

use serde_json::{Map, Value, json};

use crate::slots::{SlotBag, SlotValue};

/// The flat payload attached to a FINAL result.
pub type Payload = Map<String, Value>;

fn first<'a>(slots: &'a SlotBag, key: &str) -> Option<&'a SlotValue> {
    slots.get(key).and_then(|values| values.first())
}

fn first_json(slots: &SlotBag, key: &str) -> Option<Value> {
    first(slots, key).map(|v| match v {
        SlotValue::Number(n) => json!(n),
        SlotValue::Text(s) => json!(s),
    })
}

/// Collapse a slot bag into a flat payload: the first candidate of each
/// present slot wins.
///
/// The id is coerced to a number and dropped when it does not parse; a
/// `value` rides along only with an explicit filter; `filter` defaults to
/// `"ALL"` when absent.
#[must_use]
pub fn normalize_payload(slots: &SlotBag) -> Payload {
    let mut payload = Payload::new();

    if let Some(title) = first_json(slots, "title") {
        payload.insert("title".into(), title);
    }

    if let Some(date) = first_json(slots, "date") {
        payload.insert("date".into(), date);
    }

    // A time exists only when the user actually said one.
    if let Some(time) = first(slots, "time") {
        match time {
            SlotValue::Text(s) if s.trim().is_empty() => {}
            SlotValue::Text(s) => {
                payload.insert("time".into(), json!(s));
            }
            SlotValue::Number(n) => {
                payload.insert("time".into(), json!(n));
            }
        }
    }

    if let Some(id) = first(slots, "id").and_then(SlotValue::as_number) {
        payload.insert("id".into(), json!(id));
    }

    match first_json(slots, "filter") {
        Some(filter) => {
            payload.insert("filter".into(), filter);
            if let Some(value) = first_json(slots, "value") {
                payload.insert("value".into(), value);
            }
        }
        None => {
            payload.insert("filter".into(), json!("ALL"));
        }
    }

    if let Some(priority) = first_json(slots, "priority") {
        payload.insert("priority".into(), priority);
    }

    if let Some(recurrence) = first_json(slots, "recurrence") {
        payload.insert("recurrence".into(), recurrence);
    }

    if let Some(description) = first_json(slots, "description") {
        payload.insert("description".into(), description);
    }

    payload
}
