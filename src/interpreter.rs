//! The conversation state machine.
//!
//! [`interpret`] is the core's only entry point: raw text plus the prior
//! conversation state in, a result plus the next state out. Exactly one
//! mode handler fires per turn, chosen by the active state variant in a
//! fixed priority order; the idle fallback handles fresh input. Every
//! terminal path either finalizes a command (the caller must then execute
//! it) or returns a question or informational reply (nothing executes).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::ambiguity::required_slots;
use crate::intent::Intent;
use crate::payload::{Payload, normalize_payload};
use crate::pipeline::run_pipeline;
use crate::slots::{SlotBag, SlotValue, description::is_description_keyword_only};
use crate::smalltalk::conversational_response;
use crate::state::{ConversationState, DeleteCandidate};

/// The outcome of one interpreter turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoreResult {
    /// Must be shown to the user; no command executes.
    Question { message: String },
    /// Informational or conversational reply; no command executes.
    Info { message: String },
    /// The caller must now run the named intent with this payload.
    Final { intent: Intent, payload: Payload },
}

impl CoreResult {
    fn question(message: impl Into<String>) -> Self {
        CoreResult::Question {
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        CoreResult::Info {
            message: message.into(),
        }
    }

    fn finalize(intent: Intent, payload: Payload) -> Self {
        CoreResult::Final { intent, payload }
    }
}

static EDIT_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)^(change|rename|set|update)\s+(it\s+)?to\s+"));
static EDIT_TITLE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)^(new\s+title|title)\s*[:=]?\s*"));
static CALL_IT_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)^call\s+it\s+"));
static BARE_TIME_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)^\d{1,2}(:\d{2})?\s?(am|pm|h)?$"));
static BARE_DATE_WORD_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)^(today|tomorrow|next\s+\w+)$"));
static BARE_ISO_RE: Lazy<Regex> = Lazy::new(|| re(r"^\d{4}-\d{2}-\d{2}$"));
static EARLIEST_RE: Lazy<Regex> = Lazy::new(|| re(r"earliest|first"));
static LATEST_RE: Lazy<Regex> = Lazy::new(|| re(r"last|latest"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

/// Extract a replacement title from an edit follow-up, preserving case.
///
/// Strips leading edit phrases ("change it to", "new title:", "call it")
/// and rejects leftovers that read as a bare date or time rather than a
/// title.
fn extract_new_title(text: &str) -> Option<String> {
    let cleaned = EDIT_PHRASE_RE.replace(text, "");
    let cleaned = EDIT_TITLE_PREFIX_RE.replace(&cleaned, "");
    let cleaned = CALL_IT_RE.replace(&cleaned, "");
    let cleaned = cleaned.trim();

    if cleaned.len() < 2 {
        return None;
    }
    if BARE_TIME_RE.is_match(cleaned)
        || BARE_DATE_WORD_RE.is_match(cleaned)
        || BARE_ISO_RE.is_match(cleaned)
    {
        return None;
    }

    Some(cleaned.to_string())
}

fn first_text(slots: &SlotBag, key: &str) -> Option<String> {
    slots
        .get(key)
        .and_then(|v| v.first())
        .and_then(SlotValue::as_str)
        .map(str::to_string)
}

fn due_at_timestamp(candidate: &DeleteCandidate) -> i64 {
    chrono::DateTime::parse_from_rfc3339(&candidate.due_at)
        .map(|dt| dt.timestamp())
        .unwrap_or(i64::MAX)
}

const ASK_EDIT_CHANGES: &str =
    "What would you like to change? (new title, date, time, priority, or description)";
const ASK_YES_NO: &str = "Please answer yes or no.";

/// Interpret one turn of raw user text against the prior conversation
/// state, returning the result and the next state.
///
/// Pure: no global state, no I/O. The caller owns storage of the returned
/// state (keyed by session) and execution of FINAL results.
#[must_use]
pub fn interpret(input: &str, state: ConversationState) -> (CoreResult, ConversationState) {
    let normalized = input.trim().to_lowercase();

    match state {
        ConversationState::AwaitingOptionalTime { intent, payload } => {
            awaiting_optional_time(input, &normalized, intent, payload)
        }
        ConversationState::AwaitingDeleteAllConfirmation => delete_all_confirmation(&normalized),
        ConversationState::AwaitingEditChanges {
            task_id,
            awaiting_description,
        } => awaiting_edit_changes(input, &normalized, task_id, awaiting_description),
        ConversationState::PendingDelete { candidates } => {
            pending_delete(&normalized, candidates)
        }
        ConversationState::PendingCommand { intent, payload } => {
            pending_command(&normalized, intent, payload)
        }
        ConversationState::AwaitingSlot {
            intent,
            slot,
            slots,
        } => awaiting_slot(input, &normalized, intent, slot, slots),
        ConversationState::Idle => fresh_input(input),
    }
}

/// Mode 1: an optional time may still be supplied or declined.
fn awaiting_optional_time(
    input: &str,
    normalized: &str,
    intent: Intent,
    mut payload: Payload,
) -> (CoreResult, ConversationState) {
    if normalized == "no" || normalized == "skip" {
        debug!(%intent, "optional time declined, finalizing");
        return (
            CoreResult::finalize(intent, payload),
            ConversationState::Idle,
        );
    }

    let (ctx, _) = run_pipeline(input);
    match first_text(&ctx.slots, "time") {
        Some(time) => {
            payload.insert("time".into(), json!(time));
            (
                CoreResult::finalize(intent, payload),
                ConversationState::Idle,
            )
        }
        None => (
            CoreResult::question("Please provide a valid time or type 'no'."),
            ConversationState::AwaitingOptionalTime { intent, payload },
        ),
    }
}

/// Mode 2: the hard safety gate in front of delete-all.
fn delete_all_confirmation(normalized: &str) -> (CoreResult, ConversationState) {
    match normalized {
        "yes" | "y" => {
            debug!("delete-all confirmed");
            (
                CoreResult::finalize(Intent::DeleteAllTasks, Payload::new()),
                ConversationState::Idle,
            )
        }
        "no" | "n" | "cancel" => (
            CoreResult::info("Cancelled. No tasks were deleted."),
            ConversationState::Idle,
        ),
        _ => (
            CoreResult::question(ASK_YES_NO),
            ConversationState::AwaitingDeleteAllConfirmation,
        ),
    }
}

/// Mode 3: an edit target is known, waiting for the change itself.
fn awaiting_edit_changes(
    input: &str,
    normalized: &str,
    task_id: i64,
    awaiting_description: bool,
) -> (CoreResult, ConversationState) {
    if normalized == "cancel" {
        return (CoreResult::info("Edit cancelled."), ConversationState::Idle);
    }

    // A bare "description" keyword asks for the actual text first.
    if is_description_keyword_only(input) {
        return (
            CoreResult::question("What description would you like to add?"),
            ConversationState::AwaitingEditChanges {
                task_id,
                awaiting_description: true,
            },
        );
    }

    if awaiting_description {
        let mut payload = Payload::new();
        payload.insert("id".into(), json!(task_id));
        payload.insert("description".into(), json!(input.trim()));
        return (
            CoreResult::finalize(Intent::EditTask, payload),
            ConversationState::Idle,
        );
    }

    let (ctx, _) = run_pipeline(input);

    let mut payload = Payload::new();
    payload.insert("id".into(), json!(task_id));

    // The raw input carries the new title so its casing survives.
    if let Some(title) = extract_new_title(input) {
        payload.insert("title".into(), json!(title));
    }
    for key in ["date", "time", "priority", "description"] {
        if let Some(value) = first_text(&ctx.slots, key) {
            payload.insert(key.into(), json!(value));
        }
    }

    if payload.len() == 1 {
        return (
            CoreResult::question(ASK_EDIT_CHANGES),
            ConversationState::AwaitingEditChanges {
                task_id,
                awaiting_description,
            },
        );
    }

    (
        CoreResult::finalize(Intent::EditTask, payload),
        ConversationState::Idle,
    )
}

/// Mode 4: several delete candidates are outstanding.
fn pending_delete(
    normalized: &str,
    candidates: Vec<DeleteCandidate>,
) -> (CoreResult, ConversationState) {
    if let Ok(id) = normalized.replace('#', "").parse::<i64>() {
        if candidates.iter().any(|c| c.id == id) {
            let mut payload = Payload::new();
            payload.insert("id".into(), json!(id));
            return (
                CoreResult::finalize(Intent::DeleteTask, payload),
                ConversationState::Idle,
            );
        }
    }

    let chosen = if EARLIEST_RE.is_match(normalized) {
        candidates.iter().min_by_key(|c| due_at_timestamp(c))
    } else if LATEST_RE.is_match(normalized) {
        candidates.iter().max_by_key(|c| due_at_timestamp(c))
    } else {
        None
    };

    match chosen {
        Some(task) => {
            let mut payload = Payload::new();
            payload.insert("id".into(), json!(task.id));
            (
                CoreResult::finalize(Intent::DeleteTask, payload),
                ConversationState::Idle,
            )
        }
        None => (
            CoreResult::question("Please choose by ID (e.g. 4), earliest, or latest."),
            ConversationState::PendingDelete { candidates },
        ),
    }
}

/// Mode 5: a fully-built command awaiting plain yes/no.
fn pending_command(
    normalized: &str,
    intent: Intent,
    payload: Payload,
) -> (CoreResult, ConversationState) {
    match normalized {
        "yes" => (
            CoreResult::finalize(intent, payload),
            ConversationState::Idle,
        ),
        "no" | "cancel" => (
            CoreResult::info("Action cancelled."),
            ConversationState::Idle,
        ),
        _ => (
            CoreResult::question(ASK_YES_NO),
            ConversationState::PendingCommand { intent, payload },
        ),
    }
}

/// Mode 6: mid-dialogue slot collection.
fn awaiting_slot(
    input: &str,
    normalized: &str,
    intent: Intent,
    awaited: String,
    accumulated: SlotBag,
) -> (CoreResult, ConversationState) {
    if normalized == "cancel" {
        return (
            CoreResult::info("Action cancelled."),
            ConversationState::Idle,
        );
    }

    let (ctx, _) = run_pipeline(input);

    // Overlay only the awaited slot into the accumulated bag, then overlay
    // everything freshly extracted on top for the completeness check.
    let mut updated = accumulated;
    if let Some(values) = ctx.slots.get(&awaited) {
        updated.insert(awaited.clone(), values.clone());
    }

    let mut merged = updated.clone();
    for (key, values) in &ctx.slots {
        merged.insert(key.clone(), values.clone());
    }

    let missing = required_slots(intent)
        .iter()
        .find(|slot| merged.get(**slot).is_none_or(Vec::is_empty));

    match missing {
        Some(slot) => {
            debug!(%intent, slot, "slot still missing, re-asking");
            (
                CoreResult::question(format!("Please provide {slot}.")),
                ConversationState::AwaitingSlot {
                    intent,
                    slot: (*slot).to_string(),
                    slots: updated,
                },
            )
        }
        None => (
            CoreResult::finalize(intent, normalize_payload(&merged)),
            ConversationState::Idle,
        ),
    }
}

/// Mode 7: fresh input with no dialogue in flight.
fn fresh_input(input: &str) -> (CoreResult, ConversationState) {
    // Small talk preempts intent detection entirely.
    if let Some(reply) = conversational_response(input) {
        return (CoreResult::info(reply), ConversationState::Idle);
    }

    let (ctx, _) = run_pipeline(input);

    let Some(intent) = ctx.intent() else {
        return (
            CoreResult::info(
                "Hmm, I'm not sure what you mean. Try something like 'create a task', \
                 'show my tasks', or 'delete task #1'.",
            ),
            ConversationState::Idle,
        );
    };

    debug!(%intent, slots = ?ctx.slots.keys().collect::<Vec<_>>(), "intent detected");

    // Destructive bulk delete always re-confirms, whatever else was said.
    if intent == Intent::DeleteAllTasks {
        return (
            CoreResult::question(
                "Are you sure you want to delete ALL tasks? This cannot be undone. (yes/no)",
            ),
            ConversationState::AwaitingDeleteAllConfirmation,
        );
    }

    let missing = required_slots(intent)
        .iter()
        .find(|slot| ctx.slots.get(**slot).is_none_or(Vec::is_empty));

    if let Some(slot) = missing {
        return (
            CoreResult::question(format!("Please provide {slot}.")),
            ConversationState::AwaitingSlot {
                intent,
                slot: (*slot).to_string(),
                slots: ctx.slots,
            },
        );
    }

    // An edit whose target is known but whose change is not starts the
    // edit-changes dialogue; inline changes finalize immediately.
    if intent == Intent::EditTask {
        if let Some(id) = ctx
            .slots
            .get("id")
            .and_then(|v| v.first())
            .and_then(SlotValue::as_number)
        {
            let has_inline_change = ["title", "date", "time", "priority", "description"]
                .iter()
                .any(|key| {
                    ctx.slots
                        .get(*key)
                        .and_then(|v| v.first())
                        .is_some_and(|v| v.as_str().is_none_or(|s| !s.is_empty()))
                });

            if !has_inline_change {
                return (
                    CoreResult::question(ASK_EDIT_CHANGES),
                    ConversationState::AwaitingEditChanges {
                        task_id: id,
                        awaiting_description: false,
                    },
                );
            }
        }
    }

    (
        CoreResult::finalize(intent, normalize_payload(&ctx.slots)),
        ConversationState::Idle,
    )
}
