//! Cross-turn conversation state.
//!
//! The state is a tagged union with exactly one variant per conversational
//! mode, so "exactly one mode is active" holds by construction instead of
//! by convention over a bag of optional fields. The interpreter never
//! mutates state in place: it receives the current state and returns the
//! next one. Resetting always yields [`ConversationState::Idle`].

use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::payload::Payload;
use crate::slots::SlotBag;

/// One task offered for a disambiguating delete choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCandidate {
    pub id: i64,
    pub title: String,
    /// RFC 3339 due timestamp, used for earliest/latest resolution.
    pub due_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ConversationState {
    /// No dialogue in flight.
    #[default]
    Idle,

    /// A command is complete except for an optional time slot; the user may
    /// still supply one or decline. Entered by the executor after a
    /// create flow, consumed here.
    AwaitingOptionalTime { intent: Intent, payload: Payload },

    /// The destructive delete-all intent is gated behind explicit yes/no.
    AwaitingDeleteAllConfirmation,

    /// An edit target is known but not what should change about it. While
    /// `awaiting_description` is set, the next turn's entire raw input is
    /// captured verbatim as the description.
    AwaitingEditChanges {
        task_id: i64,
        awaiting_description: bool,
    },

    /// A delete matched several tasks; waiting for the user to pick one by
    /// id, or by earliest/latest due date. Entered by the executor.
    PendingDelete { candidates: Vec<DeleteCandidate> },

    /// A fully-resolved command awaiting plain yes/no confirmation, e.g.
    /// the duplicate-task flow. Entered by the executor.
    PendingCommand { intent: Intent, payload: Payload },

    /// Mid-dialogue slot collection: `slot` is the single required slot
    /// currently being asked for, `slots` the bag accumulated so far.
    AwaitingSlot {
        intent: Intent,
        slot: String,
        slots: SlotBag,
    },
}

impl ConversationState {
    /// Fresh conversation state.
    #[must_use]
    pub fn initial() -> Self {
        ConversationState::Idle
    }
}
