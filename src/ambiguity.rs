//! Slot-completeness and ambiguity classification.

use crate::intent::Intent;
use crate::slots::{SlotBag, SlotValue};

/// Required slots per intent, in the order they are asked for.
///
/// Delete works with either an id or a title and is validated downstream;
/// delete-all only ever needs its confirmation gate.
#[must_use]
pub fn required_slots(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::CreateTask => &["title", "date", "time"],
        Intent::EditTask => &["id"],
        Intent::ListTasks
        | Intent::DeleteTask
        | Intent::DeleteAllTasks
        | Intent::UndoAction
        | Intent::RawInput => &[],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AmbiguityResult {
    Ok,
    MissingSlot {
        slot: &'static str,
    },
    AmbiguousSlot {
        slot: String,
        values: Vec<SlotValue>,
    },
}

/// Classify the extracted slots for an intent.
///
/// Missing-slot detection runs first, over the required slots in declared
/// order; only then is every present slot (required or not) checked for
/// multiple candidates.
#[must_use]
pub fn check_ambiguity(intent: Intent, slots: &SlotBag) -> AmbiguityResult {
    for slot in required_slots(intent) {
        if slots.get(*slot).is_none_or(Vec::is_empty) {
            return AmbiguityResult::MissingSlot { slot: *slot };
        }
    }


    for (slot, values) in slots {
        if values.len() > 1 {
            return AmbiguityResult::AmbiguousSlot {
                slot: slot.clone(),
                values: values.clone(),
            };
        }
    }

    AmbiguityResult::Ok
}
