use serde_json::json;
use tasktalk::{ConversationState, CoreResult, DeleteCandidate, Intent, interpret};

fn question(result: &CoreResult) -> &str {
    match result {
        CoreResult::Question { message } => message,
        other => panic!("expected a question, got {other:?}"),
    }
}

fn final_command(result: CoreResult) -> (Intent, tasktalk::Payload) {
    match result {
        CoreResult::Final { intent, payload } => (intent, payload),
        other => panic!("expected a final command, got {other:?}"),
    }
}

#[test]
fn test_complete_create_finalizes_immediately() {
    let (result, state) = interpret("add study english tomorrow at 10am", ConversationState::initial());

    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::CreateTask);
    assert_eq!(payload["title"], "study english");
    assert_eq!(payload["date"], "tomorrow");
    assert_eq!(payload["time"], "10am");
    assert_eq!(payload["filter"], "ALL");
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_create_collects_missing_slots_across_turns() {
    // First turn: title present, date missing
    let (result, state) = interpret("add buy milk", ConversationState::initial());
    assert_eq!(question(&result), "Please provide date.");
    match &state {
        ConversationState::AwaitingSlot { intent, slot, slots } => {
            assert_eq!(*intent, Intent::CreateTask);
            assert_eq!(slot, "date");
            assert_eq!(slots["title"][0].as_str(), Some("buy milk"));
        }
        other => panic!("expected slot collection, got {other:?}"),
    }

    // Second turn: date supplied, time still missing
    let (result, state) = interpret("tomorrow", state);
    assert_eq!(question(&result), "Please provide time.");
    assert!(matches!(
        &state,
        ConversationState::AwaitingSlot { slot, .. } if slot == "time"
    ));

    // Third turn: time supplied, command completes
    let (result, state) = interpret("10am", state);
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::CreateTask);
    assert_eq!(payload["title"], "buy milk");
    assert_eq!(payload["date"], "tomorrow");
    assert_eq!(payload["time"], "10am");
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_slot_collection_cancel() {
    let (_, state) = interpret("add buy milk", ConversationState::initial());
    let (result, state) = interpret("cancel", state);
    assert_eq!(
        result,
        CoreResult::Info {
            message: "Action cancelled.".into()
        }
    );
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_delete_all_requires_confirmation() {
    let (result, state) = interpret("delete all tasks", ConversationState::initial());
    assert_eq!(
        question(&result),
        "Are you sure you want to delete ALL tasks? This cannot be undone. (yes/no)"
    );
    assert_eq!(state, ConversationState::AwaitingDeleteAllConfirmation);

    // Anything but yes/no re-prompts without losing the gate
    let (result, state) = interpret("maybe", state);
    assert_eq!(question(&result), "Please answer yes or no.");

    let (result, state) = interpret("yes", state);
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::DeleteAllTasks);
    assert!(payload.is_empty());
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_delete_all_declined() {
    let (_, state) = interpret("delete everything", ConversationState::initial());
    let (result, state) = interpret("no", state);
    assert_eq!(
        result,
        CoreResult::Info {
            message: "Cancelled. No tasks were deleted.".into()
        }
    );
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_smalltalk_preempts_intent_keywords() {
    let (result, state) = interpret("hello", ConversationState::initial());
    assert!(matches!(result, CoreResult::Info { .. }));
    assert_eq!(state, ConversationState::initial());

    // "what can you do" contains no executable command despite "can you"
    let (result, _) = interpret("what can you do", ConversationState::initial());
    assert!(matches!(result, CoreResult::Info { .. }));
}

#[test]
fn test_unparseable_input() {
    let (result, state) = interpret("purple elephant parade", ConversationState::initial());
    assert_eq!(
        result,
        CoreResult::Info {
            message: "Hmm, I'm not sure what you mean. Try something like 'create a task', \
                      'show my tasks', or 'delete task #1'."
                .into()
        }
    );
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_edit_dialogue_with_description() {
    let (result, state) = interpret("edit #7", ConversationState::initial());
    assert_eq!(
        question(&result),
        "What would you like to change? (new title, date, time, priority, or description)"
    );
    assert_eq!(
        state,
        ConversationState::AwaitingEditChanges {
            task_id: 7,
            awaiting_description: false,
        }
    );

    let (result, state) = interpret("description", state);
    assert_eq!(question(&result), "What description would you like to add?");
    assert_eq!(
        state,
        ConversationState::AwaitingEditChanges {
            task_id: 7,
            awaiting_description: true,
        }
    );

    // The whole next input is the description, case preserved
    let (result, state) = interpret("Bring the laptop", state);
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::EditTask);
    assert_eq!(payload["id"], 7);
    assert_eq!(payload["description"], "Bring the laptop");
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_edit_dialogue_new_title_preserves_case() {
    let (_, state) = interpret("edit #12", ConversationState::initial());

    let (result, state) = interpret("change it to Buy Groceries", state);
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::EditTask);
    assert_eq!(payload["id"], 12);
    assert_eq!(payload["title"], "Buy Groceries");
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_edit_dialogue_reasks_when_nothing_extracted() {
    let (_, state) = interpret("edit #12", ConversationState::initial());
    // Anything two characters or longer reads as a new title, so only a
    // fragment this short falls through to the re-ask
    let (result, new_state) = interpret("x", state.clone());
    assert_eq!(
        question(&result),
        "What would you like to change? (new title, date, time, priority, or description)"
    );
    assert_eq!(new_state, state);
}

#[test]
fn test_edit_with_inline_change_finalizes() {
    let (result, state) = interpret("edit #22 to buy groceries", ConversationState::initial());
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::EditTask);
    assert_eq!(payload["id"], 22);
    assert_eq!(payload["title"], "buy groceries");
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_edit_cancel() {
    let (_, state) = interpret("edit #3", ConversationState::initial());
    let (result, state) = interpret("cancel", state);
    assert_eq!(
        result,
        CoreResult::Info {
            message: "Edit cancelled.".into()
        }
    );
    assert_eq!(state, ConversationState::initial());
}

fn delete_candidates() -> Vec<DeleteCandidate> {
    vec![
        DeleteCandidate {
            id: 4,
            title: "dentist".into(),
            due_at: "2026-09-01T09:00:00Z".into(),
        },
        DeleteCandidate {
            id: 9,
            title: "dentist".into(),
            due_at: "2026-09-15T09:00:00Z".into(),
        },
    ]
}

#[test]
fn test_pending_delete_by_id() {
    let state = ConversationState::PendingDelete {
        candidates: delete_candidates(),
    };
    let (result, state) = interpret("#9", state);
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::DeleteTask);
    assert_eq!(payload["id"], 9);
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_pending_delete_earliest_and_latest() {
    let state = ConversationState::PendingDelete {
        candidates: delete_candidates(),
    };
    let (result, _) = interpret("earliest", state);
    let (_, payload) = final_command(result);
    assert_eq!(payload["id"], 4);

    let state = ConversationState::PendingDelete {
        candidates: delete_candidates(),
    };
    let (result, _) = interpret("the latest one", state);
    let (_, payload) = final_command(result);
    assert_eq!(payload["id"], 9);
}

#[test]
fn test_pending_delete_unknown_id_reasks() {
    let state = ConversationState::PendingDelete {
        candidates: delete_candidates(),
    };
    let (result, new_state) = interpret("7", state.clone());
    assert_eq!(question(&result), "Please choose by ID (e.g. 4), earliest, or latest.");
    assert_eq!(new_state, state);
}

#[test]
fn test_pending_command_confirmation() {
    let mut payload = tasktalk::Payload::new();
    payload.insert("title".into(), json!("buy milk"));
    let state = ConversationState::PendingCommand {
        intent: Intent::CreateTask,
        payload: payload.clone(),
    };

    let (result, new_state) = interpret("yes", state.clone());
    let (intent, got) = final_command(result);
    assert_eq!(intent, Intent::CreateTask);
    assert_eq!(got, payload);
    assert_eq!(new_state, ConversationState::initial());

    let (result, new_state) = interpret("no", state);
    assert_eq!(
        result,
        CoreResult::Info {
            message: "Action cancelled.".into()
        }
    );
    assert_eq!(new_state, ConversationState::initial());
}

#[test]
fn test_optional_time_declined_and_supplied() {
    let mut payload = tasktalk::Payload::new();
    payload.insert("title".into(), json!("buy milk"));
    payload.insert("date".into(), json!("tomorrow"));
    let state = ConversationState::AwaitingOptionalTime {
        intent: Intent::CreateTask,
        payload: payload.clone(),
    };

    let (result, new_state) = interpret("no", state.clone());
    let (intent, got) = final_command(result);
    assert_eq!(intent, Intent::CreateTask);
    assert!(!got.contains_key("time"));
    assert_eq!(new_state, ConversationState::initial());

    let (result, new_state) = interpret("at 10:30", state.clone());
    let (_, got) = final_command(result);
    assert_eq!(got["time"], "10:30");
    assert_eq!(new_state, ConversationState::initial());

    // Garbage re-asks without dropping the pending command
    let (result, new_state) = interpret("whenever you like", state.clone());
    assert_eq!(question(&result), "Please provide a valid time or type 'no'.");
    assert_eq!(new_state, state);
}

#[test]
fn test_delete_by_title() {
    let (result, state) = interpret("delete buy milk", ConversationState::initial());
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::DeleteTask);
    assert_eq!(payload["title"], "buy milk");
    assert_eq!(state, ConversationState::initial());
}

#[test]
fn test_list_with_filter() {
    let (result, _) = interpret("show my pending tasks", ConversationState::initial());
    let (intent, payload) = final_command(result);
    assert_eq!(intent, Intent::ListTasks);
    assert_eq!(payload["filter"], "PENDING");

    let (result, _) = interpret("show my tasks", ConversationState::initial());
    let (_, payload) = final_command(result);
    assert_eq!(payload["filter"], "ALL");
}

#[test]
fn test_undo() {
    let (result, state) = interpret("undo that", ConversationState::initial());
    let (intent, _) = final_command(result);
    assert_eq!(intent, Intent::UndoAction);
    assert_eq!(state, ConversationState::initial());
}
