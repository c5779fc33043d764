use tasktalk::intent::{Intent, detect_intent, is_likely_command};

#[test]
fn test_single_intents() {
    assert_eq!(detect_intent("add buy milk").primary, Some(Intent::CreateTask));
    assert_eq!(detect_intent("show my tasks").primary, Some(Intent::ListTasks));
    assert_eq!(detect_intent("edit #7").primary, Some(Intent::EditTask));
    assert_eq!(detect_intent("remove the meeting").primary, Some(Intent::DeleteTask));
    assert_eq!(detect_intent("undo").primary, Some(Intent::UndoAction));
}

#[test]
fn test_no_intent() {
    let detected = detect_intent("how is the weather");
    assert_eq!(detected.primary, None);
    assert_eq!(detected.secondary, None);
}

#[test]
fn test_keywords_match_whole_words_only() {
    // "additional" must not trigger "add", "removed" must not trigger "remove"
    assert_eq!(detect_intent("additional context").primary, None);
    assert_eq!(detect_intent("seems fine").primary, None);
}

#[test]
fn test_delete_all_beats_single_delete() {
    // "delete all tasks" hits both delete keyword lists; bulk wins
    let detected = detect_intent("delete all tasks");
    assert_eq!(detected.primary, Some(Intent::DeleteAllTasks));
    assert_eq!(detected.secondary, None);

    assert_eq!(
        detect_intent("remove everything please").primary,
        Some(Intent::DeleteAllTasks)
    );
}

#[test]
fn test_create_and_list_chaining() {
    let detected = detect_intent("add buy milk and show my tasks");
    assert_eq!(detected.primary, Some(Intent::CreateTask));
    assert_eq!(detected.secondary, Some(Intent::ListTasks));
}

#[test]
fn test_conflicting_intents_resolve_to_none() {
    // Create plus delete is not a sanctioned combination
    assert_eq!(detect_intent("add and delete the task").primary, None);
}

#[test]
fn test_is_likely_command() {
    assert!(is_likely_command("create a task"));
    assert!(!is_likely_command("hello there"));
}
