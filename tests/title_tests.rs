use tasktalk::Intent;
use tasktalk::slots::title::extract_title;

#[test]
fn test_create_task_titles() {
    let result = extract_title("add buy milk tomorrow", Some(Intent::CreateTask));
    assert_eq!(result[0], "buy milk");

    let result = extract_title("create task study english at 10", Some(Intent::CreateTask));
    assert!(result[0].contains("study english"));

    let result = extract_title("schedule meeting today", Some(Intent::CreateTask));
    assert!(result[0].contains("meeting"));
}

#[test]
fn test_list_tasks_never_has_a_title() {
    assert!(extract_title("list tasks", Some(Intent::ListTasks)).is_empty());
    assert!(extract_title("show my tasks", Some(Intent::ListTasks)).is_empty());
}

#[test]
fn test_delete_by_name() {
    let result = extract_title("delete buy milk", Some(Intent::DeleteTask));
    assert!(result[0].contains("buy milk"));
}

#[test]
fn test_pure_date_or_time_is_not_a_title() {
    assert!(extract_title("2026-01-15", Some(Intent::CreateTask)).is_empty());
    assert!(extract_title("10:30", Some(Intent::CreateTask)).is_empty());
    assert!(extract_title("tomorrow", Some(Intent::CreateTask)).is_empty());
}

#[test]
fn test_only_keywords_leaves_nothing() {
    let result = extract_title("add task for today", Some(Intent::CreateTask));
    assert!(result.is_empty());
}

#[test]
fn test_hash_id_is_stripped() {
    let result = extract_title("edit #7 buy bread", Some(Intent::EditTask));
    assert!(result[0].contains("buy bread"));
    assert!(!result[0].contains('7'));
}
