use tasktalk::slots::priority::{Priority, extract_priority, priority_emoji};

#[test]
fn test_urgent_keywords() {
    assert_eq!(extract_priority("pay taxes asap"), Some(Priority::Urgent));
    assert_eq!(extract_priority("this is critical"), Some(Priority::Urgent));
    assert_eq!(extract_priority("URGENT call mom"), Some(Priority::Urgent));
}

#[test]
fn test_high_keywords() {
    assert_eq!(extract_priority("important meeting"), Some(Priority::High));
    assert_eq!(extract_priority("high priority report"), Some(Priority::High));
}

#[test]
fn test_low_and_normal() {
    assert_eq!(extract_priority("clean garage whenever"), Some(Priority::Low));
    assert_eq!(extract_priority("low priority"), Some(Priority::Low));
    assert_eq!(extract_priority("normal priority task"), Some(Priority::Normal));
}

#[test]
fn test_urgent_wins_over_other_labels() {
    assert_eq!(
        extract_priority("urgent but low priority"),
        Some(Priority::Urgent)
    );

    // "not urgent" still contains "urgent", which takes precedence
    assert_eq!(extract_priority("not urgent"), Some(Priority::Urgent));
}

#[test]
fn test_no_priority() {
    assert_eq!(extract_priority("buy milk tomorrow"), None);
}

#[test]
fn test_emojis() {
    assert_eq!(priority_emoji(Priority::Urgent), "🔴");
    assert_eq!(priority_emoji(Priority::Low), "⚪");
}
