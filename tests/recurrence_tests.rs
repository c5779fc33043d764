use tasktalk::slots::recurrence::{
    RecurrencePattern, extract_recurrence, recurrence_to_string,
};

#[test]
fn test_daily_forms() {
    assert_eq!(
        extract_recurrence("water plants every day"),
        Some(RecurrencePattern::Daily { interval: None })
    );
    assert_eq!(
        extract_recurrence("standup daily at 9"),
        Some(RecurrencePattern::Daily { interval: None })
    );
    assert_eq!(
        extract_recurrence("backup every 3 days"),
        Some(RecurrencePattern::Daily { interval: Some(3) })
    );
}

#[test]
fn test_weekly_and_longer() {
    assert_eq!(
        extract_recurrence("review weekly"),
        Some(RecurrencePattern::Weekly { interval: None })
    );
    assert_eq!(
        extract_recurrence("every 2 weeks"),
        Some(RecurrencePattern::Weekly { interval: Some(2) })
    );
    assert_eq!(extract_recurrence("pay rent monthly"), Some(RecurrencePattern::Monthly));
    assert_eq!(extract_recurrence("renew annually"), Some(RecurrencePattern::Yearly));
}

#[test]
fn test_specific_weekdays() {
    assert_eq!(
        extract_recurrence("gym every monday"),
        Some(RecurrencePattern::Weekdays {
            days: vec!["monday"]
        })
    );
    assert_eq!(
        extract_recurrence("gym every monday and friday"),
        Some(RecurrencePattern::Weekdays {
            days: vec!["monday", "friday"]
        })
    );
}

#[test]
fn test_weekday_shorthands() {
    assert_eq!(
        extract_recurrence("commute weekdays"),
        Some(RecurrencePattern::Weekdays {
            days: vec!["monday", "tuesday", "wednesday", "thursday", "friday"]
        })
    );
    assert_eq!(
        extract_recurrence("hike every weekend"),
        Some(RecurrencePattern::Weekdays {
            days: vec!["saturday", "sunday"]
        })
    );
}

#[test]
fn test_no_recurrence() {
    assert_eq!(extract_recurrence("buy milk tomorrow"), None);
}

#[test]
fn test_canonical_strings() {
    assert_eq!(
        recurrence_to_string(&RecurrencePattern::Daily { interval: None }),
        "daily"
    );
    assert_eq!(
        recurrence_to_string(&RecurrencePattern::Daily { interval: Some(1) }),
        "daily"
    );
    assert_eq!(
        recurrence_to_string(&RecurrencePattern::Weekly { interval: Some(2) }),
        "every 2 weeks"
    );
    assert_eq!(
        recurrence_to_string(&RecurrencePattern::Weekdays {
            days: vec!["monday", "friday"]
        }),
        "monday,friday"
    );
}

#[test]
fn test_canonical_string_reparses_to_same_pattern() {
    let pattern = RecurrencePattern::Daily { interval: Some(3) };
    let canonical = recurrence_to_string(&pattern);
    assert_eq!(extract_recurrence(&canonical), Some(pattern));
}
