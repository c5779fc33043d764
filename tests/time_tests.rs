use tasktalk::slots::time::extract_times;

#[test]
fn test_simple_hour() {
    assert!(extract_times("at 10").contains(&"10".to_string()));
    assert!(extract_times("9").contains(&"9".to_string()));
}

#[test]
fn test_hour_minute() {
    assert!(extract_times("at 10:30").contains(&"10:30".to_string()));
    assert!(extract_times("09:00").contains(&"09:00".to_string()));
}

#[test]
fn test_am_pm() {
    assert!(extract_times("at 10am").contains(&"10am".to_string()));
    assert!(extract_times("3pm").contains(&"3pm".to_string()));

    // Space before the meridiem still belongs to the same time
    let result = extract_times("10 am");
    assert!(result.iter().any(|t| t.contains("10")));
}

#[test]
fn test_24h_suffix() {
    assert!(extract_times("22h").contains(&"22h".to_string()));
    assert!(extract_times("9h").contains(&"9h".to_string()));
}

#[test]
fn test_no_time() {
    assert!(extract_times("buy milk tomorrow").is_empty());
}

#[test]
fn test_iso_date_is_not_a_time() {
    let result = extract_times("2026-01-15");
    assert!(!result.contains(&"2026".to_string()));
}

#[test]
fn test_bare_large_number_is_not_a_time() {
    // Hours above 24 without context are ids or quantities
    assert!(extract_times("task 42").is_empty());
}
