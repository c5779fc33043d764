use tasktalk::slots::description::{
    extract_description, is_description_keyword_only, remove_description_from_text,
};

#[test]
fn test_colon_form() {
    assert_eq!(
        extract_description("add meeting description: quarterly planning review"),
        Some("quarterly planning review".to_string())
    );
    assert_eq!(
        extract_description("add meeting notes: bring the slides"),
        Some("bring the slides".to_string())
    );
}

#[test]
fn test_colon_form_stops_at_date_keyword() {
    assert_eq!(
        extract_description("add meeting desc: discuss budget tomorrow at 10"),
        Some("discuss budget".to_string())
    );
}

#[test]
fn test_leading_form_takes_everything() {
    assert_eq!(
        extract_description("description call the landlord about the lease"),
        Some("call the landlord about the lease".to_string())
    );
}

#[test]
fn test_with_form() {
    assert_eq!(
        extract_description("add dentist with description bring insurance card"),
        Some("bring insurance card".to_string())
    );
}

#[test]
fn test_no_description() {
    assert_eq!(extract_description("add buy milk tomorrow"), None);
}

#[test]
fn test_keyword_only_detection() {
    assert!(is_description_keyword_only("description"));
    assert!(is_description_keyword_only("  Notes  "));
    assert!(!is_description_keyword_only("description: something"));
    assert!(!is_description_keyword_only("buy milk"));
}

#[test]
fn test_removal_keeps_the_rest_for_title_extraction() {
    let cleaned = remove_description_from_text("add meeting description: planning session tomorrow");
    assert!(!cleaned.contains("planning session"));
    assert!(cleaned.contains("add meeting"));
    assert!(cleaned.contains("tomorrow"));
}

#[test]
fn test_removal_of_trailing_bare_keyword() {
    assert_eq!(remove_description_from_text("add meeting description"), "add meeting");
}
