use chrono::Utc;
use termtask::model::{Priority, Todo, TodoError};

fn build(title: &str, category: Option<&str>, priority: &str) -> Result<Todo, TodoError> {
    Todo::new(1, title, false, category, priority, Utc::now())
}

#[test]
fn test_create_todo_with_valid_title() {
    let todo = build("Buy groceries", None, "medium").unwrap();
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy groceries");
    assert!(!todo.completed);
    assert_eq!(todo.category, None);
    assert_eq!(todo.priority, Priority::Medium);
}

#[test]
fn test_title_is_trimmed() {
    let todo = build("  Buy milk  ", None, "low").unwrap();
    assert_eq!(todo.title, "Buy milk");
}

#[test]
fn test_empty_title_rejected() {
    let err = build("", None, "medium").unwrap_err();
    assert_eq!(err, TodoError::InvalidTitle("cannot be empty".to_string()));
    assert_eq!(err.to_string(), "Todo title cannot be empty");
}

#[test]
fn test_whitespace_only_title_rejected() {
    let err = build("   \t  ", None, "medium").unwrap_err();
    assert_eq!(err.to_string(), "Todo title cannot be empty");
}

#[test]
fn test_title_at_length_limit_accepted() {
    let title = "a".repeat(500);
    let todo = build(&title, None, "medium").unwrap();
    assert_eq!(todo.title.chars().count(), 500);
}

#[test]
fn test_title_over_length_limit_rejected() {
    let title = "a".repeat(501);
    let err = build(&title, None, "medium").unwrap_err();
    assert_eq!(err.to_string(), "Todo title cannot exceed 500 characters");
}

#[test]
fn test_title_length_counts_characters_not_bytes() {
    // 500 two-byte characters; fine by character count, over by bytes
    let title = "é".repeat(500);
    assert!(title.len() > 500);
    let todo = build(&title, None, "medium").unwrap();
    assert_eq!(todo.title.chars().count(), 500);
}

#[test]
fn test_trim_happens_before_length_check() {
    // 500 characters of content padded with whitespace still fits
    let title = format!("  {}  ", "a".repeat(500));
    let todo = build(&title, None, "medium").unwrap();
    assert_eq!(todo.title.chars().count(), 500);
}

#[test]
fn test_priority_parsed_case_insensitively() {
    assert_eq!(build("x", None, "HIGH").unwrap().priority, Priority::High);
    assert_eq!(build("x", None, "High").unwrap().priority, Priority::High);
    assert_eq!(build("x", None, "mEdIuM").unwrap().priority, Priority::Medium);
    assert_eq!(build("x", None, "low").unwrap().priority, Priority::Low);
}

#[test]
fn test_unknown_priority_rejected_with_original_text() {
    let err = build("x", None, "URGENT").unwrap_err();
    assert_eq!(err, TodoError::InvalidPriority("URGENT".to_string()));
    assert_eq!(
        err.to_string(),
        "Priority must be high, medium, or low (got 'URGENT')"
    );
}

#[test]
fn test_priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_display_is_lowercase() {
    assert_eq!(Priority::High.to_string(), "high");
    assert_eq!(Priority::Medium.as_str(), "medium");
    assert_eq!(Priority::Low.as_str(), "low");
}

#[test]
fn test_priority_from_str_round_trips_canonical_names() {
    for p in [Priority::High, Priority::Medium, Priority::Low] {
        assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
    }
}

#[test]
fn test_category_is_trimmed_and_lowercased() {
    let todo = build("x", Some("  Work  "), "medium").unwrap();
    assert_eq!(todo.category.as_deref(), Some("work"));
}

#[test]
fn test_empty_category_becomes_none() {
    let todo = build("x", Some(""), "medium").unwrap();
    assert_eq!(todo.category, None);

    let todo = build("x", Some("   "), "medium").unwrap();
    assert_eq!(todo.category, None);
}

#[test]
fn test_category_at_length_limit_accepted() {
    let category = "C".repeat(50);
    let todo = build("x", Some(&category), "medium").unwrap();
    assert_eq!(todo.category.as_deref(), Some("c".repeat(50).as_str()));
}

#[test]
fn test_category_over_length_limit_rejected() {
    let category = "c".repeat(51);
    let err = build("x", Some(&category), "medium").unwrap_err();
    assert_eq!(err, TodoError::InvalidCategory(50));
    assert_eq!(err.to_string(), "Category cannot exceed 50 characters");
}

#[test]
fn test_category_length_checked_after_trim() {
    // 50 characters of content plus surrounding whitespace is fine
    let category = format!(" {} ", "c".repeat(50));
    let todo = build("x", Some(&category), "medium").unwrap();
    assert_eq!(todo.category.as_deref(), Some("c".repeat(50).as_str()));
}

#[test]
fn test_todo_serializes_with_lowercase_priority() {
    let todo = build("Write report", Some("Work"), "HIGH").unwrap();
    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["priority"], "high");
    assert_eq!(json["category"], "work");
    assert_eq!(json["completed"], false);
}
