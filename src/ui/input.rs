//! Parsing helpers for interactive input.
//!
//! All helpers take the raw line and return either the parsed value or a
//! user-facing message; the caller decides how to display it.

use crate::model::TodoId;

/// Parses a 1-based menu choice within `max` entries.
pub fn parse_menu_choice(raw: &str, max: u32) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("Please enter a number between 1 and {max}"));
    }
    match trimmed.parse::<u32>() {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        Ok(_) => Err(format!("Invalid choice. Please enter 1-{max}")),
        Err(_) => Err(format!(
            "Invalid input. Please enter a number between 1 and {max}"
        )),
    }
}

/// Parses a todo id: a positive integer.
pub fn parse_todo_id(raw: &str) -> Result<TodoId, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Please enter a todo ID".to_string());
    }
    // Parse signed first so zero and negatives get the clearer message.
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id as TodoId),
        Ok(_) => Err("Todo ID must be a positive number".to_string()),
        Err(_) => Err("Invalid input: please enter a valid number".to_string()),
    }
}

/// True for an affirmative answer: `y` or `yes`, any case. Anything else,
/// including an empty line, is a no.
pub fn is_confirmation(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "y" | "yes")
}
