//! Plain-text formatting for banners, lists, and status output.

use crate::config::DisplayConfig;
use crate::constants::{MSG_DATA_LOSS, MSG_EMPTY_LIST, RULE_WIDTH};
use crate::model::Todo;

/// Section header between separator rules, title centered.
pub fn header(text: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{}\n{rule}", center(text))
}

/// Start-up banner with the in-memory warning.
pub fn welcome_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n{}\n{}\n{rule}\n\n{}",
        center("TERMTASK"),
        center("In-Memory Todo Manager"),
        MSG_DATA_LOSS
    )
}

/// Exit banner with the data-loss reminder.
pub fn goodbye_banner() -> String {
    format!(
        "{}\n\nAll todos from this session have been discarded.\nThank you for using termtask!",
        header("GOODBYE")
    )
}

/// Renders todos as one line per entry plus an indented created timestamp,
/// or the empty-list message when there are none.
///
/// Line shape: `[id] [X] title | category | priority`, with the title
/// padded or truncated to the configured column width and an absent
/// category shown as `none`.
pub fn todo_list(todos: &[Todo], display: &DisplayConfig) -> String {
    if todos.is_empty() {
        return MSG_EMPTY_LIST.to_string();
    }

    let mut lines = Vec::new();
    for todo in todos {
        let checkbox = if todo.completed { "[X]" } else { "[ ]" };
        let title = truncate(&todo.title, display.title_width);
        let category = todo.category.as_deref().unwrap_or("none");
        lines.push(format!(
            "[{}] {} {:<width$} | {:<10} | {}",
            todo.id,
            checkbox,
            title,
            category,
            todo.priority,
            width = display.title_width,
        ));
        lines.push(format!(
            "    Created: {}",
            todo.created_at
                .with_timezone(&chrono::Local)
                .format(&display.datetime_format)
        ));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// `Status: N todos | C completed | P pending`, or the no-todos variant.
pub fn status_line(total: usize, completed: usize) -> String {
    if total == 0 {
        return "Status: No todos yet".to_string();
    }
    let pending = total - completed;
    format!("Status: {total} todos | {completed} completed | {pending} pending")
}

/// Confirmation line with a check mark prefix.
pub fn success_line(message: &str) -> String {
    format!("✓ {message}")
}

/// Failure line with a cross prefix.
pub fn error_line(message: &str) -> String {
    format!("✗ Error: {message}")
}

fn center(text: &str) -> String {
    let padding = RULE_WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// Truncates to `width` characters, ending in `...` when shortened.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{keep}...")
}
