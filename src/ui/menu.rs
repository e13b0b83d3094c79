//! Main menu rendering and the commands it offers.

use crate::constants::RULE_WIDTH;
use crate::ui::format;

/// Prompt shown under the menu.
pub const CHOICE_PROMPT: &str = "\nEnter your choice (1-8): ";

/// Commands reachable from the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    MarkComplete,
    Update,
    Delete,
    FilterCategory,
    FilterPriority,
    Exit,
}

impl MenuChoice {
    /// Number of menu entries.
    pub const COUNT: u32 = 8;

    /// Maps a 1-based menu number to its command.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::MarkComplete),
            4 => Some(Self::Update),
            5 => Some(Self::Delete),
            6 => Some(Self::FilterCategory),
            7 => Some(Self::FilterPriority),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Renders the main menu block.
pub fn main_menu() -> String {
    let mut out = String::new();
    out.push_str(&format::header("TODO MANAGER"));
    out.push_str("\n\nAvailable commands:\n");
    out.push_str("  1. Add new todo\n");
    out.push_str("  2. List all todos\n");
    out.push_str("  3. Mark todo complete\n");
    out.push_str("  4. Update todo\n");
    out.push_str("  5. Delete todo\n");
    out.push_str("  6. Filter by category\n");
    out.push_str("  7. Filter by priority\n");
    out.push_str("  8. Exit\n\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out
}
