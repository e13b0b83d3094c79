//! Constants used throughout the application
//!
//! Centralizes domain limits, display layout bounds, default file names,
//! and shared user-facing messages so call sites stay consistent.

// Domain limits
/// Maximum title length in characters, measured after trimming.
pub const TITLE_MAX_CHARS: usize = 500;
/// Maximum category length in characters, measured after trimming.
pub const CATEGORY_MAX_CHARS: usize = 50;

// List view layout
/// Narrowest allowed title column.
pub const TITLE_WIDTH_MIN: usize = 10;
/// Widest allowed title column.
pub const TITLE_WIDTH_MAX: usize = 120;
/// Default title column width.
pub const TITLE_WIDTH_DEFAULT: usize = 40;
/// Width of the separator rules around headers and the status footer.
pub const RULE_WIDTH: usize = 64;
/// Default strftime format for created timestamps in the list view.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// File locations
/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "termtask.toml";
/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "termtask";
/// Default log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "termtask.log";
/// Default event log file name inside the data directory.
pub const EVENTS_FILE_NAME: &str = "events.jsonl";

// Shared messages
pub const MSG_EMPTY_LIST: &str = "No todos yet. Add your first task!";
pub const MSG_DATA_LOSS: &str = "NOTE: Todos live in memory only; everything is discarded on exit.";
pub const MSG_PRESS_ENTER: &str = "Press ENTER to continue...";
