//! termtask: an in-memory todo manager with an interactive terminal menu
//!
//! The library half of the crate holds everything the binary wires
//! together: the validated [`model::Todo`] record, the in-memory
//! [`store::TodoStore`], the [`service::TodoService`] that publishes
//! best-effort lifecycle events through an injected [`events::TodoEvents`]
//! sink, and the line-oriented menu interface in [`ui`].
//!
//! Nothing is persisted. A session starts empty and every todo is
//! discarded on exit; the only durable outputs are the optional log and
//! event files.

pub mod config;
pub mod constants;
pub mod events;
pub mod logger;
pub mod model;
pub mod service;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use events::{JsonlEvents, NoopEvents, TodoEvents};
pub use model::{Priority, Todo, TodoError, TodoId};
pub use service::TodoService;
pub use store::{CategoryPatch, CreateTodoArgs, TodoStore, UpdateTodoArgs};
