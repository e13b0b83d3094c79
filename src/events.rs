//! Task lifecycle event sinks
//!
//! Every mutation of the store produces one event: created, updated, or
//! deleted. The sink is injected into the service at startup, and emission
//! is best-effort by contract: implementations report failures through the
//! returned `Result`, the service logs them and carries on, and the primary
//! operation never fails because of the sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::model::{Todo, TodoId};

/// Sink for task lifecycle events.
///
/// Implementations must not panic when the sink is unavailable; they return
/// an error and leave the reaction to the caller.
pub trait TodoEvents {
    /// A todo was created.
    fn task_created(&self, todo: &Todo) -> Result<()>;

    /// A todo was changed, either a field update or a completion toggle.
    fn task_updated(&self, before: &Todo, after: &Todo) -> Result<()>;

    /// A todo was permanently removed.
    fn task_deleted(&self, id: TodoId) -> Result<()>;
}

/// Sink that discards every event.
///
/// The default when event emission is disabled, and the stand-in for tests
/// that do not care about events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl TodoEvents for NoopEvents {
    fn task_created(&self, _todo: &Todo) -> Result<()> {
        Ok(())
    }

    fn task_updated(&self, _before: &Todo, _after: &Todo) -> Result<()> {
        Ok(())
    }

    fn task_deleted(&self, _id: TodoId) -> Result<()> {
        Ok(())
    }
}

/// Sink that appends one JSON object per event to a local file.
///
/// Record shape: `{"event_type", "task_id", "timestamp", "data"}`, with
/// `data` carrying the title on create, the changed fields on update, and
/// nothing on delete.
#[derive(Debug, Clone)]
pub struct JsonlEvents {
    path: PathBuf,
}

impl JsonlEvents {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, event_type: &str, task_id: TodoId, data: Value) -> Result<()> {
        let record = json!({
            "event_type": event_type,
            "task_id": task_id,
            "timestamp": Utc::now().to_rfc3339(),
            "data": data,
        });

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create event log directory: {}", parent.display())
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open event log: {}", self.path.display()))?;
        writeln!(file, "{record}")
            .with_context(|| format!("Failed to append to event log: {}", self.path.display()))?;
        Ok(())
    }
}

impl TodoEvents for JsonlEvents {
    fn task_created(&self, todo: &Todo) -> Result<()> {
        self.append("task.created", todo.id, json!({ "title": todo.title }))
    }

    fn task_updated(&self, before: &Todo, after: &Todo) -> Result<()> {
        let changes = changed_fields(before, after);
        self.append("task.updated", after.id, json!({ "changes": changes }))
    }

    fn task_deleted(&self, id: TodoId) -> Result<()> {
        self.append("task.deleted", id, json!({}))
    }
}

/// Collects the fields that differ between two revisions of a todo, keyed
/// by field name with the new value.
fn changed_fields(before: &Todo, after: &Todo) -> Map<String, Value> {
    let mut changes = Map::new();
    if before.title != after.title {
        changes.insert("title".to_string(), json!(after.title));
    }
    if before.category != after.category {
        changes.insert("category".to_string(), json!(after.category));
    }
    if before.priority != after.priority {
        changes.insert("priority".to_string(), json!(after.priority));
    }
    if before.completed != after.completed {
        changes.insert("completed".to_string(), json!(after.completed));
    }
    changes
}
