//! Service layer
//!
//! Mediates every mutation of the underlying [`TodoStore`] and publishes
//! lifecycle events to the sink injected at startup. Queries pass straight
//! through to the store.

use log::{info, warn};

use crate::events::TodoEvents;
use crate::model::{Todo, TodoError, TodoId};
use crate::store::{CreateTodoArgs, TodoStore, UpdateTodoArgs};

/// Store plus event sink.
///
/// Event emission is fire-and-forget: a sink failure is logged as a warning
/// and never fails the primary operation.
pub struct TodoService {
    store: TodoStore,
    events: Box<dyn TodoEvents>,
}

impl TodoService {
    /// Creates a service over an empty store.
    pub fn new(events: Box<dyn TodoEvents>) -> Self {
        Self::with_store(TodoStore::new(), events)
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: TodoStore, events: Box<dyn TodoEvents>) -> Self {
        Self { store, events }
    }

    /// Creates a todo and emits `task.created`.
    pub fn add(&mut self, args: CreateTodoArgs) -> Result<Todo, TodoError> {
        let todo = self.store.add(args)?;
        info!("Created todo {} (priority {})", todo.id, todo.priority);
        if let Err(err) = self.events.task_created(&todo) {
            warn!("task.created event for todo {} dropped: {err:#}", todo.id);
        }
        Ok(todo)
    }

    /// Applies a partial update and emits `task.updated` with the snapshots
    /// from before and after the change.
    ///
    /// `Ok(None)` means no todo with that id exists; validation errors are
    /// reported as `Err` and leave the store untouched.
    pub fn update(&mut self, id: TodoId, args: UpdateTodoArgs) -> Result<Option<Todo>, TodoError> {
        let Some(before) = self.store.get_by_id(id) else {
            return Ok(None);
        };
        let Some(after) = self.store.update(id, args)? else {
            return Ok(None);
        };
        info!("Updated todo {id}");
        if let Err(err) = self.events.task_updated(&before, &after) {
            warn!("task.updated event for todo {id} dropped: {err:#}");
        }
        Ok(Some(after))
    }

    /// Sets the completion flag and emits `task.updated`.
    pub fn mark_complete(&mut self, id: TodoId, completed: bool) -> Option<Todo> {
        let before = self.store.get_by_id(id)?;
        let after = self.store.mark_complete(id, completed)?;
        info!(
            "Todo {id} marked {}",
            if completed { "complete" } else { "pending" }
        );
        if let Err(err) = self.events.task_updated(&before, &after) {
            warn!("task.updated event for todo {id} dropped: {err:#}");
        }
        Some(after)
    }

    /// Deletes a todo and emits `task.deleted`. Returns whether anything
    /// was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        if !self.store.delete(id) {
            return false;
        }
        info!("Deleted todo {id}");
        if let Err(err) = self.events.task_deleted(id) {
            warn!("task.deleted event for todo {id} dropped: {err:#}");
        }
        true
    }

    pub fn get_all(&self) -> Vec<Todo> {
        self.store.get_all()
    }

    pub fn get_by_id(&self, id: TodoId) -> Option<Todo> {
        self.store.get_by_id(id)
    }

    pub fn get_by_category(&self, category: &str) -> Vec<Todo> {
        self.store.get_by_category(category)
    }

    pub fn get_by_priority(&self, priority: &str) -> Vec<Todo> {
        self.store.get_by_priority(priority)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn count_completed(&self) -> usize {
        self.store.count_completed()
    }
}
