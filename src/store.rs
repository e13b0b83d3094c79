//! In-memory todo store
//!
//! The authoritative ordered collection of todos plus the monotonically
//! increasing identity counter. All validation funnels through
//! [`Todo::new`], so nothing invalid can be stored.

use chrono::Utc;

use crate::model::{Priority, Todo, TodoError, TodoId};

/// Arguments for creating a new todo.
#[derive(Debug, Clone, Default)]
pub struct CreateTodoArgs {
    pub title: String,
    pub category: Option<String>,
    /// Parsed case-insensitively; `None` falls back to medium.
    pub priority: Option<String>,
}

impl CreateTodoArgs {
    /// Title-only args: no category, default priority.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Arguments for updating an existing todo.
///
/// `None` on `title` or `priority` leaves the stored value untouched. The
/// category is nullable, so its patch is the explicit three-way
/// [`CategoryPatch`].
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoArgs {
    pub title: Option<String>,
    pub category: CategoryPatch,
    pub priority: Option<String>,
}

/// Update intent for the optional category field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryPatch {
    /// Leave the stored category as it is.
    #[default]
    Keep,
    /// Replace the category. The value is normalized like on create, so
    /// input that trims to empty clears the field instead.
    Set(String),
    /// Remove the category.
    Clear,
}

/// In-memory collection of todos in creation order.
///
/// The store owns every record; methods that return a [`Todo`] hand out an
/// independent clone, so callers never hold references into the collection
/// across later mutations. Identifiers start at 1 and are never reused,
/// even after deletions.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a new todo, assigning the next identifier.
    ///
    /// On a validation error nothing is stored and the identifier counter
    /// does not advance.
    pub fn add(&mut self, args: CreateTodoArgs) -> Result<Todo, TodoError> {
        let todo = Todo::new(
            self.next_id,
            &args.title,
            false,
            args.category.as_deref(),
            args.priority.as_deref().unwrap_or(Priority::default().as_str()),
            Utc::now(),
        )?;
        self.todos.push(todo.clone());
        self.next_id += 1;
        Ok(todo)
    }

    /// All todos in creation order, oldest first.
    pub fn get_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Looks up a todo by id.
    pub fn get_by_id(&self, id: TodoId) -> Option<Todo> {
        self.todos.iter().find(|t| t.id == id).cloned()
    }

    /// Applies a partial update to the todo with `id`.
    ///
    /// Returns `Ok(None)` when no such todo exists. Otherwise a full
    /// candidate is rebuilt from the current record plus the patched fields
    /// and validated as a whole; only on success is the stored record
    /// replaced, keeping its position, `id`, and `created_at`. On a
    /// validation error the stored todo is left unchanged.
    pub fn update(&mut self, id: TodoId, args: UpdateTodoArgs) -> Result<Option<Todo>, TodoError> {
        let Some(pos) = self.todos.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let current = &self.todos[pos];

        let title = args.title.as_deref().unwrap_or(&current.title);
        let priority = args.priority.as_deref().unwrap_or(current.priority.as_str());
        let category = match &args.category {
            CategoryPatch::Keep => current.category.as_deref(),
            CategoryPatch::Set(value) => Some(value.as_str()),
            CategoryPatch::Clear => None,
        };

        let updated = Todo::new(
            id,
            title,
            current.completed,
            category,
            priority,
            current.created_at,
        )?;
        self.todos[pos] = updated.clone();
        Ok(Some(updated))
    }

    /// Sets the completion flag on the todo with `id`.
    ///
    /// Completion carries no invariant beyond being boolean, so the record
    /// is modified in place without re-running validation. Setting the
    /// current value again is a no-op that still reports success.
    pub fn mark_complete(&mut self, id: TodoId, completed: bool) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = completed;
        Some(todo.clone())
    }

    /// Permanently removes the todo with `id`.
    ///
    /// Returns whether anything was removed. The freed identifier is not
    /// reused by later adds.
    pub fn delete(&mut self, id: TodoId) -> bool {
        match self.todos.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.todos.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Todos whose category matches `category` case-insensitively, in
    /// creation order. Todos without a category never match.
    pub fn get_by_category(&self, category: &str) -> Vec<Todo> {
        let needle = category.to_lowercase();
        self.todos
            .iter()
            .filter(|t| t.category.as_deref() == Some(needle.as_str()))
            .cloned()
            .collect()
    }

    /// Todos with the given priority, parsed case-insensitively, in
    /// creation order. A value that is not a known priority matches
    /// nothing.
    pub fn get_by_priority(&self, priority: &str) -> Vec<Todo> {
        match priority.parse::<Priority>() {
            Ok(wanted) => self
                .todos
                .iter()
                .filter(|t| t.priority == wanted)
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of live todos.
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Number of live todos marked completed.
    pub fn count_completed(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
