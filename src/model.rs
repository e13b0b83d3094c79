//! Todo domain model
//!
//! The task record, its priority scale, and the validation and
//! normalization rules enforced on every construction path.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_MAX_CHARS, TITLE_MAX_CHARS};

/// Identifier assigned by the store. Positive, unique, never reused.
pub type TodoId = u64;

/// Validation errors raised when constructing or updating a todo.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("Todo title {0}")]
    InvalidTitle(String),

    #[error("Priority must be high, medium, or low (got '{0}')")]
    InvalidPriority(String),

    #[error("Category cannot exceed {0} characters")]
    InvalidCategory(usize),
}

/// Priority level of a todo.
///
/// Input is parsed case-insensitively; the stored form is always the
/// canonical lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(TodoError::InvalidPriority(s.to_string())),
        }
    }
}

/// A single task record.
///
/// Values of this type always satisfy the field invariants: the title is
/// trimmed and non-empty, the category is either absent or a trimmed
/// non-empty lowercase string, and the priority is canonical. The only way
/// to obtain one is [`Todo::new`], which both the create and the update
/// path of the store go through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub category: Option<String>,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Builds a validated, normalized todo from raw field values.
    ///
    /// `id` and `created_at` are accepted as given; assigning them is the
    /// store's job. The title is trimmed, the category is trimmed,
    /// lowercased and coerced to `None` when empty, and the priority text
    /// is parsed case-insensitively.
    ///
    /// # Errors
    ///
    /// [`TodoError::InvalidTitle`] when the trimmed title is empty or
    /// longer than 500 characters, [`TodoError::InvalidPriority`] for an
    /// unknown priority name, and [`TodoError::InvalidCategory`] when the
    /// trimmed category exceeds 50 characters.
    pub fn new(
        id: TodoId,
        title: &str,
        completed: bool,
        category: Option<&str>,
        priority: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::InvalidTitle("cannot be empty".to_string()));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(TodoError::InvalidTitle(format!(
                "cannot exceed {TITLE_MAX_CHARS} characters"
            )));
        }

        let priority = priority.parse::<Priority>()?;
        let category = normalize_category(category)?;

        Ok(Self {
            id,
            title: title.to_string(),
            completed,
            category,
            priority,
            created_at,
        })
    }
}

/// Trims, bounds-checks, and lowercases an optional category.
///
/// Whitespace-only input collapses to `None` rather than an empty string.
/// The length check runs on the trimmed original, before lowercasing.
fn normalize_category(raw: Option<&str>) -> Result<Option<String>, TodoError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > CATEGORY_MAX_CHARS {
        return Err(TodoError::InvalidCategory(CATEGORY_MAX_CHARS));
    }
    Ok(Some(trimmed.to_lowercase()))
}
