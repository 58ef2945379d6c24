use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task, stable for the task's whole lifetime
/// including moves between columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "task";

    /// Wraps an existing id, e.g. one read back from storage
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh globally unique id
    pub fn generate() -> Self {
        Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single unit of work on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
    /// Transient multi-select flag. Not part of the task's identity; cleared
    /// whenever the task is relocated and consumed by bulk operations.
    #[serde(default)]
    pub selected: bool,
}

impl Task {
    /// Creates a new task with a fresh id
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            description: description.into(),
            completed: false,
            selected: false,
        }
    }

    /// Creates a task with a caller-supplied id
    pub fn with_id(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            selected: false,
        }
    }

    /// Flips the completion flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Flips the selection flag
    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}
