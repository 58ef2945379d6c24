use crate::domain::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    const PREFIX: &'static str = "col";

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

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered list of tasks under a title. Task order is significant and
/// defines both display and drag order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Creates an empty column with a caller-supplied id
    pub fn with_id(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Position of a task within this column
    pub fn task_index(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == task_id)
    }

    /// Looks up a task by id
    pub fn find_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == task_id)
    }

    /// Selection counts used by bulk-action affordances
    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected_count: self.tasks.iter().filter(|task| task.selected).count(),
            total_tasks: self.tasks.len(),
        }
    }

    /// Whether any task in this column is selected
    pub fn has_selected(&self) -> bool {
        self.tasks.iter().any(|task| task.selected)
    }
}

/// Snapshot of a column's selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected_count: usize,
    pub total_tasks: usize,
}

impl SelectionSummary {
    pub fn has_selected(&self) -> bool {
        self.selected_count > 0
    }

    pub fn all_selected(&self) -> bool {
        self.total_tasks > 0 && self.selected_count == self.total_tasks
    }

    pub fn some_selected(&self) -> bool {
        self.selected_count > 0 && self.selected_count < self.total_tasks
    }
}
