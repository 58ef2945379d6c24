use crate::domain::column::{Column, ColumnId};
use crate::domain::task::TaskId;
use serde::{Deserialize, Serialize};

/// The root aggregate: an ordered sequence of columns. Column order is
/// significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board from an existing column list
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Creates an empty board with no columns
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Position of a column on the board
    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == column_id)
    }

    /// Looks up a column by id
    pub fn find_column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == column_id)
    }

    /// Mutable lookup of a column by id
    pub fn find_column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| &col.id == column_id)
    }

    /// Whether any column holds a task with this id
    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.columns
            .iter()
            .any(|col| col.task_index(task_id).is_some())
    }

    /// Total number of tasks across all columns
    pub fn total_task_count(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).sum()
    }

    /// Titles of all columns, in board order. Used for duplicate-title
    /// validation when adding or renaming a column.
    pub fn column_titles(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.title.as_str()).collect()
    }
}

/// The seed board used when nothing has been persisted yet: three empty
/// columns with fixed ids so repeated fresh starts produce the same board.
impl Default for Board {
    fn default() -> Self {
        Self {
            columns: vec![
                Column::with_id(ColumnId::new("col-todo"), "To Do"),
                Column::with_id(ColumnId::new("col-in-progress"), "In Progress"),
                Column::with_id(ColumnId::new("col-done"), "Done"),
            ],
        }
    }
}
