use crate::domain::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A structural board operation. The set is closed: [`apply`] matches
/// exhaustively, so every action is handled and every handler is total.
///
/// [`apply`]: crate::store::apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Append a task to a column; ignored if the column is missing
    AddTask { column_id: ColumnId, task: Task },

    /// Remove a task if present
    DeleteTask {
        column_id: ColumnId,
        task_id: TaskId,
    },

    /// Replace a task by id within its column
    UpdateTask { column_id: ColumnId, task: Task },

    /// Flip a task's completion flag
    ToggleTaskComplete {
        column_id: ColumnId,
        task_id: TaskId,
    },

    /// Relocate a task between or within columns. `target_index` is the
    /// insertion position in the destination list after the task has been
    /// removed from the source; it clamps to the destination length.
    MoveTask {
        source_column_id: ColumnId,
        target_column_id: ColumnId,
        task_id: TaskId,
        target_index: usize,
    },

    /// Append a column; ignored if the id is already on the board
    AddColumn { column: Column },

    /// Remove a column and all of its tasks
    DeleteColumn { column_id: ColumnId },

    /// Replace a column by id
    UpdateColumn { column: Column },

    /// Replace the whole column sequence with a caller-supplied order.
    /// Applied only if the new sequence is a permutation (by id) of the
    /// current one.
    ReorderColumns { columns: Vec<Column> },

    /// Flip a task's selection flag
    ToggleTaskSelection {
        column_id: ColumnId,
        task_id: TaskId,
    },

    /// Select every task in a column
    SelectAllInColumn { column_id: ColumnId },

    /// Deselect every task on the board
    ClearAllSelections,

    /// Remove every selected task in a column
    BulkDeleteSelected { column_id: ColumnId },

    /// Set `completed` on every selected task in a column and clear their
    /// selection in the same mutation
    BulkToggleSelected {
        column_id: ColumnId,
        completed: bool,
    },
}
