//! Drop resolution: maps (payload, innermost drop target) to at most one
//! board action. Runs exactly once per gesture, at drop time, against the
//! board as it is *right now* — ids captured at drag start may have gone
//! stale, and every stale combination degrades to `None`.

use crate::domain::{Board, ColumnId, TaskId};
use crate::drag::{DragPayload, DropTarget, Edge};
use crate::reorder::{move_within_list, resolve_edge_index};
use crate::store::Action;

/// Resolves a drop into the action to submit, or `None` when the gesture
/// should end without touching the board (no target, a target that no
/// longer exists, or a drop that would change nothing).
pub fn resolve_drop(
    board: &Board,
    payload: &DragPayload,
    target: Option<&DropTarget>,
) -> Option<Action> {
    match (payload, target?) {
        (
            DragPayload::Task {
                task_id,
                origin_column_id,
            },
            DropTarget::TaskSlot {
                task_id: target_task_id,
                column_id: target_column_id,
                edge,
            },
        ) => task_onto_slot(
            board,
            task_id,
            origin_column_id,
            target_task_id,
            target_column_id,
            *edge,
        ),
        (
            DragPayload::Task {
                task_id,
                origin_column_id,
            },
            DropTarget::ColumnBody { column_id },
        ) => task_onto_column(board, task_id, origin_column_id, column_id),
        (DragPayload::Column { column_id }, DropTarget::ColumnBody { column_id: target_id }) => {
            column_onto_column(board, column_id, target_id)
        }
        // A column can only land on another column
        (DragPayload::Column { .. }, DropTarget::TaskSlot { .. }) => None,
    }
}

fn task_onto_slot(
    board: &Board,
    task_id: &TaskId,
    origin_column_id: &ColumnId,
    target_task_id: &TaskId,
    target_column_id: &ColumnId,
    edge: Edge,
) -> Option<Action> {
    let origin_column = board.find_column(origin_column_id)?;
    let origin_position = origin_column.task_index(task_id)?;

    if origin_column_id == target_column_id {
        let target_position = origin_column.task_index(target_task_id)?;
        if origin_position == target_position {
            return None;
        }

        // The insertion point is found against the current list, then
        // shifted into the index space left behind once the dragged task is
        // removed. Dropping onto a neighbor's near edge therefore resolves
        // to the task's own position and the move keeps the order intact.
        let insertion = resolve_edge_index(target_position, edge);
        let target_index = if insertion > origin_position {
            insertion - 1
        } else {
            insertion
        };

        return Some(Action::MoveTask {
            source_column_id: origin_column_id.clone(),
            target_column_id: origin_column_id.clone(),
            task_id: task_id.clone(),
            target_index,
        });
    }

    let destination = board.find_column(target_column_id)?;
    let target_position = destination.task_index(target_task_id)?;

    Some(Action::MoveTask {
        source_column_id: origin_column_id.clone(),
        target_column_id: target_column_id.clone(),
        task_id: task_id.clone(),
        target_index: resolve_edge_index(target_position, edge),
    })
}

fn task_onto_column(
    board: &Board,
    task_id: &TaskId,
    origin_column_id: &ColumnId,
    target_column_id: &ColumnId,
) -> Option<Action> {
    let origin_column = board.find_column(origin_column_id)?;
    origin_column.task_index(task_id)?;

    if origin_column_id == target_column_id {
        // Dropping on the own column's background sends the task to the
        // bottom of that column.
        return Some(Action::MoveTask {
            source_column_id: origin_column_id.clone(),
            target_column_id: origin_column_id.clone(),
            task_id: task_id.clone(),
            target_index: origin_column.tasks.len() - 1,
        });
    }

    let destination = board.find_column(target_column_id)?;

    Some(Action::MoveTask {
        source_column_id: origin_column_id.clone(),
        target_column_id: target_column_id.clone(),
        task_id: task_id.clone(),
        target_index: destination.tasks.len(),
    })
}

fn column_onto_column(
    board: &Board,
    column_id: &ColumnId,
    target_column_id: &ColumnId,
) -> Option<Action> {
    let origin_index = board.column_index(column_id)?;
    let target_index = board.column_index(target_column_id)?;

    if origin_index == target_index {
        return None;
    }

    Some(Action::ReorderColumns {
        columns: move_within_list(&board.columns, origin_index, target_index),
    })
}
