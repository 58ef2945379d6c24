use crate::domain::{Board, ColumnId, TaskId};
use crate::drag::drop::resolve_drop;
use crate::drag::{DragPayload, DropTarget, Edge};
use crate::store::Action;

/// Gesture state while a task is being dragged.
///
/// `DraggingLeftOrigin` is the hover over the dragged task's own slot: the
/// origin placeholder is suppressed there instead of being offered as a
/// drop target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskDragState {
    #[default]
    Idle,
    Dragging,
    HoveringOverSlot {
        target_task_id: TaskId,
        edge: Edge,
    },
    DraggingLeftOrigin,
}

/// Gesture state while a column is being dragged. Column hover carries no
/// edge; column reordering is not edge-aware.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnDragState {
    #[default]
    Idle,
    Dragging,
    HoveringOverColumn {
        target_column_id: ColumnId,
    },
}

/// Tracks one drag gesture at a time and resolves its drop into at most one
/// board action. The two entity kinds keep independent state machines; the
/// payload decides which one a gesture drives.
///
/// The embedder reports the lifecycle: `drag_start` once, `drag_over` /
/// `drag_leave` as the pointer moves, then exactly one of `on_drop` or
/// `cancel`.
#[derive(Debug, Default)]
pub struct DragDetector {
    payload: Option<DragPayload>,
    task_state: TaskDragState,
    column_state: ColumnDragState,
}

impl DragDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The payload of the gesture in flight, if any
    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    pub fn task_state(&self) -> &TaskDragState {
        &self.task_state
    }

    pub fn column_state(&self) -> &ColumnDragState {
        &self.column_state
    }

    /// Whether no gesture is in flight
    pub fn is_idle(&self) -> bool {
        self.payload.is_none()
    }

    /// Begins a gesture. A start while another gesture is in flight is
    /// ignored; a drag cannot begin until the previous one reached
    /// drop or cancel.
    pub fn drag_start(&mut self, payload: DragPayload) {
        if self.payload.is_some() {
            tracing::debug!("ignoring drag start while a gesture is in flight");
            return;
        }
        match &payload {
            DragPayload::Task { .. } => self.task_state = TaskDragState::Dragging,
            DragPayload::Column { .. } => self.column_state = ColumnDragState::Dragging,
        }
        self.payload = Some(payload);
    }

    /// Updates hover state from the innermost target currently under the
    /// pointer (`None` when the pointer is over no recognized target).
    pub fn drag_over(&mut self, target: Option<&DropTarget>) {
        let Some(payload) = &self.payload else {
            return;
        };

        match payload {
            DragPayload::Task { task_id, .. } => {
                self.task_state = match target {
                    Some(DropTarget::TaskSlot {
                        task_id: target_task_id,
                        edge,
                        ..
                    }) => {
                        if target_task_id == task_id {
                            TaskDragState::DraggingLeftOrigin
                        } else {
                            TaskDragState::HoveringOverSlot {
                                target_task_id: target_task_id.clone(),
                                edge: *edge,
                            }
                        }
                    }
                    // Over a column body or nothing: no slot to indicate
                    _ => TaskDragState::Dragging,
                };
            }
            DragPayload::Column { column_id } => {
                self.column_state = match target {
                    Some(DropTarget::ColumnBody {
                        column_id: target_column_id,
                    }) if target_column_id != column_id => ColumnDragState::HoveringOverColumn {
                        target_column_id: target_column_id.clone(),
                    },
                    _ => ColumnDragState::Dragging,
                };
            }
        }
    }

    /// The pointer left whatever it was hovering
    pub fn drag_leave(&mut self) {
        self.drag_over(None);
    }

    /// Ends the gesture with a drop, resolving it against the current
    /// board. Returns the action to submit, or `None` when the drop should
    /// leave the board alone. Either way the detector returns to idle.
    pub fn on_drop(&mut self, board: &Board, target: Option<&DropTarget>) -> Option<Action> {
        let payload = self.payload.take()?;
        self.reset();
        resolve_drop(board, &payload, target)
    }

    /// Abandons the gesture (pointer cancel, drop outside any target
    /// already handled by the embedder, navigation away). Never submits an
    /// action.
    pub fn cancel(&mut self) {
        self.payload = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.task_state = TaskDragState::Idle;
        self.column_state = ColumnDragState::Idle;
    }
}
