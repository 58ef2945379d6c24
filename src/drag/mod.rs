//! Drag interaction: the tagged drag payload and drop target unions, edge
//! resolution against a slot's bounding box, and the per-gesture state
//! machines that turn a drop into a single board action.
//!
//! The embedder owns pointer events and hit testing. It reports the drag
//! lifecycle to a [`DragDetector`] and, at drop time, hands over the
//! innermost target it found; everything from there down to the submitted
//! [`Action`](crate::store::Action) is pure and synchronous.

use crate::domain::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

mod detector;
mod drop;

pub use detector::{ColumnDragState, DragDetector, TaskDragState};
pub use drop::resolve_drop;

/// Which side of a hovered task slot a drop should insert relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

/// A task slot's bounding box along its list's primary axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotBounds {
    pub start: f64,
    pub extent: f64,
}

impl SlotBounds {
    pub fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    /// The edge the pointer is closest to: before the slot's midpoint is
    /// [`Edge::Top`], at or past it is [`Edge::Bottom`].
    pub fn closest_edge(&self, pointer: f64) -> Edge {
        if pointer < self.start + self.extent / 2.0 {
            Edge::Top
        } else {
            Edge::Bottom
        }
    }
}

/// What is being dragged. One payload exists per gesture, captured at drag
/// start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragPayload {
    Task {
        task_id: TaskId,
        origin_column_id: ColumnId,
    },
    Column {
        column_id: ColumnId,
    },
}

/// The innermost thing under the pointer. A task slot carries the edge the
/// pointer is closest to; a column body has no edge and always means "end of
/// that column's list" for task drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    TaskSlot {
        task_id: TaskId,
        column_id: ColumnId,
        edge: Edge,
    },
    ColumnBody {
        column_id: ColumnId,
    },
}
