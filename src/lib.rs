//! # Driftboard Core
//!
//! Board state and drag interaction engine for Driftboard kanban boards.
//!
//! This crate owns the board data model, the action set that mutates it,
//! and the state machines that turn drag gestures into those actions. It
//! has no opinion about rendering, hit testing or input handling; the
//! embedding UI reports gesture lifecycles and receives board snapshots.

pub mod domain;
pub mod drag;
pub mod error;
pub mod reorder;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{Board, Column, ColumnId, SelectionSummary, Task, TaskId};
pub use drag::{DragDetector, DragPayload, DropTarget, Edge};
pub use error::{DriftboardError, Result};
pub use storage::Storage;
pub use store::{apply, Action, BoardStore};
