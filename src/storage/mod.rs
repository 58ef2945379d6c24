use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod file_storage;

/// Storage trait for persisting the board
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the persisted board, `None` when nothing has been saved yet
    async fn load_board(&self) -> Result<Option<Board>>;

    /// Saves the board state
    async fn save_board(&self, board: &Board) -> Result<()>;
}

/// Loads the persisted board, falling back when nothing is stored or when
/// the stored data cannot be read. Absent and malformed data both degrade
/// to the fallback board; this never raises.
pub async fn load_board_or<S, F>(storage: &S, fallback: F) -> Board
where
    S: Storage + ?Sized,
    F: FnOnce() -> Board,
{
    match storage.load_board().await {
        Ok(Some(board)) => board,
        Ok(None) => fallback(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load stored board, using fallback");
            fallback()
        }
    }
}
