use crate::{
    domain::Board,
    error::Result,
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation. The board lives as pretty-printed
/// JSON in a dot-directory under the given root.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const DRIFTBOARD_DIR: &'static str = ".driftboard";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance for the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::DRIFTBOARD_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_board(&self) -> Result<Option<Board>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let board: Board = serde_json::from_str(&contents)?;

        Ok(Some(board))
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        Ok(())
    }
}
