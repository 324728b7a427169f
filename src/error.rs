use std::io;

use thiserror::Error;

/// Errors that end a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Food could not be placed because the snake covers every cell.
    ///
    /// The fixed board is far larger than any reachable snake between
    /// resets, so this signals a broken precondition rather than a game
    /// outcome.
    #[error("no free cell left for food on a board of {cells} cells")]
    BoardFull { cells: usize },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not set up logging: {0}")]
    Logging(String),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
