//! Store port for loading boards and persisting committed moves.

use crate::board::domain::{Board, BoardId, MoveDelta};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Board persistence contract.
///
/// The engine does not know whether an implementation talks HTTP, writes a
/// local file, or keeps everything in memory.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads a board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] when the board does not
    /// exist.
    async fn load_board(&self, board_id: BoardId) -> TaskStoreResult<Board>;

    /// Persists the positional change of one committed drag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Rejected`] when the store refuses the move,
    /// or a persistence error when the store cannot be reached.
    async fn persist_order(&self, delta: &MoveDelta) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The board was not found.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The store refused the move.
    #[error("move rejected: {0}")]
    Rejected(String),

    /// The store did not answer within the allotted time.
    #[error("store did not respond within {0:?}")]
    Timeout(Duration),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
