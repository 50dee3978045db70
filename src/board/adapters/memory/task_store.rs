//! In-memory task store with scripted failures.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardId, MoveDelta},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Persisted moves are applied to the stored board so that a later
/// [`TaskStore::load_board`] returns the committed order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    boards: HashMap<BoardId, Board>,
    persisted: Vec<MoveDelta>,
    failures_remaining: u32,
    persist_calls: usize,
}

fn lock_error(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces a board.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn insert_board(&self, board: Board) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.boards.insert(board.id(), board);
        Ok(())
    }

    /// Makes the next `count` persistence calls fail.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn fail_next(&self, count: u32) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failures_remaining = count;
        Ok(())
    }

    /// Returns every successfully persisted move, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn persisted(&self) -> TaskStoreResult<Vec<MoveDelta>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.persisted.clone())
    }

    /// Returns how many times `persist_order` was called, failures included.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn persist_calls(&self) -> TaskStoreResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.persist_calls)
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load_board(&self, board_id: BoardId) -> TaskStoreResult<Board> {
        let state = self.state.read().map_err(lock_error)?;
        state
            .boards
            .get(&board_id)
            .cloned()
            .ok_or(TaskStoreError::BoardNotFound(board_id))
    }

    async fn persist_order(&self, delta: &MoveDelta) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.persist_calls += 1;
        if state.failures_remaining > 0 {
            state.failures_remaining -= 1;
            return Err(TaskStoreError::Rejected("scripted failure".to_owned()));
        }

        let owner = state
            .boards
            .iter()
            .find(|(_, board)| board.find_column_of(&delta.task_id).is_some())
            .map(|(board_id, _)| *board_id)
            .ok_or_else(|| TaskStoreError::Rejected(format!("unknown task {}", delta.task_id)))?;
        let Some(board) = state.boards.get(&owner) else {
            return Err(TaskStoreError::BoardNotFound(owner));
        };
        let updated = board
            .with_task_moved(&delta.task_id, &delta.to_column_id, delta.to_index)
            .map_err(|err| TaskStoreError::Rejected(err.to_string()))?;
        state.boards.insert(owner, updated);
        state.persisted.push(delta.clone());
        Ok(())
    }
}
