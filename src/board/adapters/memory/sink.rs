//! Notification sink that records everything it receives.

use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{
    domain::{Board, BoardChange},
    ports::BoardChangeSink,
};

/// Records notifications and previews for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    state: Arc<RwLock<RecordedState>>,
}

#[derive(Debug, Default)]
struct RecordedState {
    changes: Vec<BoardChange>,
    previews: Vec<Board>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification received, oldest first.
    #[must_use]
    pub fn changes(&self) -> Vec<BoardChange> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .changes
            .clone()
    }

    /// Returns every preview board received, oldest first.
    #[must_use]
    pub fn previews(&self) -> Vec<Board> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .previews
            .clone()
    }
}

impl BoardChangeSink for RecordingSink {
    fn notify(&self, change: &BoardChange) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .changes
            .push(change.clone());
    }

    fn preview(&self, board: &Board) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .previews
            .push(board.clone());
    }
}
