//! Commit deltas, change notifications, and reducer effects.

use super::{Board, ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The positional change produced by one committed drag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDelta {
    /// The moved task.
    pub task_id: TaskId,
    /// Column the task started in.
    pub from_column_id: ColumnId,
    /// Index the task started at.
    pub from_index: usize,
    /// Column the task ended in.
    pub to_column_id: ColumnId,
    /// Index the task ended at.
    pub to_index: usize,
}

impl MoveDelta {
    /// Returns `true` when the task changed columns.
    #[must_use]
    pub fn is_cross_column(&self) -> bool {
        self.from_column_id != self.to_column_id
    }

    /// Returns `board` with this move undone.
    ///
    /// Only the moved card is touched, so edits made after the move survive.
    /// When the card or its origin column is no longer on the board there is
    /// nothing to undo and `board` is returned unchanged.
    #[must_use]
    pub fn revert(&self, board: &Board) -> Board {
        board
            .with_task_moved(&self.task_id, &self.from_column_id, self.from_index)
            .unwrap_or_else(|_| board.clone())
    }
}

/// Notification emitted to the presentation layer when a drag settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardChange {
    /// A move was applied optimistically and is the new authoritative board.
    Committed {
        /// New authoritative board.
        board: Board,
        /// The applied move.
        delta: MoveDelta,
        /// When the move was committed.
        committed_at: DateTime<Utc>,
    },
    /// The drag ended without changing the board.
    Unchanged {
        /// The authoritative board, equal to the pre-drag board.
        board: Board,
    },
    /// The speculative move failed validation and was discarded.
    Discarded {
        /// The restored baseline board.
        board: Board,
        /// Diagnostic description of the violation.
        reason: String,
    },
    /// Persisting a committed move failed and the board was rolled back.
    PersistFailed {
        /// The restored pre-commit board.
        board: Board,
        /// The move that could not be persisted.
        delta: MoveDelta,
        /// User-facing failure description.
        error: String,
    },
}

impl BoardChange {
    /// Returns the authoritative board carried by the notification.
    #[must_use]
    pub const fn board(&self) -> &Board {
        match self {
            Self::Committed { board, .. }
            | Self::Unchanged { board }
            | Self::Discarded { board, .. }
            | Self::PersistFailed { board, .. } => board,
        }
    }
}

/// Side effects requested by the drag reducer, executed by a thin shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Render the speculative board.
    Preview(Board),
    /// Persist a committed move.
    Persist(MoveDelta),
    /// Notify the presentation layer of a settled drag.
    Notify(BoardChange),
}
