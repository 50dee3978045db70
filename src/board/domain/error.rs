//! Error types for board domain operations.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned by board mutations and drag session transitions.
///
/// Every variant except [`BoardDomainError::InvariantViolation`] is a contract
/// violation: a caller bug that normal user interaction must never reach.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty after trimming.
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    /// The task is not present on the board.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The column is not present on the board.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A column with the same identifier is already on the board.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A column position was outside the board.
    #[error("column position {index} out of range for {len} columns")]
    ColumnOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of columns on the board.
        len: usize,
    },

    /// The board failed a structural invariant check.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    /// A drag was started while another one is active.
    #[error("a drag of task {0} is already in progress")]
    DragInProgress(TaskId),

    /// A drag event arrived while no drag is active.
    #[error("no drag is in progress")]
    NoActiveDrag,
}

/// Error returned while parsing a task priority from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
