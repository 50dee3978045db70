//! Change notification port exposed to the presentation layer.

use crate::board::domain::{Board, BoardChange};

/// Receives board notifications.
pub trait BoardChangeSink: Send + Sync {
    /// Called once per settled drag and once per surfaced persistence failure.
    fn notify(&self, change: &BoardChange);

    /// Called whenever the speculative board changes during a drag.
    ///
    /// The default implementation ignores previews.
    fn preview(&self, board: &Board) {
        let _ = board;
    }
}
