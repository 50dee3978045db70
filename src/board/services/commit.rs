//! Commit coordination: persisting optimistic moves with bounded retries.

use crate::board::{
    domain::{Board, BoardChange, MoveDelta},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

use super::CommitPolicy;

/// Confirmation that a move was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// The persisted move.
    pub delta: MoveDelta,
    /// Attempts used, first try included.
    pub attempts: u32,
}

/// Persistence failed for a committed move after all allowed attempts.
#[derive(Debug, Clone, Error)]
#[error(
    "failed to persist move of task {} after {attempts} attempt(s): {source}",
    .delta.task_id
)]
pub struct CommitError {
    /// The move that could not be persisted.
    pub delta: Box<MoveDelta>,
    /// Attempts made.
    pub attempts: u32,
    /// The last store error.
    #[source]
    pub source: TaskStoreError,
}

impl CommitError {
    /// Returns the user-facing notification for this failure, carrying the
    /// board restored by the caller.
    #[must_use]
    pub fn notification(&self, restored: Board) -> BoardChange {
        BoardChange::PersistFailed {
            board: restored,
            delta: (*self.delta).clone(),
            error: self.source.to_string(),
        }
    }
}

/// Hands committed moves to the task store.
///
/// The in-memory board is already updated when a commit reaches the
/// coordinator; the coordinator only decides whether that optimistic update
/// stands.
#[derive(Clone)]
pub struct CommitCoordinator<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    policy: CommitPolicy,
}

impl<S> CommitCoordinator<S>
where
    S: TaskStore,
{
    /// Creates a coordinator.
    #[must_use]
    pub const fn new(store: Arc<S>, policy: CommitPolicy) -> Self {
        Self { store, policy }
    }

    /// Persists a committed move, retrying per the policy.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError`] carrying the move when every attempt failed or
    /// timed out.
    pub async fn commit(&self, delta: MoveDelta) -> Result<CommitReceipt, CommitError> {
        let attempts = self.policy.attempts();
        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.attempt(&delta).await {
                Ok(()) => {
                    debug!(task_id = %delta.task_id, attempt, "move persisted");
                    return Ok(CommitReceipt {
                        delta,
                        attempts: attempt,
                    });
                }
                Err(err) => {
                    warn!(
                        task_id = %delta.task_id,
                        attempt,
                        attempts,
                        error = %err,
                        "persisting move failed"
                    );
                    last_error = Some(err);
                }
            }
        }

        let source = last_error
            .unwrap_or_else(|| TaskStoreError::Rejected("no persistence attempt made".to_owned()));
        error!(task_id = %delta.task_id, error = %source, "rolling back move");
        Err(CommitError {
            delta: Box::new(delta),
            attempts,
            source,
        })
    }

    async fn attempt(&self, delta: &MoveDelta) -> Result<(), TaskStoreError> {
        let timeout = self.policy.timeout();
        tokio::time::timeout(timeout, self.store.persist_order(delta))
            .await
            .map_err(|_elapsed| TaskStoreError::Timeout(timeout))?
    }
}
