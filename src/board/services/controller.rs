//! Thin shell that feeds pointer input to the drag reducer and executes its
//! effects.

use crate::board::{
    domain::{
        Board, BoardDomainError, BoardId, ColumnId, DragEvent, DragPhase, DragSession, Effect,
        MoveDelta, Point, Rect, SessionOptions, Task, TaskId, reduce,
    },
    ports::{BoardChangeSink, RegionProvider, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::{CommitCoordinator, CommitError, DragConfig};

/// Service-level errors for board controller operations.
#[derive(Debug, Error)]
pub enum BoardControllerError {
    /// A contract violation in the board domain.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Loading from the store failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// A committed move could not be persisted and was rolled back.
    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// Result type for board controller operations.
pub type BoardControllerResult<T> = Result<T, BoardControllerError>;

/// Collaborators required by a [`BoardController`].
pub struct ControllerPorts<S, P, N, C> {
    /// Board persistence.
    pub store: Arc<S>,
    /// Live region geometry.
    pub regions: Arc<P>,
    /// Presentation-layer notifications.
    pub sink: Arc<N>,
    /// Commit timestamps.
    pub clock: Arc<C>,
}

/// Owns the authoritative board and the drag session for one board view.
///
/// Input is processed serially through `&mut self`. Committed moves are
/// applied immediately and queued; [`BoardController::settle`] persists the
/// queue in order. A drag started before the queue settles uses the
/// optimistic board as its baseline.
pub struct BoardController<S, P, N, C>
where
    S: TaskStore,
    P: RegionProvider,
    N: BoardChangeSink,
    C: Clock + Send + Sync,
{
    board: Board,
    session: DragSession,
    pending: VecDeque<MoveDelta>,
    coordinator: CommitCoordinator<S>,
    regions: Arc<P>,
    sink: Arc<N>,
    clock: Arc<C>,
    options: SessionOptions,
}

impl<S, P, N, C> BoardController<S, P, N, C>
where
    S: TaskStore,
    P: RegionProvider,
    N: BoardChangeSink,
    C: Clock + Send + Sync,
{
    /// Creates a controller over an already loaded board.
    #[must_use]
    pub fn new(board: Board, ports: ControllerPorts<S, P, N, C>, config: DragConfig) -> Self {
        Self {
            board,
            session: DragSession::Idle,
            pending: VecDeque::new(),
            coordinator: CommitCoordinator::new(ports.store, config.commit),
            regions: ports.regions,
            sink: ports.sink,
            clock: ports.clock,
            options: config.session_options(),
        }
    }

    /// Loads a board from the store and creates a controller over it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Store`] when the board cannot be
    /// loaded.
    pub async fn load(
        board_id: BoardId,
        ports: ControllerPorts<S, P, N, C>,
        config: DragConfig,
    ) -> BoardControllerResult<Self> {
        let board = ports.store.load_board(board_id).await?;
        Ok(Self::new(board, ports, config))
    }

    /// Returns the authoritative board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board to render: the preview during a drag, otherwise the
    /// authoritative board.
    #[must_use]
    pub fn visible_board(&self) -> &Board {
        self.session.preview().unwrap_or(&self.board)
    }

    /// Returns the drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Returns the drag phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    /// Returns the number of commits awaiting persistence.
    #[must_use]
    pub fn pending_commits(&self) -> usize {
        self.pending.len()
    }

    /// Starts dragging `task_id`.
    ///
    /// # Errors
    ///
    /// Returns a domain error when a drag is already active or the task is
    /// not on the board.
    pub fn pick(&mut self, task_id: TaskId) -> BoardControllerResult<()> {
        self.dispatch(DragEvent::Pick { task_id })
    }

    /// Handles a pointer move during a drag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoActiveDrag`] when no drag is active.
    pub fn pointer_moved(&mut self, pointer: Point, dragged: Rect) -> BoardControllerResult<()> {
        let regions = self.regions.snapshot(self.visible_board());
        self.dispatch(DragEvent::Hover {
            pointer,
            dragged,
            regions,
        })
    }

    /// Handles pointer release, committing or cancelling the drag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoActiveDrag`] when no drag is active.
    pub fn release(&mut self, pointer: Point, dragged: Rect) -> BoardControllerResult<()> {
        let regions = self.regions.snapshot(self.visible_board());
        let at = self.clock.utc();
        self.dispatch(DragEvent::Release {
            pointer,
            dragged,
            regions,
            at,
        })
    }

    /// Cancels the active drag, restoring its baseline.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoActiveDrag`] when no drag is active.
    pub fn cancel(&mut self) -> BoardControllerResult<()> {
        self.dispatch(DragEvent::Cancel)
    }

    /// Persists queued commits in order.
    ///
    /// On failure the failed move and every move queued after it are undone
    /// on the current board, newest first. Card edits made since those moves
    /// are kept. Any active drag is abandoned and a single failure
    /// notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardControllerError::Commit`] after rolling back.
    pub async fn settle(&mut self) -> BoardControllerResult<usize> {
        let mut persisted = 0;
        while let Some(delta) = self.pending.pop_front() {
            match self.coordinator.commit(delta).await {
                Ok(_receipt) => persisted += 1,
                Err(err) => {
                    let dropped = self.pending.len();
                    let restored = self
                        .pending
                        .drain(..)
                        .rev()
                        .fold(self.board.clone(), |board, later| later.revert(&board));
                    self.board = err.delta.revert(&restored);
                    self.session = DragSession::Idle;
                    debug!(dropped, "queued commits dropped after rollback");
                    self.sink.notify(&err.notification(self.board.clone()));
                    return Err(err.into());
                }
            }
        }
        Ok(persisted)
    }

    /// Adds a card to the end of `column_id`.
    ///
    /// # Errors
    ///
    /// Returns a domain error when a drag is active, the task already exists,
    /// or the column is unknown.
    pub fn add_task(&mut self, task: Task, column_id: &ColumnId) -> BoardControllerResult<()> {
        self.edit(|board| board.with_task_added(task, column_id))
    }

    /// Replaces the content of a card.
    ///
    /// # Errors
    ///
    /// Returns a domain error when a drag is active or the task is unknown.
    pub fn update_task(&mut self, task: Task) -> BoardControllerResult<()> {
        self.edit(|board| board.with_task_updated(task))
    }

    /// Removes a card and its list entry.
    ///
    /// # Errors
    ///
    /// Returns a domain error when a drag is active or the task is unknown.
    pub fn remove_task(&mut self, task_id: &TaskId) -> BoardControllerResult<()> {
        self.edit(|board| board.with_task_removed(task_id))
    }

    fn edit(
        &mut self,
        change: impl FnOnce(&Board) -> Result<Board, BoardDomainError>,
    ) -> BoardControllerResult<()> {
        if let Some(drag) = self.session.active() {
            return Err(BoardDomainError::DragInProgress(drag.task_id().clone()).into());
        }
        self.board = change(&self.board)?;
        Ok(())
    }

    fn dispatch(&mut self, event: DragEvent) -> BoardControllerResult<()> {
        let step = reduce(&self.board, &self.session, event, self.options)?;
        self.board = step.board;
        self.session = step.session;
        for effect in step.effects {
            match effect {
                Effect::Preview(preview) => self.sink.preview(&preview),
                Effect::Persist(delta) => self.pending.push_back(delta),
                Effect::Notify(change) => self.sink.notify(&change),
            }
        }
        Ok(())
    }
}
