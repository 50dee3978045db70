//! Drag session state machine.
//!
//! The session is driven by [`reduce`], a pure reducer over
//! `(Board, DragSession, DragEvent)` that returns the next authoritative
//! board, the next session, and the [`Effect`]s the shell must execute.
//!
//! Cross-column moves are applied to the preview eagerly while hovering.
//! Same-column reordering is deferred to release unless
//! [`SessionOptions::live_same_column_reorder`] is set.

use super::{
    Board, BoardChange, BoardDomainError, ColumnId, DropTarget, Effect, MoveDelta, Point, Rect,
    RegionSnapshot, TaskId, collision,
};
use chrono::{DateTime, Utc};
use tracing::{debug, error};

/// Observable phase of the drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No drag in progress.
    Idle,
    /// A task has been picked up but no pointer move has arrived yet.
    Picked,
    /// The pointer has moved at least once since pick-up.
    Hovering,
}

/// Reducer tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Reorder within the current column while hovering instead of on release.
    pub live_same_column_reorder: bool,
}

/// State of an in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    task_id: TaskId,
    phase: DragPhase,
    baseline: Board,
    preview: Board,
    origin_column: ColumnId,
    origin_index: usize,
    hover_target: Option<DropTarget>,
}

impl ActiveDrag {
    /// Returns the dragged task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns the board snapshot taken at pick-up.
    #[must_use]
    pub const fn baseline(&self) -> &Board {
        &self.baseline
    }

    /// Returns the speculative board.
    #[must_use]
    pub const fn preview(&self) -> &Board {
        &self.preview
    }

    /// Returns the column and index the task was picked up from.
    #[must_use]
    pub const fn origin(&self) -> (&ColumnId, usize) {
        (&self.origin_column, self.origin_index)
    }

    /// Returns the most recently resolved hover target.
    #[must_use]
    pub const fn hover_target(&self) -> Option<&DropTarget> {
        self.hover_target.as_ref()
    }
}

/// Drag session: idle, or tracking one active drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Active(ActiveDrag),
}

impl DragSession {
    /// Returns the observable phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Active(drag) => drag.phase,
        }
    }

    /// Returns the active drag, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag> {
        match self {
            Self::Idle => None,
            Self::Active(drag) => Some(drag),
        }
    }

    /// Returns the speculative board of the active drag, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Board> {
        self.active().map(ActiveDrag::preview)
    }
}

/// Input to the drag reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// The user started dragging a task.
    Pick {
        /// Task being picked up.
        task_id: TaskId,
    },
    /// The pointer moved during a drag.
    Hover {
        /// Pointer position.
        pointer: Point,
        /// Bounds of the dragged element.
        dragged: Rect,
        /// Live regions for the current preview board.
        regions: RegionSnapshot,
    },
    /// The pointer was released.
    Release {
        /// Pointer position.
        pointer: Point,
        /// Bounds of the dragged element.
        dragged: Rect,
        /// Live regions for the current preview board.
        regions: RegionSnapshot,
        /// Commit timestamp used if the drop commits.
        at: DateTime<Utc>,
    },
    /// The drag was cancelled explicitly, e.g. with Escape.
    Cancel,
}

/// Result of one reducer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Authoritative board after the step.
    pub board: Board,
    /// Session after the step.
    pub session: DragSession,
    /// Effects for the shell to execute, in order.
    pub effects: Vec<Effect>,
}

impl Step {
    const fn quiet(board: Board, session: DragSession) -> Self {
        Self {
            board,
            session,
            effects: Vec::new(),
        }
    }
}

/// Advances the drag state machine by one event.
///
/// # Errors
///
/// Returns a contract violation when a task is picked while another drag is
/// active ([`BoardDomainError::DragInProgress`]), when a drag event arrives
/// with no active drag ([`BoardDomainError::NoActiveDrag`]), or when the
/// picked task or a resolved column is not on the board.
pub fn reduce(
    board: &Board,
    session: &DragSession,
    event: DragEvent,
    options: SessionOptions,
) -> Result<Step, BoardDomainError> {
    match (session, event) {
        (DragSession::Idle, DragEvent::Pick { task_id }) => pick(board, task_id),
        (DragSession::Active(drag), DragEvent::Pick { .. }) => {
            Err(BoardDomainError::DragInProgress(drag.task_id.clone()))
        }
        (DragSession::Idle, _) => Err(BoardDomainError::NoActiveDrag),
        (
            DragSession::Active(drag),
            DragEvent::Hover {
                pointer,
                dragged,
                regions,
            },
        ) => hover(board, drag, &regions, pointer, dragged, options),
        (
            DragSession::Active(drag),
            DragEvent::Release {
                pointer,
                dragged,
                regions,
                at,
            },
        ) => release(drag, &regions, pointer, dragged, at),
        (DragSession::Active(drag), DragEvent::Cancel) => Ok(cancel(drag)),
    }
}

fn pick(board: &Board, task_id: TaskId) -> Result<Step, BoardDomainError> {
    let (column_id, index) = board
        .locate(&task_id)
        .ok_or_else(|| BoardDomainError::UnknownTask(task_id.clone()))?;
    debug!(task_id = %task_id, column_id = %column_id, index, "task picked");
    let drag = ActiveDrag {
        origin_column: column_id.clone(),
        origin_index: index,
        task_id,
        phase: DragPhase::Picked,
        baseline: board.clone(),
        preview: board.clone(),
        hover_target: None,
    };
    Ok(Step::quiet(board.clone(), DragSession::Active(drag)))
}

fn hover(
    board: &Board,
    drag: &ActiveDrag,
    regions: &RegionSnapshot,
    pointer: Point,
    dragged: Rect,
    options: SessionOptions,
) -> Result<Step, BoardDomainError> {
    let mut next = drag.clone();
    next.phase = DragPhase::Hovering;
    next.hover_target = collision::resolve(regions, pointer, dragged)
        .map(|collision| collision.region.target().clone())
        .filter(|target| next.preview.column(target.column_id()).is_some());

    let mut effects = Vec::new();
    if let Some(target) = &next.hover_target {
        let (current_column, current_index) = next
            .preview
            .locate(&next.task_id)
            .ok_or_else(|| BoardDomainError::UnknownTask(next.task_id.clone()))?;
        let move_to = if target.column_id() == current_column {
            target
                .index()
                .filter(|index| options.live_same_column_reorder && *index != current_index)
        } else {
            Some(target.index().unwrap_or(usize::MAX))
        };
        if let Some(index) = move_to {
            next.preview = next
                .preview
                .with_task_moved(&next.task_id, target.column_id(), index)?;
            debug!(
                task_id = %next.task_id,
                column_id = %target.column_id(),
                index,
                "preview updated"
            );
            effects.push(Effect::Preview(next.preview.clone()));
        }
    }

    Ok(Step {
        board: board.clone(),
        session: DragSession::Active(next),
        effects,
    })
}

fn release(
    drag: &ActiveDrag,
    regions: &RegionSnapshot,
    pointer: Point,
    dragged: Rect,
    at: DateTime<Utc>,
) -> Result<Step, BoardDomainError> {
    let Some(collision) = collision::resolve(regions, pointer, dragged) else {
        debug!(task_id = %drag.task_id, "released outside any region");
        return Ok(cancel(drag));
    };
    let target = collision.region.target();

    let current_column = drag
        .preview
        .find_column_of(&drag.task_id)
        .ok_or_else(|| BoardDomainError::UnknownTask(drag.task_id.clone()))?;
    let dest_index = if target.column_id() == current_column {
        target.index()
    } else {
        Some(target.index().unwrap_or(usize::MAX))
    };
    let candidate = match dest_index {
        Some(index) => drag
            .preview
            .with_task_moved(&drag.task_id, target.column_id(), index),
        None => Ok(drag.preview.clone()),
    };
    let checked = candidate.and_then(|board| {
        verify_commit(&drag.baseline, &board)?;
        Ok(board)
    });
    let final_board = match checked {
        Ok(board) => board,
        Err(violation) => return Ok(discard(drag, &violation)),
    };

    let Some((to_column, to_index)) = final_board.locate(&drag.task_id) else {
        return Err(BoardDomainError::UnknownTask(drag.task_id.clone()));
    };
    let delta = MoveDelta {
        task_id: drag.task_id.clone(),
        from_column_id: drag.origin_column.clone(),
        from_index: drag.origin_index,
        to_column_id: to_column.clone(),
        to_index,
    };
    if delta.from_column_id == delta.to_column_id && delta.from_index == delta.to_index {
        return Ok(cancel(drag));
    }

    debug!(
        task_id = %delta.task_id,
        from_column = %delta.from_column_id,
        to_column = %delta.to_column_id,
        to_index = delta.to_index,
        "drag committed"
    );
    Ok(Step {
        board: final_board.clone(),
        session: DragSession::Idle,
        effects: vec![
            Effect::Persist(delta.clone()),
            Effect::Notify(BoardChange::Committed {
                board: final_board,
                delta,
                committed_at: at,
            }),
        ],
    })
}

fn discard(drag: &ActiveDrag, violation: &BoardDomainError) -> Step {
    error!(task_id = %drag.task_id, %violation, "discarding speculative move");
    Step {
        board: drag.baseline.clone(),
        session: DragSession::Idle,
        effects: vec![Effect::Notify(BoardChange::Discarded {
            board: drag.baseline.clone(),
            reason: violation.to_string(),
        })],
    }
}

fn cancel(drag: &ActiveDrag) -> Step {
    debug!(task_id = %drag.task_id, "drag cancelled");
    Step {
        board: drag.baseline.clone(),
        session: DragSession::Idle,
        effects: vec![Effect::Notify(BoardChange::Unchanged {
            board: drag.baseline.clone(),
        })],
    }
}

/// Checks the board invariants and that no card was gained or lost.
fn verify_commit(baseline: &Board, candidate: &Board) -> Result<(), BoardDomainError> {
    candidate.check_invariants()?;
    let same_cards = baseline.task_count() == candidate.task_count()
        && baseline
            .columns()
            .iter()
            .flat_map(|column| column.task_ids())
            .all(|task_id| candidate.task(task_id) == baseline.task(task_id));
    if same_cards {
        Ok(())
    } else {
        Err(BoardDomainError::InvariantViolation(
            "committed board does not hold the same cards as its baseline".to_owned(),
        ))
    }
}
