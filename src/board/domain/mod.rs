//! Domain model for board reconciliation.
//!
//! Everything in this module is pure and synchronous: board state, reorder
//! operations, collision resolution, and the drag session reducer. None of it
//! knows how regions are measured or how moves are persisted.

mod board;
mod change;
pub mod collision;
mod error;
mod geometry;
mod ids;
mod region;
pub mod reorder;
mod session;
mod task;

pub use board::{Board, Column, PersistedBoardData};
pub use change::{BoardChange, Effect, MoveDelta};
pub use collision::{Collision, CollisionTier};
pub use error::{BoardDomainError, ParsePriorityError};
pub use geometry::{Point, Rect};
pub use ids::{BoardId, ColumnId, TaskId};
pub use region::{DropTarget, Region, RegionSnapshot};
pub use session::{
    ActiveDrag, DragEvent, DragPhase, DragSession, SessionOptions, Step, reduce,
};
pub use task::{Priority, Task};
