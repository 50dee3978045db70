//! Droppable regions and drop targets.

use super::{ColumnId, Rect, TaskId};
use serde::{Deserialize, Serialize};

/// Where a dragged task would land.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// The whole list of a column; dropping here appends.
    Column {
        /// Target column.
        column_id: ColumnId,
    },
    /// The slot currently occupied by one task.
    Task {
        /// Column holding the slot.
        column_id: ColumnId,
        /// Task currently shown in the slot.
        task_id: TaskId,
        /// Index of the slot within the column.
        index: usize,
    },
}

impl DropTarget {
    /// Returns the column the target belongs to.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        match self {
            Self::Column { column_id } | Self::Task { column_id, .. } => column_id,
        }
    }

    /// Returns the slot index for task targets.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Column { .. } => None,
            Self::Task { index, .. } => Some(*index),
        }
    }

    /// Returns `true` for whole-column targets.
    #[must_use]
    pub const fn is_column(&self) -> bool {
        matches!(self, Self::Column { .. })
    }
}

/// A droppable region with its live screen bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    target: DropTarget,
    bounds: Rect,
}

impl Region {
    /// Creates a region.
    #[must_use]
    pub const fn new(target: DropTarget, bounds: Rect) -> Self {
        Self { target, bounds }
    }

    /// Creates a whole-column region.
    #[must_use]
    pub const fn column(column_id: ColumnId, bounds: Rect) -> Self {
        Self::new(DropTarget::Column { column_id }, bounds)
    }

    /// Creates a task-slot region.
    #[must_use]
    pub const fn task(column_id: ColumnId, task_id: TaskId, index: usize, bounds: Rect) -> Self {
        Self::new(
            DropTarget::Task {
                column_id,
                task_id,
                index,
            },
            bounds,
        )
    }

    /// Returns the drop target.
    #[must_use]
    pub const fn target(&self) -> &DropTarget {
        &self.target
    }

    /// Returns the screen bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// The set of regions live at one pointer tick, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    board_bounds: Option<Rect>,
    regions: Vec<Region>,
}

impl RegionSnapshot {
    /// Creates a snapshot with no outer board bounds.
    #[must_use]
    pub const fn new(regions: Vec<Region>) -> Self {
        Self {
            board_bounds: None,
            regions,
        }
    }

    /// Restricts resolution to pointers inside `bounds`.
    #[must_use]
    pub const fn with_board_bounds(mut self, bounds: Rect) -> Self {
        self.board_bounds = Some(bounds);
        self
    }

    /// Returns the outer board bounds, if known.
    #[must_use]
    pub const fn board_bounds(&self) -> Option<Rect> {
        self.board_bounds
    }

    /// Returns the regions in traversal order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
