//! Region providers computed from a board rather than measured on screen.
//!
//! [`ColumnLayoutProvider`] lays columns out left to right and cards top to
//! bottom with fixed sizes, which is enough to drive the engine from a
//! terminal renderer or from tests with synthetic geometry.

use crate::board::{
    domain::{Board, Point, Rect, Region, RegionSnapshot},
    ports::RegionProvider,
};

/// Fixed-size column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayoutProvider {
    origin: Point,
    column_width: u32,
    column_height: u32,
    column_gap: u32,
    header_height: u32,
    card_height: u32,
    card_gap: u32,
}

impl Default for ColumnLayoutProvider {
    fn default() -> Self {
        Self {
            origin: Point::new(0, 0),
            column_width: 200,
            column_height: 600,
            column_gap: 20,
            header_height: 40,
            card_height: 60,
            card_gap: 10,
        }
    }
}

impl ColumnLayoutProvider {
    /// Creates a layout with default sizes anchored at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the top-left corner of the board.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the column width and height.
    #[must_use]
    pub const fn with_column_size(mut self, width: u32, height: u32) -> Self {
        self.column_width = width;
        self.column_height = height;
        self
    }

    /// Sets the horizontal gap between columns.
    #[must_use]
    pub const fn with_column_gap(mut self, gap: u32) -> Self {
        self.column_gap = gap;
        self
    }

    /// Sets the header height, card height, and vertical gap between cards.
    #[must_use]
    pub const fn with_card_metrics(mut self, header: u32, height: u32, gap: u32) -> Self {
        self.header_height = header;
        self.card_height = height;
        self.card_gap = gap;
        self
    }

    /// Returns the bounds of the column at display position `position`.
    #[must_use]
    pub fn column_bounds(&self, position: usize) -> Rect {
        let x = step(
            self.origin.x,
            self.column_width.saturating_add(self.column_gap),
            position,
        );
        Rect::new(x, self.origin.y, self.column_width, self.column_height)
    }

    /// Returns the bounds of card slot `index` in the column at `position`.
    #[must_use]
    pub fn card_bounds(&self, position: usize, index: usize) -> Rect {
        let column = self.column_bounds(position);
        let top = step(self.origin.y, self.header_height, 1);
        let y = step(top, self.card_height.saturating_add(self.card_gap), index);
        Rect::new(column.x, y, self.column_width, self.card_height)
    }

    fn board_bounds(&self, columns: usize) -> Rect {
        let pitch = u64::from(self.column_width) + u64::from(self.column_gap);
        let count = u64::try_from(columns).unwrap_or(u64::MAX);
        let width = pitch
            .saturating_mul(count)
            .saturating_sub(u64::from(self.column_gap));
        Rect::new(
            self.origin.x,
            self.origin.y,
            u32::try_from(width).unwrap_or(u32::MAX),
            self.column_height,
        )
    }
}

/// Returns `base + pitch * count`, saturating at the `i32` range.
fn step(base: i32, pitch: u32, count: usize) -> i32 {
    let steps = i64::try_from(count).unwrap_or(i64::MAX);
    let offset = i64::from(pitch).saturating_mul(steps);
    let value = i64::from(base).saturating_add(offset);
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl RegionProvider for ColumnLayoutProvider {
    fn snapshot(&self, board: &Board) -> RegionSnapshot {
        let mut regions = Vec::new();
        for (position, column) in board.columns().iter().enumerate() {
            regions.push(Region::column(
                column.id().clone(),
                self.column_bounds(position),
            ));
            for (index, task_id) in column.task_ids().iter().enumerate() {
                regions.push(Region::task(
                    column.id().clone(),
                    task_id.clone(),
                    index,
                    self.card_bounds(position, index),
                ));
            }
        }
        RegionSnapshot::new(regions).with_board_bounds(self.board_bounds(board.columns().len()))
    }
}

/// Provider that returns the same snapshot regardless of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedRegionProvider {
    snapshot: RegionSnapshot,
}

impl FixedRegionProvider {
    /// Creates a provider returning `snapshot`.
    #[must_use]
    pub const fn new(snapshot: RegionSnapshot) -> Self {
        Self { snapshot }
    }
}

impl RegionProvider for FixedRegionProvider {
    fn snapshot(&self, _board: &Board) -> RegionSnapshot {
        self.snapshot.clone()
    }
}
