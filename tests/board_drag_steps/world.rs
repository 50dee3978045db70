//! Shared world state for board drag BDD scenarios.

use std::sync::Arc;

use kanboard::board::{
    adapters::{
        layout::ColumnLayoutProvider,
        memory::{InMemoryTaskStore, RecordingSink},
    },
    domain::{Board, BoardId, ColumnId, Point, Rect, TaskId},
    services::{BoardController, BoardControllerError, ControllerPorts, DragConfig},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Controller type used by the BDD world.
pub type TestController =
    BoardController<InMemoryTaskStore, ColumnLayoutProvider, RecordingSink, DefaultClock>;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    pub board: Board,
    pub store: InMemoryTaskStore,
    pub sink: RecordingSink,
    pub layout: ColumnLayoutProvider,
    pub controller: Option<TestController>,
    pub settle_result: Option<Result<usize, BoardControllerError>>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(BoardId::new()),
            store: InMemoryTaskStore::new(),
            sink: RecordingSink::new(),
            layout: ColumnLayoutProvider::new(),
            controller: None,
            settle_result: None,
        }
    }

    /// Returns the controller, creating it over the scenario board on first
    /// use.
    pub fn controller(&mut self) -> Result<&mut TestController, eyre::Report> {
        if self.controller.is_none() {
            self.store.insert_board(self.board.clone())?;
            self.controller = Some(BoardController::new(
                self.board.clone(),
                ControllerPorts {
                    store: Arc::new(self.store.clone()),
                    regions: Arc::new(self.layout),
                    sink: Arc::new(self.sink.clone()),
                    clock: Arc::new(DefaultClock),
                },
                DragConfig::default(),
            ));
        }
        self.controller
            .as_mut()
            .ok_or_else(|| eyre::eyre!("controller missing after construction"))
    }

    /// Returns the board currently shown to the user.
    pub fn visible_board(&self) -> &Board {
        self.controller
            .as_ref()
            .map_or(&self.board, TestController::visible_board)
    }

    /// Returns a pointer inside the column with `column_id`.
    pub fn column_pointer(&self, column_id: &ColumnId) -> Result<Point, eyre::Report> {
        let position = self
            .visible_board()
            .column_position(column_id)
            .ok_or_else(|| eyre::eyre!("unknown column {column_id}"))?;
        Ok(inside(self.layout.column_bounds(position)))
    }

    /// Returns a pointer inside card slot `index` of `column_id`.
    pub fn slot_pointer(&self, column_id: &ColumnId, index: usize) -> Result<Point, eyre::Report> {
        let position = self
            .visible_board()
            .column_position(column_id)
            .ok_or_else(|| eyre::eyre!("unknown column {column_id}"))?;
        Ok(inside(self.layout.card_bounds(position, index)))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a step argument into a task identifier.
pub fn parse_task(raw: &str) -> Result<TaskId, eyre::Report> {
    TaskId::new(raw).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))
}

/// Parses a step argument into a column identifier.
pub fn parse_column(raw: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::new(raw).map_err(|err| eyre::eyre!("invalid column id in scenario: {err}"))
}

/// Splits a comma-separated step argument into task identifiers.
pub fn parse_tasks(raw: &str) -> Result<Vec<TaskId>, eyre::Report> {
    raw.split(',').map(|part| parse_task(part.trim())).collect()
}

/// Bounds of the dragged card for a pointer at `pointer`.
pub const fn dragged_at(pointer: Point) -> Rect {
    Rect::new(pointer.x - 5, pointer.y - 5, 200, 60)
}

const fn inside(rect: Rect) -> Point {
    Point::new(rect.x + 5, rect.y + 5)
}
