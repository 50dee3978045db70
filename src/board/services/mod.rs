//! Application services for drag orchestration and commit persistence.

mod commit;
mod config;
mod controller;

pub use commit::{CommitCoordinator, CommitError, CommitReceipt};
pub use config::{CommitPolicy, ConfigError, DragConfig};
pub use controller::{
    BoardController, BoardControllerError, BoardControllerResult, ControllerPorts,
};
