//! Port contracts for board reconciliation.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notifier;
pub mod regions;
pub mod task_store;

pub use notifier::BoardChangeSink;
pub use regions::RegionProvider;
pub use task_store::{TaskStore, TaskStoreError, TaskStoreResult};
