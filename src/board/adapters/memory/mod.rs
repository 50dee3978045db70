//! In-memory adapters for tests and local deterministic flows.

mod sink;
mod task_store;

pub use sink::RecordingSink;
pub use task_store::InMemoryTaskStore;
