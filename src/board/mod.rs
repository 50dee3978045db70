//! Drag-and-drop board reconciliation.
//!
//! This module keeps a board of ordered columns consistent while a task is
//! dragged across and within columns: speculative previews while hovering,
//! drop-target resolution under ambiguous geometry, and optimistic commit
//! with rollback when persistence fails. The module follows hexagonal
//! architecture:
//!
//! - Domain types, reorder operations, and the drag reducer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
