//! Kanboard: drag-and-drop reconciliation engine for Kanban boards.
//!
//! This crate provides the pure state and algorithm layer behind a Kanban
//! board: ordered columns of tasks, collision resolution for drop targets,
//! a drag session state machine, and commit coordination with an external
//! task store.
//!
//! # Architecture
//!
//! Kanboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, layout)
//! - **Services**: Orchestration of the domain and ports
//!
//! # Modules
//!
//! - [`board`]: Board state, drag sessions, and commit coordination

pub mod board;
