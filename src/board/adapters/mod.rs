//! Adapter implementations for board ports.

pub mod layout;
pub mod memory;
