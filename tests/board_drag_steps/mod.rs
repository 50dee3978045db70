//! Step definitions for board drag BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
