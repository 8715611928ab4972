//! Step definitions for task rewards BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
