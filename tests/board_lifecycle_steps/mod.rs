//! Step definitions for board ordering and lifecycle scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
