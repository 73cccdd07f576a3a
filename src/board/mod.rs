//! Team task board: members, prioritised task lists, completion history.
//!
//! The board is persisted as one JSON document. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the ordering/lifecycle rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
