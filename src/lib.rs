//! Teamboard: a small team task-tracking backend.
//!
//! Team members own ordered lists of scored tasks. Tasks can be reordered
//! within and across members, completed into a history, and restored. The
//! whole board lives in a single JSON document served over a JSON HTTP API.
//!
//! # Architecture
//!
//! Teamboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (memory, JSON file)
//!
//! # Modules
//!
//! - [`board`]: Board document, ordering rules, persistence, and services
//! - [`http`]: axum routes exposing the board service
//! - [`config`]: Layered server configuration

pub mod board;
pub mod config;
pub mod http;
