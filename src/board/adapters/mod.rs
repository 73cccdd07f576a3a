//! Persistence adapters for the board document.
//!
//! - [`memory::InMemoryBoardRepository`]: thread-safe in-memory storage for
//!   tests and embedding
//! - [`json_file::JsonFileBoardRepository`]: pretty-printed JSON file on disk

pub mod json_file;
pub mod memory;
