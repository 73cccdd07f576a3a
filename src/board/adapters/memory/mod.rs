//! In-memory board persistence.

mod board;

pub use board::InMemoryBoardRepository;
