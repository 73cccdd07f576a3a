//! JSON file board persistence.

mod board;

pub use board::JsonFileBoardRepository;
