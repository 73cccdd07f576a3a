//! Repository port for loading and saving the whole board document.

use crate::board::domain::BoardDocument;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board document persistence contract.
///
/// The document is treated as one opaque blob: every save replaces the
/// previously stored document (last write wins).
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Loads the current board document.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the backing store
    /// cannot be read or [`BoardRepositoryError::Decode`] when its contents
    /// are not a valid board document.
    async fn load(&self) -> BoardRepositoryResult<BoardDocument>;

    /// Replaces the stored board document.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the backing store
    /// cannot be written.
    async fn save(&self, document: &BoardDocument) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// The stored document could not be parsed.
    #[error("stored board document is malformed: {0}")]
    Decode(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
