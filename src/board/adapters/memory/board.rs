//! In-memory repository holding a single board document.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::BoardDocument,
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
///
/// Clones share the same underlying document.
#[derive(Debug, Clone)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<BoardDocument>>,
}

impl InMemoryBoardRepository {
    /// Creates a repository holding `document`.
    #[must_use]
    pub fn new(document: BoardDocument) -> Self {
        Self {
            state: Arc::new(RwLock::new(document)),
        }
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn load(&self) -> BoardRepositoryResult<BoardDocument> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    async fn save(&self, document: &BoardDocument) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        document.clone_into(&mut *state);
        Ok(())
    }
}
