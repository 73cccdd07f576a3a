//! Board repository backed by a single pretty-printed JSON file.
//!
//! Every save rewrites the whole file: the document is written to a sibling
//! temporary file which is then renamed over the data file, so readers see
//! either the old or the new document. File IO runs on the blocking pool.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::board::{
    domain::BoardDocument,
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Board repository storing the document as JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonFileBoardRepository {
    dir: Arc<Dir>,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonFileBoardRepository {
    /// Opens a repository for the data file at `path`.
    ///
    /// Missing parent directories are created. The data file itself is not
    /// created until [`Self::ensure_initialized`] or the first save.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when `path` has no file
    /// name or its directory cannot be created or opened.
    pub fn open(path: &Utf8Path) -> BoardRepositoryResult<Self> {
        let file_name = path.file_name().ok_or_else(|| {
            BoardRepositoryError::persistence(io::Error::other(format!(
                "data file path {path} must include a file name"
            )))
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(BoardRepositoryError::persistence)?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(BoardRepositoryError::persistence)?;

        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.to_owned(),
            path: path.to_path_buf(),
        })
    }

    /// Returns the data file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Writes `initial` when the data file does not exist yet.
    ///
    /// Returns `true` when the file was created.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the file cannot be
    /// checked or written.
    pub async fn ensure_initialized(&self, initial: &BoardDocument) -> BoardRepositoryResult<bool> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let exists = run_blocking(move || match dir.metadata(&file_name) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(BoardRepositoryError::persistence(err)),
        })
        .await?;
        if exists {
            return Ok(false);
        }
        self.save(initial).await?;
        Ok(true)
    }
}

#[async_trait]
impl BoardRepository for JsonFileBoardRepository {
    async fn load(&self) -> BoardRepositoryResult<BoardDocument> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let contents = run_blocking(move || {
            dir.read_to_string(&file_name)
                .map_err(BoardRepositoryError::persistence)
        })
        .await?;
        serde_json::from_str(&contents).map_err(|err| BoardRepositoryError::Decode(err.to_string()))
    }

    async fn save(&self, document: &BoardDocument) -> BoardRepositoryResult<()> {
        let contents =
            serde_json::to_string_pretty(document).map_err(BoardRepositoryError::persistence)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || {
            let temp_name = format!("{file_name}.tmp");
            dir.write(&temp_name, contents)
                .and_then(|()| dir.rename(&temp_name, &dir, &file_name))
                .map_err(BoardRepositoryError::persistence)
        })
        .await
    }
}

/// Runs blocking file IO on the blocking thread pool.
async fn run_blocking<F, T>(f: F) -> BoardRepositoryResult<T>
where
    F: FnOnce() -> BoardRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|err| {
        BoardRepositoryError::persistence(io::Error::other(format!("task join error: {err}")))
    })?
}
