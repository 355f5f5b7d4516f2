//! Local joke cache.
//!
//! A single-key store: one JSON file holding the most recently fetched batch, overwritten on
//! every successful fetch.

use crate::error::{ClientError, ClientResult};
use api_shared::Joke;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct JokeCache {
    path: PathBuf,
}

impl JokeCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached batch, or `None` if nothing has been cached yet.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::CacheRead` if the file exists but cannot be read, or
    /// `ClientError::CacheFormat` if it does not hold a joke batch.
    pub fn load(&self) -> ClientResult<Option<Vec<Joke>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClientError::CacheRead(e)),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(ClientError::CacheFormat)
    }

    /// Replace the cached batch with `jokes`.
    pub fn store(&self, jokes: &[Joke]) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(ClientError::CacheWrite)?;
        }

        let contents = serde_json::to_string(jokes).map_err(ClientError::CacheFormat)?;
        fs::write(&self.path, contents).map_err(ClientError::CacheWrite)
    }
}
