//! Progress persistence

use super::Progress;
use log::{debug, info};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("progress file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere progress can be loaded from and saved to
pub trait ProgressStore {
    /// Load saved progress; a store with nothing saved yields the default
    ///
    /// # Errors
    /// Returns [`ProgressError`] if saved data exists but cannot be read.
    fn load(&self) -> Result<Progress, ProgressError>;

    /// # Errors
    /// Returns [`ProgressError`] if the data cannot be written.
    fn save(&self, progress: &Progress) -> Result<(), ProgressError>;
}

/// Progress kept as a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Progress, ProgressError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                debug!("Loaded progress from {}", self.path.display());
                Ok(serde_json::from_str(&content)?)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No progress at {}, starting fresh", self.path.display());
                Ok(Progress::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, progress: &Progress) -> Result<(), ProgressError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, json)?;
        debug!("Saved progress to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and runs without a progress file
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Progress>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Progress, ProgressError> {
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, progress: &Progress) -> Result<(), ProgressError> {
        *self.saved.borrow_mut() = Some(progress.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Progress {
        let mut progress = Progress::default();
        progress.wordle.played = 4;
        progress.wordle.won = 3;
        progress.wordle.guess_distribution = vec![0, 1, 2];
        progress.bee.best_rank = Some("Solid".to_string());
        progress.connections.perfect = 1;
        progress
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("progress.json"));
        assert_eq!(store.load().unwrap(), Progress::default());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/dir/progress.json"));

        store.save(&sample()).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(matches!(store.load(), Err(ProgressError::Json(_))));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), Progress::default());

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }
}
