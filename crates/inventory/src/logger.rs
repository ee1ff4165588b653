//! JSON-file backed inventory log.
//!
//! Keeps an in-memory list of entries and can write it out as pretty-printed
//! JSON or replace it with the contents of a previously saved file. This is a
//! snapshot mechanism, not a durable store: writes overwrite the whole file.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while saving or loading the log file.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file {} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed log file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode log: {0}")]
    Encode(#[source] serde_json::Error),
}

/// In-memory log of entries with JSON save/load.
#[derive(Debug, Clone)]
pub struct InventoryLogger<T> {
    entries: Vec<T>,
    path: PathBuf,
}

impl<T> InventoryLogger<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> InventoryLogger<T> {
    /// Copy of the current entries.
    pub fn get_all(&self) -> Vec<T> {
        self.entries.clone()
    }
}

impl<T> InventoryLogger<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Write all entries to the log file, replacing any previous content.
    pub fn save_to_file(&self) -> Result<(), LoggerError> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(LoggerError::Encode)?;
        fs::write(&self.path, json).map_err(|source| LoggerError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), entries = self.entries.len(), "inventory log saved");
        Ok(())
    }

    /// Replace the in-memory entries with the file contents.
    ///
    /// On any failure the in-memory log ends up empty. Returns the number of
    /// loaded entries.
    pub fn load_from_file(&mut self) -> Result<usize, LoggerError> {
        self.entries.clear();

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoggerError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(LoggerError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        self.entries = serde_json::from_str(&raw).map_err(|source| LoggerError::Decode {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), entries = self.entries.len(), "inventory log loaded");
        Ok(self.entries.len())
    }
}
