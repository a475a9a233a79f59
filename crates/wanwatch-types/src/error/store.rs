//! Persistence errors for the JSON file stores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or saving a store file.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum StoreError {
    /// File exists but could not be read
    #[error("Store read error at {path}: {message}")]
    Read {
        /// Filesystem path of the store file
        path: String,
        /// Description of the I/O failure
        message: String,
    },

    /// File contents are not a valid store document
    #[error("Store parse error at {path}: {message}")]
    Parse {
        /// Filesystem path of the store file
        path: String,
        /// Description of the parse failure
        message: String,
    },

    /// Serializing or replacing the file failed
    #[error("Store write error at {path}: {message}")]
    Write {
        /// Filesystem path of the store file
        path: String,
        /// Description of the write failure
        message: String,
    },
}

impl StoreError {
    pub fn read(path: &std::path::Path, e: &std::io::Error) -> Self {
        Self::Read { path: path.display().to_string(), message: e.to_string() }
    }

    pub fn parse(path: &std::path::Path, e: &serde_json::Error) -> Self {
        Self::Parse { path: path.display().to_string(), message: e.to_string() }
    }

    pub fn write(path: &std::path::Path, message: impl std::fmt::Display) -> Self {
        Self::Write { path: path.display().to_string(), message: message.to_string() }
    }
}
