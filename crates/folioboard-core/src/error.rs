//! Error types for folioboard-core
//!
//! Snapshot loading is the only fallible surface; rendering never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for folioboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read snapshot: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid snapshot in {path}: {message}")]
    InvalidSnapshot { path: PathBuf, message: String },
}
