//! Core error types for habitflow-core.
//!
//! The hierarchy is deliberately small: storage problems and import problems
//! are the only failures the core can hit. Lookups by id never error; a
//! missing habit or goal degrades to `None`/`false` at the call site.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Backup import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),

    /// Reading the persisted state blob failed
    #[error("Failed to read state from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the persisted state blob failed
    #[error("Failed to write state to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state could not be serialized
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised when importing a user-supplied backup document.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The document is not a valid state blob; prior state is left untouched
    #[error("Invalid backup document: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
