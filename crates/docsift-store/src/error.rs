//! Error types for the document store.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or saving the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the store file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store file exists but could not be deserialized.
    #[error("store file {path} is corrupt: {message}")]
    Corrupt {
        /// Path to the corrupt store file.
        path: PathBuf,
        /// Reason reported by the deserializer.
        message: String,
    },

    /// No usable location for the default store file.
    #[error("could not determine a data directory for the document store")]
    NoDataDir,
}
