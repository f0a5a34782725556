//! Error types for file ingestion.
//!
//! Ingestion either returns a complete `ParseResult` or fails atomically with
//! one of these errors; callers never see a partial parse.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when ingesting a file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file extension is not one of pdf/docx/txt.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path of the rejected file.
        path: PathBuf,
    },

    /// Failed to read the file from disk.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The DOCX archive could not be opened or read.
    #[error("failed to open archive {path}: {message}")]
    Archive {
        /// Path of the archive.
        path: PathBuf,
        /// Reason reported by the zip reader.
        message: String,
    },

    /// The DOCX archive has no `word/document.xml` entry.
    #[error("{path} has no word/document.xml")]
    MissingDocumentXml {
        /// Path of the archive.
        path: PathBuf,
    },

    /// The file's content could not be parsed.
    #[error("parse failed for {path}: {message}")]
    Parse {
        /// Path of the unparseable file.
        path: PathBuf,
        /// Human-readable reason.
        message: String,
    },
}
