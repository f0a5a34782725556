//! File ingestion for docsift.
//!
//! Turns an uploaded PDF, DOCX, or TXT file into a [`ParseResult`]: a plain
//! text string used for search plus a parallel HTML rendering used for
//! display. DOCX goes through the styled parser in `docsift-document`, with a
//! plain streaming extraction as fallback; PDF and TXT produce escaped-text
//! HTML without original styles.

#![warn(missing_docs)]

mod docx;
mod error;
mod pdf;
mod txt;

use std::path::Path;

pub use error::IngestError;

/// Output of ingesting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Normalized plain text, the search engine's input.
    pub text: String,
    /// Styled HTML rendering for display.
    pub html: String,
    /// Whether `html` carries styles recovered from the source file.
    pub has_original_styles: bool,
}

/// Parses a file by its extension.
///
/// Supported: `pdf`, `docx`, `txt` (case-insensitive). Anything else is
/// [`IngestError::UnsupportedFileType`].
pub fn parse_file(path: &Path) -> Result<ParseResult, IngestError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "docx" => docx::parse_docx(path),
        "pdf" => pdf::parse_pdf(path),
        "txt" => txt::parse_txt(path),
        _ => Err(IngestError::UnsupportedFileType {
            path: path.to_path_buf(),
        }),
    }
}
