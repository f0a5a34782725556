//! Error types for document parsing.

use thiserror::Error;

/// Errors that can occur when parsing document XML.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The XML could not be parsed into an element tree.
    #[error("XML parse failed: {message}")]
    Xml {
        /// Reason reported by the XML parser.
        message: String,
    },

    /// The XML parsed but contained no root element.
    #[error("document has no root element")]
    NoRoot,
}
