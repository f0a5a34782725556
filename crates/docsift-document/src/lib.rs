//! Document model and DOCX content extraction for docsift.
//!
//! This crate handles the document side of docsift:
//! - The stored [`Document`] record (plain text plus styled HTML)
//! - An owned XML element tree parsed from `word/document.xml`
//! - Run and paragraph style extraction ([`RunStyle`], [`ParagraphStyle`])
//! - Reconstruction of parallel plain-text and HTML renderings

#![warn(missing_docs)]

mod classify;
mod error;
mod escape;
mod reconstruct;
mod style;
mod xml;

use chrono::{DateTime, Utc};
pub use classify::{NodeClass, classify};
pub use error::DocumentError;
pub use escape::escape_html;
pub use reconstruct::{DocContent, extract_content, reconstruct, wrap_text_with_style};
use serde::{Deserialize, Serialize};
pub use style::{
    Alignment, ParagraphStyle, RunStyle, extract_paragraph_style, extract_run_style,
};
pub use xml::{Element, parse_xml};

/// A document in the docsift corpus.
///
/// `content` is the plain text the search engine matches against; `html_content`
/// is the styled rendering produced once at ingestion and never re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned ordinal id. `None` until the document is persisted.
    pub id: Option<u64>,
    /// Original file name of the ingested document.
    pub file_name: String,
    /// Normalized plain text content.
    pub content: String,
    /// Styled HTML rendering of the content.
    pub html_content: String,
    /// When the document was ingested.
    pub date: DateTime<Utc>,
    /// Whether `html_content` carries styles recovered from the source file.
    pub has_original_styles: bool,
}

impl Document {
    /// Creates an unsaved document from ingestion output.
    pub fn new(file_name: String, content: String, html_content: String, styled: bool) -> Self {
        Self {
            id: None,
            file_name,
            content,
            html_content,
            date: Utc::now(),
            has_original_styles: styled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_no_id() {
        let doc = Document::new(
            "notes.txt".into(),
            "hello".into(),
            "<pre>hello</pre>".into(),
            false,
        );
        assert!(doc.id.is_none());
        assert_eq!(doc.file_name, "notes.txt");
        assert!(!doc.has_original_styles);
    }

    #[test]
    fn test_document_roundtrips_through_json() {
        let mut doc = Document::new("a.docx".into(), "text".into(), "<div></div>".into(), true);
        doc.id = Some(7);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, Some(7));
        assert_eq!(back.content, "text");
        assert!(back.has_original_styles);
    }
}
