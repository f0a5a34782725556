//! Search matching engine for docsift.
//!
//! Two matching modes over document plain text:
//! - **Exact**: case-insensitive contiguous substring, non-overlapping
//! - **Interval**: ordered subsequence with a bounded gap between consecutive
//!   matched characters; overlapping matches allowed by design
//!
//! Matches are rendered as highlighted HTML snippets and ranked by span
//! tightness. All offsets in this crate are character offsets, not bytes;
//! case folding is a 1:1 per-character lowercase so offsets stay aligned
//! with the original text.

#![warn(missing_docs)]

pub mod cells;
mod fold;
mod highlight;
mod matcher;
mod rank;
mod snippet;

use docsift_document::Document;
pub use highlight::highlight_text;
pub use matcher::find_matches;
pub use rank::sort_results;
use serde::Serialize;
pub use snippet::{generate_snippet, text_to_html};

/// Options controlling a search call.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Maximum characters allowed between consecutive matched characters in
    /// interval mode. Ignored in exact mode.
    pub max_gap: usize,
    /// Exact substring mode instead of interval mode.
    pub is_exact: bool,
    /// Characters of context on each side of a match in the snippet.
    pub preview_range: usize,
}

/// A single discovered match within a document's content.
///
/// `positions` holds one strictly ascending character offset per query
/// character; in exact mode the offsets are contiguous from `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    /// Character offset of the first matched character.
    pub index: usize,
    /// Span length covering all matched positions (`last - first + 1`).
    pub length: usize,
    /// Character offset of every matched character.
    pub positions: Vec<usize>,
}

/// One search hit, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Id of the document the match was found in.
    pub document_id: u64,
    /// File name of the document.
    pub file_name: String,
    /// Full plain-text content of the document.
    pub content: String,
    /// Character offset where the match starts.
    pub match_index: usize,
    /// Span length of the match.
    pub match_length: usize,
    /// HTML snippet with the matched characters highlighted.
    pub highlighted_snippet: String,
}

/// Searches all persisted documents and returns results ranked by tightness.
///
/// A blank query returns no results without touching any document. Documents
/// that have not been assigned an id are skipped. The call is pure and
/// synchronous; callers own debouncing and discarding stale results.
pub fn search(query: &str, documents: &[Document], options: &SearchOptions) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for document in documents {
        let Some(document_id) = document.id else {
            continue;
        };

        for found in find_matches(&document.content, query, options) {
            let highlighted_snippet =
                generate_snippet(&document.content, &found, options.preview_range);
            results.push(SearchResult {
                document_id,
                file_name: document.file_name.clone(),
                content: document.content.clone(),
                match_index: found.index,
                match_length: found.length,
                highlighted_snippet,
            });
        }
    }

    sort_results(&results)
}
