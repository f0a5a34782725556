//! Whole-text highlighting for the document detail view.
//!
//! Unlike snippet highlighting this is independent of any specific match:
//! exact mode marks every non-overlapping occurrence, interval mode marks
//! every character drawn from the query's character set.

use std::collections::HashSet;

use docsift_document::escape_html;

use crate::fold::{fold_char, fold_chars};

/// Highlights query matches across the full text, returning HTML.
///
/// A blank query returns the escaped text unmarked. Open and close markers
/// are always balanced.
pub fn highlight_text(text: &str, query: &str, is_exact: bool) -> String {
    if query.trim().is_empty() {
        return escape_html(text);
    }
    if is_exact {
        highlight_exact(text, query)
    } else {
        highlight_interval(text, query)
    }
}

/// Wraps each non-overlapping case-insensitive occurrence in one marker.
fn highlight_exact(text: &str, query: &str) -> String {
    let original: Vec<char> = text.chars().collect();
    let folded = fold_chars(text);
    let folded_query = fold_chars(query);

    let mut out = String::with_capacity(text.len());
    let mut tail_start = 0;
    let mut offset = 0;

    while offset + folded_query.len() <= folded.len() {
        if folded[offset..offset + folded_query.len()] == folded_query[..] {
            let preceding: String = original[tail_start..offset].iter().collect();
            out.push_str(&escape_html(&preceding));
            let matched: String = original[offset..offset + folded_query.len()].iter().collect();
            out.push_str("<mark>");
            out.push_str(&escape_html(&matched));
            out.push_str("</mark>");
            offset += folded_query.len();
            tail_start = offset;
        } else {
            offset += 1;
        }
    }

    let tail: String = original[tail_start..].iter().collect();
    out.push_str(&escape_html(&tail));
    out
}

/// Marks every character whose folded form appears in the query's character
/// set. Intentionally coarser than any single interval match.
fn highlight_interval(text: &str, query: &str) -> String {
    let query_chars: HashSet<char> = query.chars().map(fold_char).collect();

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let escaped = escape_html(&ch.to_string());
        if query_chars.contains(&fold_char(ch)) {
            out.push_str("<mark>");
            out.push_str(&escaped);
            out.push_str("</mark>");
        } else {
            out.push_str(&escaped);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_escapes_only() {
        assert_eq!(highlight_text("a<b", "  ", true), "a&lt;b");
        assert_eq!(highlight_text("a<b", "", false), "a&lt;b");
    }

    #[test]
    fn test_exact_wraps_whole_occurrences() {
        let html = highlight_text("rust and Rust", "rust", true);
        assert_eq!(html, "<mark>rust</mark> and <mark>Rust</mark>");
    }

    #[test]
    fn test_exact_occurrences_do_not_overlap() {
        let html = highlight_text("aaa", "aa", true);
        assert_eq!(html.matches("<mark>").count(), 1);
    }

    #[test]
    fn test_exact_preserves_original_case_in_output() {
        let html = highlight_text("RuSt", "rust", true);
        assert!(html.contains("<mark>RuSt</mark>"));
    }

    #[test]
    fn test_interval_marks_query_character_set() {
        // Characters 'a' and 'b' marked wherever they occur.
        let html = highlight_text("abcab", "ab", false);
        assert_eq!(html.matches("<mark>").count(), 4);
        assert!(html.contains("<mark>a</mark><mark>b</mark>c"));
    }

    #[test]
    fn test_interval_set_is_deduplicated_and_case_insensitive() {
        let html = highlight_text("AxA", "aa", false);
        assert_eq!(html.matches("<mark>").count(), 2);
    }

    #[test]
    fn test_markers_are_balanced() {
        for (text, query, exact) in [
            ("the quick brown fox", "quick", true),
            ("the quick brown fox", "qbf", false),
            ("<html> & 'stuff'", "<&", false),
        ] {
            let html = highlight_text(text, query, exact);
            assert_eq!(
                html.matches("<mark>").count(),
                html.matches("</mark>").count()
            );
        }
    }

    #[test]
    fn test_no_match_is_fully_escaped() {
        assert_eq!(highlight_text("a<b", "zzz", true), "a&lt;b");
    }
}
