//! Highlighted snippet generation around a match.

use std::collections::HashSet;

use docsift_document::escape_html;

use crate::MatchInfo;

/// Ellipsis marker prepended/appended when the window clips the content.
const ELLIPSIS: &str = "...";

/// Generates a line-preserving HTML snippet around one match.
///
/// The window spans `preview_range` characters on each side of the match.
/// `"..."` is prepended when the window starts after the content's first
/// character and appended when it ends before the last, and the match
/// positions are re-based onto the ellipsis-adjusted snippet before
/// highlighting.
pub fn generate_snippet(content: &str, found: &MatchInfo, preview_range: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    let start = found.index.saturating_sub(preview_range);
    let end = (found.index + found.length + preview_range).min(chars.len());

    let prefixed = start > 0;
    let suffixed = end < chars.len();

    let mut snippet: Vec<char> = Vec::with_capacity(end - start + 6);
    if prefixed {
        snippet.extend(ELLIPSIS.chars());
    }
    snippet.extend(&chars[start..end]);
    if suffixed {
        snippet.extend(ELLIPSIS.chars());
    }

    let shift = if prefixed { ELLIPSIS.len() } else { 0 };
    let positions: HashSet<usize> = found
        .positions
        .iter()
        .filter(|&&pos| pos >= start)
        .map(|&pos| pos - start + shift)
        .filter(|&pos| pos < snippet.len())
        .collect();

    text_to_html(&highlight_positions(&snippet, &positions))
}

/// Wraps each character at a highlighted position in its own marker.
fn highlight_positions(chars: &[char], positions: &HashSet<usize>) -> String {
    let mut out = String::with_capacity(chars.len());
    for (offset, &ch) in chars.iter().enumerate() {
        let escaped = escape_html(&ch.to_string());
        if positions.contains(&offset) {
            out.push_str("<mark>");
            out.push_str(&escaped);
            out.push_str("</mark>");
        } else {
            out.push_str(&escaped);
        }
    }
    out
}

/// Converts (already escaped or highlighted) text into line-preserving HTML.
///
/// Each line becomes its own block element so downstream CSS display rules
/// apply per line; genuinely empty lines render as a line break to retain
/// vertical rhythm.
pub fn text_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::from("<div class=\"docx-p\"><br></div>")
            } else {
                format!("<div class=\"docx-p\">{line}</div>")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_info(index: usize, length: usize) -> MatchInfo {
        MatchInfo {
            index,
            length,
            positions: (index..index + length).collect(),
        }
    }

    #[test]
    fn test_mid_string_window_gets_both_ellipses() {
        // content "0123456789", match "45", preview 2 -> window "234567".
        let snippet = generate_snippet("0123456789", &match_info(4, 2), 2);
        assert!(snippet.contains("...234"));
        assert!(snippet.contains("67..."));
        assert!(snippet.contains("<mark>4</mark>"));
        assert!(snippet.contains("<mark>5</mark>"));
    }

    #[test]
    fn test_window_at_content_start_has_no_leading_ellipsis() {
        let snippet = generate_snippet("0123456789", &match_info(0, 2), 2);
        assert!(!snippet.contains("...0"));
        assert!(snippet.ends_with("...</div>"));
    }

    #[test]
    fn test_window_covering_whole_content_has_no_ellipses() {
        let snippet = generate_snippet("abc", &match_info(0, 3), 10);
        assert!(!snippet.contains("..."));
    }

    #[test]
    fn test_marker_count_equals_positions() {
        let found = MatchInfo {
            index: 0,
            length: 7,
            positions: vec![0, 3, 6],
        };
        let snippet = generate_snippet("axxbxxc", &found, 5);
        assert_eq!(snippet.matches("<mark>").count(), 3);
        assert_eq!(snippet.matches("</mark>").count(), 3);
    }

    #[test]
    fn test_positions_shift_by_ellipsis_length() {
        // Match at offset 5 with preview 1: window [4, 8), prefixed.
        let snippet = generate_snippet("abcdefgh", &match_info(5, 2), 1);
        // "e" is context, "f" and "g" highlighted.
        assert!(snippet.contains("...e<mark>f</mark><mark>g</mark>h"));
    }

    #[test]
    fn test_snippet_escapes_html() {
        let snippet = generate_snippet("a<b>&c", &match_info(2, 1), 10);
        assert!(snippet.contains("&lt;"));
        assert!(snippet.contains("<mark>b</mark>"));
        assert!(snippet.contains("&amp;"));
    }

    #[test]
    fn test_newlines_become_block_elements() {
        let snippet = generate_snippet("one\ntwo", &match_info(0, 3), 10);
        assert_eq!(snippet.matches("<div class=\"docx-p\"").count(), 2);
    }

    #[test]
    fn test_text_to_html_empty_line_keeps_height() {
        assert_eq!(
            text_to_html("a\n\nb"),
            "<div class=\"docx-p\">a</div><div class=\"docx-p\"><br></div><div class=\"docx-p\">b</div>"
        );
    }

    #[test]
    fn test_text_to_html_empty_input() {
        assert_eq!(text_to_html(""), "");
    }
}
