//! Rendering helpers for CLI output.

use docsift_search::SearchResult;

/// ANSI escape sequences used for terminal styling.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a bold cyan section header.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats dimmed secondary text.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Converts a highlighted HTML snippet into terminal text.
///
/// Block wrappers become line breaks, highlight markers become yellow
/// styling, and HTML entities are unescaped.
pub fn snippet_to_terminal(html: &str) -> String {
    let text = html
        .replace("<div class=\"docx-p\">", "")
        .replace("</div>", "\n")
        .replace("<br>", "")
        .replace("<mark>", &format!("{}{}", colors::BOLD, colors::YELLOW))
        .replace("</mark>", colors::RESET);
    unescape_entities(text.trim_end_matches('\n'))
}

/// Reverses the HTML escaping applied by the snippet generator.
fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Prints search results as human-readable text.
pub fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("{}", dim("no matches"));
        return;
    }

    for result in results {
        println!(
            "{} {}",
            header(&result.file_name),
            dim(&format!(
                "(doc {}, span {} at {})",
                result.document_id, result.match_length, result.match_index
            ))
        );
        println!("  {}", snippet_to_terminal(&result.highlighted_snippet));
        println!();
    }
    println!("{}", dim(&format!("{} match(es)", results.len())));
}

/// Prints search results as pretty JSON.
///
/// Serialization of these result types cannot fail; an empty array is the
/// degenerate case.
pub fn print_results_json(results: &[SearchResult]) {
    match serde_json::to_string_pretty(results) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: failed to serialize results: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_to_terminal_unwraps_blocks_and_marks() {
        let html = "<div class=\"docx-p\">a<mark>b</mark>c</div><div class=\"docx-p\"><br></div>";
        let text = snippet_to_terminal(html);
        assert!(text.starts_with('a'));
        assert!(text.contains(colors::YELLOW));
        assert!(text.contains(colors::RESET));
        assert!(!text.contains("<div"));
        assert!(!text.contains("<mark>"));
    }

    #[test]
    fn test_entities_unescaped() {
        assert_eq!(unescape_entities("a &lt;b&gt; &amp; &#39;c&#39;"), "a <b> & 'c'");
    }
}
