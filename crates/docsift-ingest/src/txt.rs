//! Plain text file ingestion.

use std::{fs, path::Path};

use docsift_document::escape_html;

use crate::{IngestError, ParseResult};

/// Reads a UTF-8 text file; the HTML rendering is the escaped text in a
/// preformatted block.
pub(crate) fn parse_txt(path: &Path) -> Result<ParseResult, IngestError> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let html = format!("<pre>{}</pre>", escape_html(&text));

    Ok(ParseResult {
        text,
        html,
        has_original_styles: false,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_text_and_escaped_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "1 < 2 & true\nsecond line").unwrap();

        let result = parse_txt(&path).unwrap();
        assert_eq!(result.text, "1 < 2 & true\nsecond line");
        assert_eq!(result.html, "<pre>1 &lt; 2 &amp; true\nsecond line</pre>");
        assert!(!result.has_original_styles);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = parse_txt(Path::new("/nonexistent/nope.txt")).unwrap_err();
        assert!(matches!(err, IngestError::ReadFile { .. }));
    }
}
