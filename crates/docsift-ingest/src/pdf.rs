//! PDF file ingestion.

use std::{fs, path::Path};

use docsift_document::escape_html;

use crate::{IngestError, ParseResult};

/// Extracts PDF text and renders it as escaped per-line blocks.
pub(crate) fn parse_pdf(path: &Path) -> Result<ParseResult, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| IngestError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let html = lines_to_html(&text);

    Ok(ParseResult {
        text,
        html,
        has_original_styles: false,
    })
}

/// Wraps each text line in a page-styled block, keeping empty lines visible.
fn lines_to_html(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::from("<div class=\"pdf-page\"><br></div>")
            } else {
                format!("<div class=\"pdf-page\">{}</div>", escape_html(line))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_to_html_escapes_and_preserves_blank_lines() {
        let html = lines_to_html("a<b\n\nlast");
        assert_eq!(
            html,
            "<div class=\"pdf-page\">a&lt;b</div>\n\
             <div class=\"pdf-page\"><br></div>\n\
             <div class=\"pdf-page\">last</div>"
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = parse_pdf(Path::new("/nonexistent/doc.pdf")).unwrap_err();
        assert!(matches!(err, IngestError::ReadFile { .. }));
    }

    #[test]
    fn test_garbage_bytes_fail_with_parse_reason() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let err = parse_pdf(&path).unwrap_err();
        assert!(matches!(err, IngestError::Parse { .. }));
    }
}
