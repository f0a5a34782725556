//! Parallel plain-text and HTML reconstruction of the document tree.
//!
//! The walk produces two outputs at once: a plain-text string whose newline
//! semantics the search engine depends on, and an HTML string carrying the
//! extracted styles. The two stay line-for-line consistent.

use crate::classify::{NodeClass, classify};
use crate::escape::escape_html;
use crate::style::{ParagraphStyle, RunStyle, extract_paragraph_style, extract_run_style};
use crate::xml::Element;

/// Parallel text and HTML renderings of a subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocContent {
    /// Plain text, used for search and indexing.
    pub text: String,
    /// Styled HTML, used for display.
    pub html: String,
}

/// The HTML emitted for an explicit line break.
const BREAK_HTML: &str = "<br class=\"docx-br\">";

/// Extracts content from the document root element.
///
/// Locates the `w:body` child and reconstructs it; a missing body degrades to
/// empty output rather than failing.
pub fn extract_content(root: &Element) -> DocContent {
    match root.find_child("body") {
        Some(body) => reconstruct(body),
        None => DocContent::default(),
    }
}

/// Recursively reconstructs a container node's paragraphs and tables.
///
/// Transparent containers (`sdt`, `sdtContent`, `txbxContent`) are flattened;
/// unknown elements with children are recursed into defensively; property bags
/// are skipped.
pub fn reconstruct(node: &Element) -> DocContent {
    let mut texts: Vec<String> = Vec::new();
    let mut htmls: Vec<String> = Vec::new();

    for child in &node.children {
        match classify(child) {
            NodeClass::Paragraph => {
                let content = paragraph(child);
                texts.push(content.text);
                htmls.push(content.html);
            }
            NodeClass::Table => {
                let content = table(child);
                texts.push(content.text);
                htmls.push(content.html);
            }
            NodeClass::Container => {
                let content = reconstruct(child);
                texts.push(content.text);
                htmls.push(content.html);
            }
            NodeClass::Properties => {}
            _ if child.has_children() => {
                let content = reconstruct(child);
                if !content.text.is_empty() || !content.html.is_empty() {
                    texts.push(content.text);
                    htmls.push(content.html);
                }
            }
            _ => {}
        }
    }

    DocContent {
        text: texts.join("\n"),
        html: htmls.join("\n"),
    }
}

/// Reconstructs a single paragraph, including its trailing newline.
fn paragraph(node: &Element) -> DocContent {
    let style = extract_paragraph_style(node);
    let mut text_parts: Vec<String> = Vec::new();
    let mut html_parts: Vec<String> = Vec::new();

    for child in &node.children {
        match classify(child) {
            NodeClass::Run => {
                let run_style = extract_run_style(child);
                let mut emitted = false;
                for run_child in &child.children {
                    match classify(run_child) {
                        NodeClass::Text => {
                            let text = run_child.text_content();
                            if !text.is_empty() {
                                html_parts.push(wrap_text_with_style(&text, &run_style));
                                text_parts.push(text);
                                emitted = true;
                            }
                        }
                        NodeClass::Break => {
                            text_parts.push(String::from("\n"));
                            html_parts.push(String::from(BREAK_HTML));
                            emitted = true;
                        }
                        _ => {}
                    }
                }
                // A run whose break is nested deeper than a direct child
                // still emits the break.
                if !emitted && !child.descendants("br").is_empty() {
                    text_parts.push(String::from("\n"));
                    html_parts.push(String::from(BREAK_HTML));
                }
            }
            NodeClass::Break => {
                text_parts.push(String::from("\n"));
                html_parts.push(String::from(BREAK_HTML));
            }
            _ => {}
        }
    }

    let mut text = text_parts.concat();
    // Every paragraph terminates its own line.
    text.push('\n');

    DocContent {
        text,
        html: wrap_paragraph_with_style(&html_parts.concat(), &style),
    }
}

/// Reconstructs a table: rows newline-joined in text, a bordered HTML table.
fn table(node: &Element) -> DocContent {
    let mut row_texts: Vec<String> = Vec::new();
    let mut row_htmls: Vec<String> = Vec::new();

    for row in node.descendants("tr") {
        let mut cell_texts: Vec<String> = Vec::new();
        let mut cell_htmls: Vec<String> = Vec::new();

        for cell in row.descendants("tc") {
            let mut paragraph_texts: Vec<String> = Vec::new();
            let mut paragraph_htmls: Vec<String> = Vec::new();

            for para in cell.descendants("p") {
                let content = paragraph(para);
                if !content.text.is_empty() {
                    paragraph_texts.push(content.text);
                    paragraph_htmls.push(content.html);
                }
            }

            cell_texts.push(paragraph_texts.join(" "));
            cell_htmls.push(format!(
                "<td style=\"border: 1px solid #e2e8f0; padding: 0.5em;\">{}</td>",
                paragraph_htmls.concat()
            ));
        }

        row_texts.push(cell_texts.join("\t"));
        row_htmls.push(format!("<tr>{}</tr>", cell_htmls.concat()));
    }

    DocContent {
        text: row_texts.join("\n"),
        html: format!(
            "<table style=\"width: 100%; border-collapse: collapse; margin: 1em 0;\">{}</table>",
            row_htmls.concat()
        ),
    }
}

/// Escapes run text and wraps it in a styled span.
///
/// When no style field is set the output is the escaped text with no wrapper.
pub fn wrap_text_with_style(text: &str, style: &RunStyle) -> String {
    let escaped = escape_html(text);
    if style.is_empty() {
        return escaped;
    }

    let mut declarations: Vec<String> = Vec::new();
    if let Some(color) = &style.color {
        declarations.push(format!("color: {color}"));
    }
    if let Some(highlight) = &style.highlight {
        declarations.push(format!("background-color: {highlight}"));
    }
    if let Some(background) = &style.background {
        declarations.push(format!("background-color: {background}"));
    }
    if let Some(size) = style.font_size {
        declarations.push(format!("font-size: {size}pt"));
    }
    if style.bold == Some(true) {
        declarations.push(String::from("font-weight: bold"));
    }
    if style.italic == Some(true) {
        declarations.push(String::from("font-style: italic"));
    }

    if declarations.is_empty() {
        return escaped;
    }
    format!("<span style=\"{}\">{escaped}</span>", declarations.join("; "))
}

/// Wraps assembled paragraph HTML in its block element.
///
/// The base style keeps line height and minimum height consistent so empty
/// paragraphs still occupy a line.
fn wrap_paragraph_with_style(content: &str, style: &ParagraphStyle) -> String {
    let mut declarations: Vec<String> = vec![
        String::from("display: block"),
        String::from("min-height: 1.5em"),
        String::from("margin-bottom: 0.8em"),
        String::from("line-height: 1.6"),
        String::from("word-wrap: break-word"),
    ];

    if let Some(alignment) = style.alignment {
        declarations.push(format!("text-align: {}", alignment.as_css()));
    }
    if let Some(margin) = style.margin_left {
        declarations.push(format!("margin-left: {margin}pt"));
    }
    if let Some(indent) = style.text_indent {
        declarations.push(format!("text-indent: {indent}pt"));
    }
    if style.is_list {
        declarations.push(String::from("display: list-item"));
        declarations.push(String::from("list-style-type: disc"));
        declarations.push(String::from("list-style-position: inside"));
        // Level-proportional indentation, unless an explicit left margin
        // already positions the item.
        if style.margin_left.is_none() {
            let indent = style.list_level.unwrap_or(0) * 20 + 20;
            declarations.push(format!("margin-left: {indent}pt"));
        }
    }

    let inner = if content.is_empty() { "<br>" } else { content };
    format!(
        "<div class=\"docx-p\" style=\"{}\">{inner}</div>",
        declarations.join("; ")
    )
}
