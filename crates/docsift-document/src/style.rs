//! Run and paragraph style extraction.
//!
//! Styles are read from the `w:rPr` / `w:pPr` property bags. Every field is
//! independently optional: a missing marker leaves the field unset rather than
//! defaulting it. Malformed numeric values are treated as absent.

use crate::xml::Element;

/// Named DOCX highlight colors mapped to CSS hex values.
///
/// Unrecognized names pass through as-is; the caller may then fail to render a
/// valid color, which is accepted behavior.
const HIGHLIGHT_COLORS: &[(&str, &str)] = &[
    ("yellow", "#FFFF00"),
    ("green", "#00FF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("blue", "#0000FF"),
    ("red", "#FF0000"),
    ("darkBlue", "#00008B"),
    ("darkCyan", "#008B8B"),
    ("darkGreen", "#006400"),
    ("darkMagenta", "#8B008B"),
    ("darkRed", "#8B0000"),
    ("darkYellow", "#808000"),
    ("darkGray", "#A9A9A9"),
    ("lightGray", "#D3D3D3"),
    ("black", "#000000"),
];

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
    /// Justified to both edges.
    Justify,
}

impl Alignment {
    /// The CSS `text-align` keyword for this alignment.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Character-level styling for a text run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStyle {
    /// Text color as `#RRGGBB`.
    pub color: Option<String>,
    /// Highlight color (CSS value).
    pub highlight: Option<String>,
    /// Shading fill color as `#RRGGBB`.
    pub background: Option<String>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Bold flag.
    pub bold: Option<bool>,
    /// Italic flag.
    pub italic: Option<bool>,
}

impl RunStyle {
    /// Returns true when no style field is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.highlight.is_none()
            && self.background.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
    }
}

/// Block-level styling for a paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Text alignment.
    pub alignment: Option<Alignment>,
    /// Left indentation in points.
    pub margin_left: Option<f32>,
    /// First-line indentation in points.
    pub text_indent: Option<f32>,
    /// Whether the paragraph is a list item.
    pub is_list: bool,
    /// 0-based list nesting level.
    pub list_level: Option<u32>,
}

/// Reads a `val`-style attribute from a named child of a property bag,
/// treating the `auto` sentinel as absent and prefixing with `#`.
fn hex_color(properties: &Element, child: &str, attribute: &str) -> Option<String> {
    let value = properties.find_child(child)?.attr(attribute)?;
    if value == "auto" {
        return None;
    }
    Some(format!("#{value}"))
}

/// Reads an on/off toggle such as `w:b` or `w:i`.
///
/// Presence of the marker means "on" unless its value is explicitly falsy,
/// per the common convention that an absent `val` attribute still means true.
fn toggle(properties: &Element, child: &str) -> Option<bool> {
    let element = properties.find_child(child)?;
    Some(!matches!(element.attr("val"), Some("0" | "false")))
}

/// Extracts the [`RunStyle`] from a run element (`w:r`).
pub fn extract_run_style(run: &Element) -> RunStyle {
    let Some(properties) = run.find_child("rPr") else {
        return RunStyle::default();
    };

    let highlight = properties
        .find_child("highlight")
        .and_then(|el| el.attr("val"))
        .map(|name| {
            HIGHLIGHT_COLORS
                .iter()
                .find(|(key, _)| *key == name)
                .map_or_else(|| name.to_string(), |(_, css)| (*css).to_string())
        });

    let font_size = properties
        .find_child("sz")
        .and_then(|el| el.attr("val"))
        .and_then(|value| value.parse::<f32>().ok())
        // Stored in half-points.
        .map(|half_points| half_points / 2.0);

    RunStyle {
        color: hex_color(properties, "color", "val"),
        highlight,
        background: hex_color(properties, "shd", "fill"),
        font_size,
        bold: toggle(properties, "b"),
        italic: toggle(properties, "i"),
    }
}

/// Reads an indentation attribute stored in twentieths of a point.
fn indent_points(indent: &Element, attribute: &str) -> Option<f32> {
    indent
        .attr(attribute)
        .and_then(|value| value.parse::<f32>().ok())
        .map(|twips| twips / 20.0)
}

/// Extracts the [`ParagraphStyle`] from a paragraph element (`w:p`).
pub fn extract_paragraph_style(paragraph: &Element) -> ParagraphStyle {
    let Some(properties) = paragraph.find_child("pPr") else {
        return ParagraphStyle::default();
    };

    let alignment = properties
        .find_child("jc")
        .and_then(|el| el.attr("val"))
        .and_then(|value| match value {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            "both" => Some(Alignment::Justify),
            _ => None,
        });

    let (margin_left, text_indent) = match properties.find_child("ind") {
        Some(indent) => (
            indent_points(indent, "left"),
            indent_points(indent, "firstLine"),
        ),
        None => (None, None),
    };

    let numbering = properties.find_child("numPr");
    let list_level = numbering
        .and_then(|num| num.find_child("ilvl"))
        .and_then(|el| el.attr("val"))
        .and_then(|value| value.parse::<u32>().ok());

    ParagraphStyle {
        alignment,
        margin_left,
        text_indent,
        is_list: numbering.is_some(),
        list_level,
    }
}
