//! Node classification for the document tree walk.
//!
//! The reconstructor resolves each element's role once through [`classify`]
//! instead of comparing tag-name aliases at every call site.

use crate::xml::Element;

/// The role an element plays in the DOCX content model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// A paragraph (`w:p`).
    Paragraph,
    /// A table (`w:tbl`).
    Table,
    /// A table row (`w:tr`).
    Row,
    /// A table cell (`w:tc`).
    Cell,
    /// A text run (`w:r`).
    Run,
    /// An explicit line break (`w:br`).
    Break,
    /// A text node (`w:t`).
    Text,
    /// A transparent container (`w:sdt`, `w:sdtContent`, `w:txbxContent`)
    /// whose children are processed as if inline.
    Container,
    /// A property bag (`w:pPr`, `w:rPr`, ... anything ending in `Pr`), skipped.
    Properties,
    /// Anything else; recursed into defensively when it has children.
    Unknown,
}

/// Classifies an element by its normalized tag name.
pub fn classify(element: &Element) -> NodeClass {
    let name = element
        .name
        .rsplit(':')
        .next()
        .unwrap_or(&element.name)
        .to_ascii_lowercase();
    match name.as_str() {
        "p" => NodeClass::Paragraph,
        "tbl" => NodeClass::Table,
        "tr" => NodeClass::Row,
        "tc" => NodeClass::Cell,
        "r" => NodeClass::Run,
        "br" => NodeClass::Break,
        "t" => NodeClass::Text,
        "sdt" | "sdtcontent" | "txbxcontent" => NodeClass::Container,
        _ if name.ends_with("pr") => NodeClass::Properties,
        _ => NodeClass::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_xml;

    fn classify_tag(xml: &str) -> NodeClass {
        classify(&parse_xml(xml).unwrap())
    }

    #[test]
    fn test_classifies_namespaced_and_bare_names() {
        assert_eq!(classify_tag("<w:p/>"), NodeClass::Paragraph);
        assert_eq!(classify_tag("<p/>"), NodeClass::Paragraph);
        assert_eq!(classify_tag("<w:tbl/>"), NodeClass::Table);
        assert_eq!(classify_tag("<w:r/>"), NodeClass::Run);
        assert_eq!(classify_tag("<br/>"), NodeClass::Break);
        assert_eq!(classify_tag("<w:t/>"), NodeClass::Text);
    }

    #[test]
    fn test_containers_are_flattened_kinds() {
        assert_eq!(classify_tag("<w:sdt/>"), NodeClass::Container);
        assert_eq!(classify_tag("<w:sdtContent/>"), NodeClass::Container);
        assert_eq!(classify_tag("<w:txbxContent/>"), NodeClass::Container);
    }

    #[test]
    fn test_property_bags_are_skipped() {
        assert_eq!(classify_tag("<w:pPr/>"), NodeClass::Properties);
        assert_eq!(classify_tag("<w:rPr/>"), NodeClass::Properties);
        assert_eq!(classify_tag("<w:sectPr/>"), NodeClass::Properties);
    }

    #[test]
    fn test_unrecognized_names_are_unknown() {
        assert_eq!(classify_tag("<w:bookmarkStart/>"), NodeClass::Unknown);
        assert_eq!(classify_tag("<w:hyperlink/>"), NodeClass::Unknown);
    }
}
