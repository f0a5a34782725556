//! Owned XML element tree.
//!
//! DOCX XML arrives either with the `w:` namespace prefix or bare, depending on
//! the producer. All lookups here go through a name normalizer that strips any
//! namespace prefix and lowercases, so `w:pPr` and `pPr` are the same element.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::DocumentError;

/// An element in the parsed XML tree.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name as written in the source, prefix included.
    pub name: String,
    /// Attribute key/value pairs in source order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

/// Normalizes a tag or attribute name: strips any namespace prefix and lowercases.
fn local_name(name: &str) -> String {
    let bare = name.rsplit(':').next().unwrap_or(name);
    bare.to_ascii_lowercase()
}

impl Element {
    /// Creates an empty element with the given name.
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Returns true if this element's normalized name equals `name`.
    pub fn is_named(&self, name: &str) -> bool {
        local_name(&self.name) == local_name(name)
    }

    /// Returns the first direct child whose normalized name equals `name`.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is_named(name))
    }

    /// Returns all descendants (depth-first, document order) named `name`.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.is_named(name) {
                found.push(child);
            }
            found.extend(child.descendants(name));
        }
        found
    }

    /// Returns the value of the attribute with the given normalized name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let wanted = local_name(name);
        self.attributes
            .iter()
            .find(|(key, _)| local_name(key) == wanted)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenates the character data of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Returns true if this element has any element children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Converts a quick-xml start tag into an empty [`Element`].
fn element_from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<Element, DocumentError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| DocumentError::Xml {
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| DocumentError::Xml {
                message: e.to_string(),
            })?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Parses an XML string into an owned element tree, returning the root element.
pub fn parse_xml(xml: &str) -> Result<Element, DocumentError> {
    let mut reader = Reader::from_str(xml);
    // Virtual root so the stack is never empty while parsing.
    let mut stack: Vec<Element> = vec![Element::new(String::from("#document"))];

    loop {
        let event = reader.read_event().map_err(|e| DocumentError::Xml {
            message: e.to_string(),
        })?;
        match event {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::End(_) => {
                // check_end_names is on by default, so the top of the stack is
                // the element being closed.
                if stack.len() > 1 {
                    let element = stack.pop().ok_or(DocumentError::NoRoot)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(element);
                    }
                }
            }
            Event::Text(text) => {
                let unescaped = text.unescape().map_err(|e| DocumentError::Xml {
                    message: e.to_string(),
                })?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(DocumentError::Xml {
            message: String::from("unexpected end of document inside an open element"),
        });
    }
    let mut virtual_root = stack.pop().ok_or(DocumentError::NoRoot)?;
    if virtual_root.children.is_empty() {
        return Err(DocumentError::NoRoot);
    }
    Ok(virtual_root.children.remove(0))
}
