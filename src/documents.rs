//! Generic XML node tree
//!
//! This module turns WSDL text into an untyped tree of elements and text
//! leaves, and provides the two child lookups the translator is built on.
//! Names are kept exactly as written, prefix included.

use crate::error::{Error, Result};
use crate::limits::Limits;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A node of the tree: either an element or a run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element node
    Element(Element),
    /// Text content
    Text(String),
}

impl Node {
    /// The element behind this node, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// The text behind this node, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }
}

/// XML Element in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name as written (e.g. `xsd:complexType`)
    pub name: String,
    /// Attributes in source order
    pub attributes: IndexMap<String, String>,
    /// Child nodes in source order
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder-style text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Get an attribute value by its literal name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// First direct child element named `name`
    ///
    /// Only direct children are searched; text nodes never match.
    pub fn first_child_named(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|e| e.name == name)
    }

    /// All direct child elements named `name`, in document order
    pub fn children_named(&self, name: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(|e| e.name == name)
            .collect()
    }

    /// Concatenated direct text content
    pub fn text(&self) -> String {
        self.children.iter().filter_map(Node::as_text).collect()
    }
}

/// A parsed XML document
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse an XML document from a string with default limits
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::from_string_with_limits(xml, &Limits::default())
    }

    /// Parse an XML document from a string, enforcing `limits`
    pub fn from_string_with_limits(xml: &str, limits: &Limits) -> Result<Self> {
        limits.check_xml_size(xml.len())?;

        let mut reader = Reader::from_str(xml);

        let mut root: Option<Element> = None;
        let mut element_stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    limits.check_xml_depth(element_stack.len() + 1)?;
                    let element = Self::parse_element(&e, limits)?;
                    element_stack.push(element);
                }
                Ok(Event::End(_)) => {
                    if let Some(current) = element_stack.pop() {
                        Self::attach(current, &mut element_stack, &mut root)?;
                    }
                }
                Ok(Event::Empty(e)) => {
                    limits.check_xml_depth(element_stack.len() + 1)?;
                    let element = Self::parse_element(&e, limits)?;
                    Self::attach(element, &mut element_stack, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    if let Some(current) = element_stack.last_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::Xml(format!("Failed to unescape text: {}", e)))?;
                        if !text.trim().is_empty() {
                            current.children.push(Node::Text(text.into_owned()));
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = element_stack.last_mut() {
                        let text = String::from_utf8(e.into_inner().into_owned())
                            .map_err(|e| Error::Xml(format!("Invalid CDATA content: {}", e)))?;
                        current.children.push(Node::Text(text));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "Error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {} // Comments, processing instructions, declarations
            }
        }

        if let Some(open) = element_stack.last() {
            return Err(Error::Xml(format!("Unclosed element '{}'", open.name)));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| Error::Xml("XML document has no root element".to_string()))
    }

    /// Hand a finished element to its parent, or make it the root
    fn attach(
        element: Element,
        stack: &mut [Element],
        root: &mut Option<Element>,
    ) -> Result<()> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(Node::Element(element));
        } else if root.is_some() {
            return Err(Error::Xml(format!(
                "Multiple root elements: unexpected '{}'",
                element.name
            )));
        } else {
            *root = Some(element);
        }
        Ok(())
    }

    /// Parse element from BytesStart event
    fn parse_element(start: &BytesStart<'_>, limits: &Limits) -> Result<Element> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| Error::Xml(format!("Invalid element name: {}", e)))?
            .to_string();

        let mut element = Element::new(name);

        for attr_result in start.attributes() {
            let attr = attr_result
                .map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;

            let attr_name = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::Xml(format!("Invalid attribute name: {}", e)))?
                .to_string();

            let attr_value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(format!("Failed to unescape attribute value: {}", e)))?
                .into_owned();

            element.attributes.insert(attr_name, attr_value);
        }
        limits.check_attributes(element.attributes.len())?;

        Ok(element)
    }

    /// Get the root element
    pub fn root(&self) -> &Element {
        &self.root
    }
}
