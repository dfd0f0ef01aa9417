//! Limits applied while reading a WSDL document
//!
//! Size, depth and attribute counts are checked by
//! [`Document::from_string_with_limits`](crate::documents::Document::from_string_with_limits)
//! as the node tree is built. The type count is checked by the translator
//! once the `xsd:complexType` and `xsd:simpleType` children of the schema
//! are collected, before any of them is translated.

use crate::error::{Error, Result};

/// Bounds on a WSDL document and its embedded schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum element nesting depth, counting the document root as 1.
    /// A WSDL type member sits at depth 6 to 8 (`definitions/types/xsd:schema/...`).
    pub max_xml_depth: usize,

    /// Maximum length of the WSDL text in bytes, checked before parsing
    pub max_xml_size: usize,

    /// Maximum number of attributes on one element, `xmlns` declarations included
    pub max_attributes: usize,

    /// Maximum number of `xsd:complexType` plus `xsd:simpleType` children of the schema
    pub max_type_definitions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_depth: 1000,
            max_xml_size: 100 * 1024 * 1024, // 100 MB
            max_attributes: 1000,
            max_type_definitions: 100000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits for WSDL text from untrusted sources
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 100,
            max_xml_size: 10 * 1024 * 1024, // 10 MB
            max_attributes: 100,
            max_type_definitions: 10000,
        }
    }

    /// Limits for very large generated service descriptions
    pub fn permissive() -> Self {
        Self {
            max_xml_depth: 10000,
            max_xml_size: 1024 * 1024 * 1024, // 1 GB
            max_attributes: 10000,
            max_type_definitions: 1000000,
        }
    }

    /// Fail if an element would open at `depth`
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_xml_depth {
            Err(Error::LimitExceeded(format!(
                "XML depth {} exceeds maximum {}",
                depth, self.max_xml_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Fail if the WSDL text is `size` bytes long and that is too large
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        if size > self.max_xml_size {
            Err(Error::LimitExceeded(format!(
                "XML size {} bytes exceeds maximum {} bytes",
                size, self.max_xml_size
            )))
        } else {
            Ok(())
        }
    }

    /// Fail if one element carries `count` attributes and that is too many
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            Err(Error::LimitExceeded(format!(
                "Attribute count {} exceeds maximum {}",
                count, self.max_attributes
            )))
        } else {
            Ok(())
        }
    }

    /// Fail if the schema declares `count` types and that is too many
    pub fn check_type_definitions(&self, count: usize) -> Result<()> {
        if count > self.max_type_definitions {
            Err(Error::LimitExceeded(format!(
                "Type definition count {} exceeds maximum {}",
                count, self.max_type_definitions
            )))
        } else {
            Ok(())
        }
    }
}
