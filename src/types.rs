//! Primitive type mapping
//!
//! Maps XML Schema type references to target semantic types. Built-in
//! primitives go through a fixed lookup table; references written with the
//! local-types prefix become bare names pointing at another definition.

use crate::error::UnknownTypeError;
use crate::names::strip_prefix;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::fmt;

/// Target-side primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Text
    String,
    /// Any numeric value
    Number,
    /// True or false
    Boolean,
    /// Untyped / open content
    Any,
}

impl Primitive {
    /// Spelling used for member types
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Any => "any",
        }
    }

    /// Canonical spelling used for enumeration bases
    ///
    /// Only the string primitive differs from [`Primitive::as_str`], so
    /// generators can tell a string enumeration from a string field.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Primitive::String => "String",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of mapping a schema type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A built-in primitive
    Primitive(Primitive),
    /// Another declared type, by bare name (not checked for existence)
    Named(String),
}

impl TypeRef {
    /// Spelling used for member types
    pub fn as_str(&self) -> &str {
        match self {
            TypeRef::Primitive(p) => p.as_str(),
            TypeRef::Named(name) => name,
        }
    }

    /// Spelling used for enumeration bases
    pub fn canonical_name(&self) -> &str {
        match self {
            TypeRef::Primitive(p) => p.canonical_name(),
            TypeRef::Named(name) => name,
        }
    }

    /// Whether this refers to another declared type
    pub fn is_named(&self) -> bool {
        matches!(self, TypeRef::Named(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Built-in XML Schema primitives in use, keyed by local name
static PRIMITIVES: Lazy<IndexMap<&'static str, Primitive>> = Lazy::new(|| {
    IndexMap::from([
        ("string", Primitive::String),
        ("double", Primitive::Number),
        ("int", Primitive::Number),
        ("long", Primitive::Number),
        ("boolean", Primitive::Boolean),
        ("date", Primitive::String),
        ("time", Primitive::Number),
        ("dateTime", Primitive::String),
        ("base64Binary", Primitive::Any),
        ("anyType", Primitive::Any),
    ])
});

/// Local names of every built-in primitive the mapper knows, in table order
pub fn builtin_type_names() -> impl Iterator<Item = &'static str> {
    PRIMITIVES.keys().copied()
}

/// Look up a built-in primitive by local name
pub fn builtin_primitive(local_name: &str) -> Option<Primitive> {
    PRIMITIVES.get(local_name).copied()
}

/// Maps schema type references using a pair of prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapper {
    schema_prefix: String,
    custom_prefix: String,
}

impl TypeMapper {
    /// Create a mapper for the given schema and local-types prefixes
    pub fn new(schema_prefix: impl Into<String>, custom_prefix: impl Into<String>) -> Self {
        Self {
            schema_prefix: schema_prefix.into(),
            custom_prefix: custom_prefix.into(),
        }
    }

    /// Map a type reference such as `xsd:int` or `tns:Widget`
    pub fn map_type(&self, xml_type: &str) -> std::result::Result<TypeRef, UnknownTypeError> {
        if let Some(primitive) =
            strip_prefix(xml_type, &self.schema_prefix).and_then(builtin_primitive)
        {
            return Ok(TypeRef::Primitive(primitive));
        }

        match strip_prefix(xml_type, &self.custom_prefix) {
            Some(local) => Ok(TypeRef::Named(local.to_string())),
            None => Err(UnknownTypeError::new(xml_type)),
        }
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new("xsd", "tns")
    }
}
