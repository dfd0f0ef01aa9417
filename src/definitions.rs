//! Type definition model
//!
//! The normalized output of translation: one [`TypeDefinition`] per named
//! schema type, either a record with members or an enumeration. All values
//! serialize to the flat JSON shape code generators consume:
//!
//! ```json
//! {"name": "SubType", "base": "BaseType", "members": [{"name": "id", "type": "number", "isArray": false}]}
//! {"name": "Color", "base": "String", "enumerations": ["red", "green"]}
//! ```

use crate::types::TypeRef;
use serde::{Serialize, Serializer};

/// A translated schema type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeDefinition {
    /// From `xsd:complexType`
    Record(RecordType),
    /// From `xsd:simpleType`
    Enumeration(EnumerationType),
}

impl TypeDefinition {
    /// Name of the type
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Record(r) => &r.name,
            TypeDefinition::Enumeration(e) => &e.name,
        }
    }

    /// The record variant, if this is one
    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            TypeDefinition::Record(r) => Some(r),
            TypeDefinition::Enumeration(_) => None,
        }
    }

    /// The enumeration variant, if this is one
    pub fn as_enumeration(&self) -> Option<&EnumerationType> {
        match self {
            TypeDefinition::Enumeration(e) => Some(e),
            TypeDefinition::Record(_) => None,
        }
    }
}

impl From<RecordType> for TypeDefinition {
    fn from(record: RecordType) -> Self {
        TypeDefinition::Record(record)
    }
}

impl From<EnumerationType> for TypeDefinition {
    fn from(enumeration: EnumerationType) -> Self {
        TypeDefinition::Enumeration(enumeration)
    }
}

/// Record type: ordered members, optionally extending a base by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordType {
    /// Type name
    pub name: String,
    /// Extended type, prefix stripped. Its members are not copied in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Members in sequence order
    pub members: Vec<TypeDefinitionMember>,
}

/// Enumeration type: a restricted base with its allowed values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationType {
    /// Type name
    pub name: String,
    /// Restriction base
    #[serde(serialize_with = "serialize_canonical")]
    pub base: TypeRef,
    /// Allowed values in document order
    pub enumerations: Vec<String>,
}

/// One field of a record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinitionMember {
    /// Element name
    pub name: String,
    /// Mapped element type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// `maxOccurs="unbounded"`
    pub is_array: bool,
}

fn serialize_canonical<S: Serializer>(
    type_ref: &TypeRef,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(type_ref.canonical_name())
}
