//! # wsdl-types
//!
//! Translate the XML Schema embedded in a WSDL document into a flat,
//! language-agnostic list of type definitions for code generators.
//!
//! ## Features
//!
//! - `xsd:complexType` with `xsd:sequence` members becomes a record
//! - `xsd:complexContent/xsd:extension` records its base by name
//! - `maxOccurs="unbounded"` marks array members
//! - `xsd:simpleType` restrictions become enumerations
//! - Output serializes to JSON via `serde`
//!
//! ## Example
//!
//! ```rust
//! use wsdl_types::{translate_schema, TypeDefinition};
//!
//! let wsdl = r#"
//! <definitions>
//!   <types>
//!     <xsd:schema>
//!       <xsd:complexType name="Point">
//!         <xsd:sequence>
//!           <xsd:element name="x" type="xsd:double"/>
//!           <xsd:element name="y" type="xsd:double"/>
//!         </xsd:sequence>
//!       </xsd:complexType>
//!     </xsd:schema>
//!   </types>
//! </definitions>"#;
//!
//! let types = translate_schema(wsdl)?;
//! assert_eq!(types[0].name(), "Point");
//! # Ok::<(), wsdl_types::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;
pub mod config;

// Node tree
pub mod names;
pub mod documents;

// Type model and mapping
pub mod types;
pub mod definitions;

// Translation
pub mod translator;

// Re-exports for convenience
pub use config::TranslatorConfig;
pub use definitions::{EnumerationType, RecordType, TypeDefinition, TypeDefinitionMember};
pub use documents::{Document, Element, Node};
pub use error::{Error, MalformedSchemaError, Result, UnknownTypeError};
pub use limits::Limits;
pub use translator::SchemaTranslator;
pub use types::{Primitive, TypeMapper, TypeRef};

/// Version of the wsdl-types library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse WSDL text and translate its schema with the default configuration
pub fn translate_schema(wsdl: &str) -> Result<Vec<TypeDefinition>> {
    SchemaTranslator::default().translate_str(wsdl)
}

/// Translate an already parsed WSDL root with the default configuration
pub fn translate(root: &Element) -> Result<Vec<TypeDefinition>> {
    SchemaTranslator::default().translate(root)
}
