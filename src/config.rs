//! Translator configuration

use crate::limits::Limits;
use crate::names::prefixed;
use crate::types::TypeMapper;

/// Configuration for schema translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Prefix of schema elements and built-in types (`xsd:complexType`, `xsd:int`)
    pub schema_prefix: String,
    /// Prefix of references to locally declared types (`tns:Widget`)
    pub custom_prefix: String,
    /// Limits used when the translator parses text itself
    pub limits: Limits,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            schema_prefix: "xsd".to_string(),
            custom_prefix: "tns".to_string(),
            limits: Limits::default(),
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema prefix
    pub fn with_schema_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.schema_prefix = prefix.into();
        self
    }

    /// Set the local-types prefix
    pub fn with_custom_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_prefix = prefix.into();
        self
    }

    /// Set the parsing limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Qualified name of a schema element, e.g. `xsd:sequence`
    pub fn schema_name(&self, local: &str) -> String {
        prefixed(&self.schema_prefix, local)
    }

    /// Type mapper for this configuration's prefixes
    pub fn type_mapper(&self) -> TypeMapper {
        TypeMapper::new(self.schema_prefix.clone(), self.custom_prefix.clone())
    }
}
