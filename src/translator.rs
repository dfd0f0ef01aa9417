//! Schema translation
//!
//! Walks `types/xsd:schema` and turns every named `xsd:complexType` into a
//! [`RecordType`] and every `xsd:simpleType` into an [`EnumerationType`].
//! Records come first, then enumerations, each group in document order.
//!
//! Only the constructs below are understood; anything else inside a type is
//! ignored:
//!
//! - `xsd:sequence` of `xsd:element`
//! - `xsd:complexContent/xsd:extension` (one level, recorded by name)
//! - `xsd:restriction` with `xsd:enumeration` facets

use crate::config::TranslatorConfig;
use crate::definitions::{EnumerationType, RecordType, TypeDefinition, TypeDefinitionMember};
use crate::documents::{Document, Element};
use crate::error::{MalformedSchemaError, Result};
use crate::names::local_name;
use crate::types::{TypeMapper, TypeRef};
use tracing::{debug, instrument, trace};

/// `maxOccurs` value that marks a repeating element
const UNBOUNDED: &str = "unbounded";

/// Qualified schema element names for one prefix
#[derive(Debug, Clone)]
struct SchemaNames {
    schema: String,
    complex_type: String,
    simple_type: String,
    sequence: String,
    complex_content: String,
    extension: String,
    element: String,
    restriction: String,
    enumeration: String,
}

impl SchemaNames {
    fn new(config: &TranslatorConfig) -> Self {
        Self {
            schema: config.schema_name("schema"),
            complex_type: config.schema_name("complexType"),
            simple_type: config.schema_name("simpleType"),
            sequence: config.schema_name("sequence"),
            complex_content: config.schema_name("complexContent"),
            extension: config.schema_name("extension"),
            element: config.schema_name("element"),
            restriction: config.schema_name("restriction"),
            enumeration: config.schema_name("enumeration"),
        }
    }
}

/// Translates a WSDL node tree into type definitions
///
/// A translator holds no per-document state; one instance can be shared
/// and called from any number of threads.
#[derive(Debug, Clone)]
pub struct SchemaTranslator {
    config: TranslatorConfig,
    mapper: TypeMapper,
    names: SchemaNames,
}

impl SchemaTranslator {
    /// Create a translator for `config`
    pub fn new(config: TranslatorConfig) -> Self {
        let mapper = config.type_mapper();
        let names = SchemaNames::new(&config);
        Self {
            config,
            mapper,
            names,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Parse WSDL text and translate it
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn translate_str(&self, text: &str) -> Result<Vec<TypeDefinition>> {
        let document = Document::from_string_with_limits(text, &self.config.limits)?;
        self.translate(document.root())
    }

    /// Translate an already parsed document root
    pub fn translate(&self, root: &Element) -> Result<Vec<TypeDefinition>> {
        let types = root.first_child_named("types").ok_or_else(|| {
            MalformedSchemaError::new("missing 'types' element").with_path(&root.name)
        })?;
        let types_path = format!("{}/types", root.name);

        let schema = types.first_child_named(&self.names.schema).ok_or_else(|| {
            MalformedSchemaError::new(format!("missing '{}' element", self.names.schema))
                .with_path(&types_path)
        })?;
        let schema_path = format!("{}/{}", types_path, self.names.schema);

        let complex_types = schema.children_named(&self.names.complex_type);
        let simple_types = schema.children_named(&self.names.simple_type);
        self.config
            .limits
            .check_type_definitions(complex_types.len() + simple_types.len())?;

        let mut definitions: Vec<TypeDefinition> =
            Vec::with_capacity(complex_types.len() + simple_types.len());
        for node in complex_types {
            definitions.push(self.complex_type(node, &schema_path)?.into());
        }
        for node in simple_types {
            definitions.push(self.simple_type(node, &schema_path)?.into());
        }

        debug!(count = definitions.len(), "translated schema types");
        Ok(definitions)
    }

    fn complex_type(&self, node: &Element, parent_path: &str) -> Result<RecordType> {
        let name = required_attribute(node, "name", parent_path)?;
        let path = named_path(parent_path, &node.name, name);

        let mut base = None;
        let mut sequence_path = path.clone();
        let sequence = match node.first_child_named(&self.names.sequence) {
            Some(sequence) => Some(sequence),
            None => match node.first_child_named(&self.names.complex_content) {
                Some(content) => {
                    let content_path = format!("{}/{}", path, self.names.complex_content);
                    let extension =
                        content.first_child_named(&self.names.extension).ok_or_else(|| {
                            MalformedSchemaError::new(format!(
                                "missing '{}' element",
                                self.names.extension
                            ))
                            .with_path(&content_path)
                        })?;
                    sequence_path = format!("{}/{}", content_path, self.names.extension);
                    let base_name = required_attribute(extension, "base", &sequence_path)?;
                    base = Some(local_name(base_name).to_string());
                    extension.first_child_named(&self.names.sequence)
                }
                None => None,
            },
        };

        let members = match sequence {
            Some(sequence) => {
                let path = format!("{}/{}", sequence_path, self.names.sequence);
                self.sequence(sequence, &path)?
            }
            None => Vec::new(),
        };

        debug!(name, base = base.as_deref(), members = members.len(), "complex type");
        Ok(RecordType {
            name: name.to_string(),
            base,
            members,
        })
    }

    fn sequence(&self, node: &Element, path: &str) -> Result<Vec<TypeDefinitionMember>> {
        node.children_named(&self.names.element)
            .into_iter()
            .map(|element| self.member(element, path))
            .collect()
    }

    fn member(&self, node: &Element, parent_path: &str) -> Result<TypeDefinitionMember> {
        let name = required_attribute(node, "name", parent_path)?;
        let path = named_path(parent_path, &node.name, name);

        let xml_type = required_attribute(node, "type", &path)?;
        let type_ref = self.map_type(xml_type, &path)?;
        let is_array = node.attribute("maxOccurs") == Some(UNBOUNDED);

        trace!(name, %type_ref, is_array, "member");
        Ok(TypeDefinitionMember {
            name: name.to_string(),
            type_ref,
            is_array,
        })
    }

    fn simple_type(&self, node: &Element, parent_path: &str) -> Result<EnumerationType> {
        let name = required_attribute(node, "name", parent_path)?;
        let path = named_path(parent_path, &node.name, name);

        let restriction = node
            .first_child_named(&self.names.restriction)
            .ok_or_else(|| {
                MalformedSchemaError::new(format!(
                    "missing '{}' element",
                    self.names.restriction
                ))
                .with_path(&path)
            })?;
        let restriction_path = format!("{}/{}", path, self.names.restriction);

        let base_name = required_attribute(restriction, "base", &restriction_path)?;
        let base = self.map_type(base_name, &restriction_path)?;

        let enumerations = restriction
            .children_named(&self.names.enumeration)
            .into_iter()
            .map(|facet| {
                let facet_path = format!("{}/{}", restriction_path, facet.name);
                required_attribute(facet, "value", &facet_path).map(str::to_string)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(name, base = %base, values = enumerations.len(), "simple type");
        Ok(EnumerationType {
            name: name.to_string(),
            base,
            enumerations,
        })
    }

    fn map_type(&self, xml_type: &str, path: &str) -> Result<TypeRef> {
        self.mapper
            .map_type(xml_type)
            .map_err(|e| e.with_path(path).into())
    }
}

impl Default for SchemaTranslator {
    fn default() -> Self {
        Self::new(TranslatorConfig::default())
    }
}

fn required_attribute<'a>(node: &'a Element, attribute: &str, path: &str) -> Result<&'a str> {
    node.attribute(attribute).ok_or_else(|| {
        MalformedSchemaError::new(format!(
            "'{}' is missing required attribute '{}'",
            node.name, attribute
        ))
        .with_path(path)
        .into()
    })
}

fn named_path(parent: &str, element: &str, name: &str) -> String {
    format!("{}/{}[@name='{}']", parent, element, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Primitive;

    fn wrap(schema_body: &str) -> String {
        format!(
            "<definitions><types><xsd:schema>{}</xsd:schema></types></definitions>",
            schema_body
        )
    }

    fn translate(schema_body: &str) -> Result<Vec<TypeDefinition>> {
        SchemaTranslator::default().translate_str(&wrap(schema_body))
    }

    #[test]
    fn test_missing_types() {
        let err = SchemaTranslator::default()
            .translate_str("<definitions/>")
            .unwrap_err();
        assert!(err.is_malformed_schema());
    }

    #[test]
    fn test_missing_schema() {
        let err = SchemaTranslator::default()
            .translate_str("<definitions><types><xs:schema/></types></definitions>")
            .unwrap_err();
        match err {
            Error::MalformedSchema(e) => assert_eq!(e.path.as_deref(), Some("definitions/types")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_schema() {
        assert!(translate("").unwrap().is_empty());
    }

    #[test]
    fn test_complex_type_without_content() {
        let defs = translate(r#"<xsd:complexType name="Empty"/>"#).unwrap();
        let record = defs[0].as_record().unwrap();
        assert_eq!(record.name, "Empty");
        assert!(record.base.is_none());
        assert!(record.members.is_empty());
    }

    #[test]
    fn test_sequence_members() {
        let defs = translate(
            r#"<xsd:complexType name="Order">
                 <xsd:sequence>
                   <xsd:element name="id" type="xsd:long"/>
                   <xsd:annotation/>
                   <xsd:element name="lines" type="tns:OrderLine" maxOccurs="unbounded"/>
                   <xsd:element name="notes" type="xsd:string" maxOccurs="5"/>
                 </xsd:sequence>
               </xsd:complexType>"#,
        )
        .unwrap();

        let members = &defs[0].as_record().unwrap().members;
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].type_ref, TypeRef::Primitive(Primitive::Number));
        assert!(!members[0].is_array);
        assert_eq!(members[1].type_ref, TypeRef::Named("OrderLine".to_string()));
        assert!(members[1].is_array);
        assert!(!members[2].is_array);
    }

    #[test]
    fn test_extension_strips_any_prefix() {
        let defs = translate(
            r#"<xsd:complexType name="Sub">
                 <xsd:complexContent><xsd:extension base="other:Base"/></xsd:complexContent>
               </xsd:complexType>"#,
        )
        .unwrap();

        let record = defs[0].as_record().unwrap();
        assert_eq!(record.base.as_deref(), Some("Base"));
        assert!(record.members.is_empty());
    }

    #[test]
    fn test_direct_sequence_wins_over_complex_content() {
        let defs = translate(
            r#"<xsd:complexType name="Mixed">
                 <xsd:sequence><xsd:element name="a" type="xsd:int"/></xsd:sequence>
                 <xsd:complexContent><xsd:extension base="tns:Base"/></xsd:complexContent>
               </xsd:complexType>"#,
        )
        .unwrap();

        let record = defs[0].as_record().unwrap();
        assert!(record.base.is_none());
        assert_eq!(record.members.len(), 1);
    }

    #[test]
    fn test_complex_content_without_extension() {
        let err = translate(
            r#"<xsd:complexType name="Broken"><xsd:complexContent/></xsd:complexType>"#,
        )
        .unwrap_err();
        assert!(err.is_malformed_schema());
    }

    #[test]
    fn test_extension_without_base() {
        let err = translate(
            r#"<xsd:complexType name="Broken">
                 <xsd:complexContent><xsd:extension><xsd:sequence/></xsd:extension></xsd:complexContent>
               </xsd:complexType>"#,
        )
        .unwrap_err();
        assert!(err.is_malformed_schema());
    }

    #[test]
    fn test_element_without_type() {
        let err = translate(
            r#"<xsd:complexType name="T"><xsd:sequence><xsd:element name="x"/></xsd:sequence></xsd:complexType>"#,
        )
        .unwrap_err();
        match err {
            Error::MalformedSchema(e) => {
                assert!(e.message.contains("'type'"));
                assert_eq!(
                    e.path.as_deref(),
                    Some("definitions/types/xsd:schema/xsd:complexType[@name='T']/xsd:sequence/xsd:element[@name='x']")
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_member_type() {
        let err = translate(
            r#"<xsd:complexType name="T"><xsd:sequence><xsd:element name="x" type="xsd:unknownType"/></xsd:sequence></xsd:complexType>"#,
        )
        .unwrap_err();
        match err {
            Error::UnknownType(e) => {
                assert_eq!(e.type_name, "xsd:unknownType");
                assert!(e.path.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_simple_type() {
        let defs = translate(
            r#"<xsd:simpleType name="Level">
                 <xsd:restriction base="xsd:int">
                   <xsd:enumeration value="1"/>
                   <xsd:enumeration value="2"/>
                 </xsd:restriction>
               </xsd:simpleType>"#,
        )
        .unwrap();

        let enumeration = defs[0].as_enumeration().unwrap();
        assert_eq!(enumeration.base, TypeRef::Primitive(Primitive::Number));
        assert_eq!(enumeration.enumerations, vec!["1", "2"]);
    }

    #[test]
    fn test_simple_type_without_enumerations() {
        let defs = translate(
            r#"<xsd:simpleType name="Code"><xsd:restriction base="xsd:string"/></xsd:simpleType>"#,
        )
        .unwrap();
        assert!(defs[0].as_enumeration().unwrap().enumerations.is_empty());
    }

    #[test]
    fn test_simple_type_without_restriction() {
        let err = translate(r#"<xsd:simpleType name="Code"/>"#).unwrap_err();
        assert!(err.is_malformed_schema());
    }

    #[test]
    fn test_unknown_restriction_base() {
        let err = translate(
            r#"<xsd:simpleType name="Code"><xsd:restriction base="xsd:token"/></xsd:simpleType>"#,
        )
        .unwrap_err();
        assert!(err.is_unknown_type());
    }

    #[test]
    fn test_records_before_enumerations() {
        let defs = translate(
            r#"<xsd:simpleType name="S1"><xsd:restriction base="xsd:string"/></xsd:simpleType>
               <xsd:complexType name="C1"/>
               <xsd:simpleType name="S2"><xsd:restriction base="xsd:string"/></xsd:simpleType>
               <xsd:complexType name="C2"/>"#,
        )
        .unwrap();

        let names: Vec<&str> = defs.iter().map(TypeDefinition::name).collect();
        assert_eq!(names, vec!["C1", "C2", "S1", "S2"]);
    }

    #[test]
    fn test_custom_prefixes() {
        let translator = SchemaTranslator::new(
            TranslatorConfig::new()
                .with_schema_prefix("xs")
                .with_custom_prefix("my"),
        );
        let defs = translator
            .translate_str(
                r#"<definitions><types><xs:schema>
                     <xs:complexType name="T"><xs:sequence>
                       <xs:element name="a" type="xs:boolean"/>
                       <xs:element name="b" type="my:Other"/>
                     </xs:sequence></xs:complexType>
                   </xs:schema></types></definitions>"#,
            )
            .unwrap();

        let members = &defs[0].as_record().unwrap().members;
        assert_eq!(members[0].type_ref.as_str(), "boolean");
        assert_eq!(members[1].type_ref.as_str(), "Other");
    }

    #[test]
    fn test_config_is_kept() {
        let translator =
            SchemaTranslator::new(TranslatorConfig::new().with_custom_prefix("svc"));
        assert_eq!(translator.config().custom_prefix, "svc");
        assert_eq!(translator.config().schema_prefix, "xsd");
    }

    #[test]
    fn test_type_definition_limit() {
        let config = TranslatorConfig::new().with_limits(crate::limits::Limits {
            max_type_definitions: 1,
            ..Default::default()
        });
        let err = SchemaTranslator::new(config)
            .translate_str(&wrap(r#"<xsd:complexType name="A"/><xsd:complexType name="B"/>"#))
            .unwrap_err();
        assert!(matches!(err, Error::LimitExceeded(_)));
    }
}
