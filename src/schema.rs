//! Artifact-type registry and property tables used by the parser and the
//! translators.
//!
//! A [`QuerySchema`] is built once by the caller, either from the built-in
//! S-RAMP tables via [`QuerySchema::default`] or from a TOML file, and passed
//! by reference into every parse and translation. It is read-only afterwards
//! and can be shared across threads.
//!
//! ```toml
//! default_function_prefix = "s-ramp"
//!
//! [namespaces]
//! s-ramp = "http://s-ramp.org/xmlns/2010/s-ramp"
//! fn = "http://www.w3.org/2005/xpath-functions"
//!
//! [core_properties.contentSize]
//! column = "sramp:contentSize"
//! kind = "number"
//!
//! [[artifact_types]]
//! name = "MavenPom"
//! model = "ext"
//! ```
//!
//! Sections left out of the file keep their built-in values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Namespace of the S-RAMP core properties and functions.
pub const SRAMP_NS: &str = "http://s-ramp.org/xmlns/2010/s-ramp";

/// Namespace of the XPath functions (`fn:matches`, `fn:not`).
pub const XPATH_FUNCTIONS_NS: &str = "http://www.w3.org/2005/xpath-functions";

/// Model used for artifact types that are not in the registry.
pub const EXTENDED_MODEL: &str = "ext";

const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("core", "Document"),
    ("core", "XmlDocument"),
    ("xsd", "XsdDocument"),
    ("xsd", "AttributeDeclaration"),
    ("xsd", "ElementDeclaration"),
    ("xsd", "SimpleTypeDeclaration"),
    ("xsd", "ComplexTypeDeclaration"),
    ("policy", "PolicyDocument"),
    ("policy", "PolicyExpression"),
    ("policy", "PolicyAttachment"),
    ("soapWsdl", "SoapAddress"),
    ("soapWsdl", "SoapBinding"),
    ("wsdl", "WsdlDocument"),
    ("wsdl", "WsdlService"),
    ("wsdl", "Port"),
    ("wsdl", "WsdlExtension"),
    ("wsdl", "Part"),
    ("wsdl", "Message"),
    ("wsdl", "Fault"),
    ("wsdl", "PortType"),
    ("wsdl", "Operation"),
    ("wsdl", "OperationInput"),
    ("wsdl", "OperationOutput"),
    ("wsdl", "Binding"),
    ("wsdl", "BindingOperation"),
    ("wsdl", "BindingOperationInput"),
    ("wsdl", "BindingOperationOutput"),
    ("wsdl", "BindingOperationFault"),
    ("serviceImplementation", "Organization"),
    ("serviceImplementation", "ServiceEndpoint"),
    ("serviceImplementation", "ServiceInstance"),
    ("serviceImplementation", "ServiceOperation"),
    ("user", "UserDefined"),
    ("soa", "HumanActor"),
    ("soa", "Choreography"),
    ("soa", "ChoreographyProcess"),
    ("soa", "Collaboration"),
    ("soa", "CollaborationProcess"),
    ("soa", "Composition"),
    ("soa", "Effect"),
    ("soa", "Element"),
    ("soa", "Event"),
    ("soa", "InformationType"),
    ("soa", "Orchestration"),
    ("soa", "OrchestrationProcess"),
    ("soa", "Policy"),
    ("soa", "PolicySubject"),
    ("soa", "Process"),
    ("soa", "Service"),
    ("soa", "ServiceContract"),
    ("soa", "ServiceComposition"),
    ("soa", "ServiceInterface"),
    ("soa", "System"),
    ("soa", "Task"),
    ("ext", "ExtendedArtifactType"),
    ("ext", "ExtendedDocument"),
];

const BUILTIN_PROPERTIES: &[(&str, &str, PropertyKind)] = &[
    ("createdBy", "jcr:createdBy", PropertyKind::Text),
    ("version", "version", PropertyKind::Text),
    ("uuid", "sramp:uuid", PropertyKind::Text),
    ("createdTimestamp", "jcr:created", PropertyKind::Date),
    ("lastModifiedTimestamp", "jcr:lastModified", PropertyKind::Date),
    ("lastModifiedBy", "jcr:lastModifiedBy", PropertyKind::Text),
    ("description", "sramp:description", PropertyKind::Text),
    ("name", "sramp:name", PropertyKind::Text),
    ("contentType", "sramp:contentType", PropertyKind::Text),
    ("contentSize", "sramp:contentSize", PropertyKind::Number),
    ("contentHash", "sramp:contentHash", PropertyKind::Text),
    ("contentEncoding", "sramp:contentEncoding", PropertyKind::Text),
    ("extendedType", "sramp:extendedType", PropertyKind::Text),
    ("ncName", "sramp:ncName", PropertyKind::Text),
    ("namespace", "sramp:namespace", PropertyKind::Text),
    ("targetNamespace", "sramp:targetNamespace", PropertyKind::Text),
    ("style", "sramp:style", PropertyKind::Text),
    ("transport", "sramp:transport", PropertyKind::Text),
    ("soapLocation", "sramp:soapLocation", PropertyKind::Text),
    ("derived", "sramp:derived", PropertyKind::Boolean),
];

/// Value kind of a property column. Decides which comparison operators the
/// column accepts and whether date literals are cast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
}

impl PropertyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Text => "text",
            PropertyKind::Number => "number",
            PropertyKind::Date => "date",
            PropertyKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTypeDef {
    pub name: String,
    pub model: String,
}

/// Storage column of a reserved property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreProperty {
    pub column: String,
    #[serde(default)]
    pub kind: PropertyKind,
}

/// Resolved storage column for any property name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyColumn {
    pub column: String,
    pub kind: PropertyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySchema {
    /// Prefix to namespace URI
    pub namespaces: BTreeMap<String, String>,

    /// Prefix assumed for function calls written without one
    pub default_function_prefix: String,

    pub artifact_types: Vec<ArtifactTypeDef>,

    /// Reserved property name to column
    pub core_properties: BTreeMap<String, CoreProperty>,

    /// Column prefix for user-defined properties
    pub custom_property_prefix: String,

    /// Column prefix for relationship and target "other attributes"
    pub other_attribute_prefix: String,
}

impl Default for QuerySchema {
    fn default() -> Self {
        let namespaces = [
            ("s-ramp", SRAMP_NS),
            ("xp2", XPATH_FUNCTIONS_NS),
            ("fn", XPATH_FUNCTIONS_NS),
        ]
        .into_iter()
        .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
        .collect();

        let artifact_types = BUILTIN_TYPES
            .iter()
            .map(|(model, name)| ArtifactTypeDef {
                name: name.to_string(),
                model: model.to_string(),
            })
            .collect();

        let core_properties = BUILTIN_PROPERTIES
            .iter()
            .map(|(name, column, kind)| {
                (
                    name.to_string(),
                    CoreProperty {
                        column: column.to_string(),
                        kind: *kind,
                    },
                )
            })
            .collect();

        QuerySchema {
            namespaces,
            default_function_prefix: "s-ramp".to_string(),
            artifact_types,
            core_properties,
            custom_property_prefix: "sramp-properties".to_string(),
            other_attribute_prefix: "sramp-otherAttributes".to_string(),
        }
    }
}

impl QuerySchema {
    pub fn from_toml_str(text: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Model an artifact type belongs to, if the type is registered.
    pub fn model_of(&self, artifact_type: &str) -> Option<&str> {
        self.artifact_types
            .iter()
            .find(|t| t.name == artifact_type)
            .map(|t| t.model.as_str())
    }

    pub fn is_known_type(&self, artifact_type: &str) -> bool {
        self.model_of(artifact_type).is_some()
    }

    /// Column for a property in the S-RAMP namespace: the reserved column
    /// when there is one, otherwise a custom-property column.
    pub fn property_column(&self, name: &str) -> PropertyColumn {
        match self.core_properties.get(name) {
            Some(core) => PropertyColumn {
                column: core.column.clone(),
                kind: core.kind,
            },
            None => PropertyColumn {
                column: format!("{}:{}", self.custom_property_prefix, name),
                kind: PropertyKind::Text,
            },
        }
    }

    /// Column of a reserved property only; used for ordering.
    pub fn core_column(&self, name: &str) -> Option<&str> {
        self.core_properties.get(name).map(|p| p.column.as_str())
    }

    pub fn other_attribute_column(&self, key: &str) -> String {
        format!("{}:{}", self.other_attribute_prefix, key)
    }
}
