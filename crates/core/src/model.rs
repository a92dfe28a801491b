//! ebRIM registry object graph types.
//!
//! These structs are the in-memory form of a request graph. Field names serialize with ebRIM
//! attribute names (`classifiedObject`, `nodeRepresentation`, ...) so an external XML or JSON
//! encoder can render them without a translation layer.
//!
//! Cross-object links are expressed by [`RegistryId`] reference, never by containment. The one
//! exception is that document entries and submission sets own the classifications and external
//! identifiers attached directly to them, mirroring how ebRIM nests them on the wire.

use serde::{Deserialize, Serialize};
use xds_uuid::RegistryId;

/// A named, multi-valued attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(rename = "valueList")]
    pub values: Vec<String>,
}

/// A single localized string value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// The ebRIM `InternationalString` wrapper used for object names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternationalString {
    #[serde(rename = "localizedString")]
    pub localized_strings: Vec<LocalizedString>,
}

impl InternationalString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            localized_strings: vec![LocalizedString {
                value: value.into(),
                lang: None,
            }],
        }
    }

    /// Wraps `name` only when it is present and non-empty.
    pub fn from_optional(name: Option<&str>) -> Option<Self> {
        name.filter(|n| !n.is_empty()).map(Self::new)
    }

    /// The first localized value.
    pub fn value(&self) -> Option<&str> {
        self.localized_strings.first().map(|s| s.value.as_str())
    }
}

/// A code drawn from a coding scheme, for example a LOINC type code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValue {
    pub code: String,
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl CodedValue {
    pub fn new(
        code: impl Into<String>,
        scheme: impl Into<String>,
        display_name: Option<&str>,
    ) -> Self {
        Self {
            code: code.into(),
            scheme: scheme.into(),
            display_name: display_name.map(str::to_owned),
        }
    }
}

/// One clinical document's metadata (the document entry), not its bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrinsicObject {
    pub id: RegistryId,
    pub mime_type: String,
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<InternationalString>,
    #[serde(rename = "slot", default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
    #[serde(rename = "classification", default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,
    #[serde(
        rename = "externalIdentifier",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub external_identifiers: Vec<ExternalIdentifier>,
}

/// A submission set: the package grouping the documents of one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryPackage {
    pub id: RegistryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<InternationalString>,
    #[serde(rename = "slot", default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
    #[serde(rename = "classification", default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,
    #[serde(
        rename = "externalIdentifier",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub external_identifiers: Vec<ExternalIdentifier>,
}

/// What a classification classifies by.
///
/// A classification is either scheme-based (an external coding scheme plus the code as node
/// representation) or node-based (a registry classification node such as `XDSSubmissionSet`),
/// never both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassificationKind {
    #[serde(rename_all = "camelCase")]
    Scheme {
        classification_scheme: String,
        node_representation: String,
    },
    #[serde(rename_all = "camelCase")]
    Node { classification_node: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub id: RegistryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classified_object: Option<RegistryId>,
    #[serde(flatten)]
    pub kind: ClassificationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<InternationalString>,
    #[serde(rename = "slot", default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
}

impl Classification {
    pub fn classification_scheme(&self) -> Option<&str> {
        match &self.kind {
            ClassificationKind::Scheme {
                classification_scheme,
                ..
            } => Some(classification_scheme),
            ClassificationKind::Node { .. } => None,
        }
    }

    pub fn node_representation(&self) -> Option<&str> {
        match &self.kind {
            ClassificationKind::Scheme {
                node_representation,
                ..
            } => Some(node_representation),
            ClassificationKind::Node { .. } => None,
        }
    }

    pub fn classification_node(&self) -> Option<&str> {
        match &self.kind {
            ClassificationKind::Node {
                classification_node,
            } => Some(classification_node),
            ClassificationKind::Scheme { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIdentifier {
    pub id: RegistryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_object: Option<RegistryId>,
    pub identification_scheme: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<InternationalString>,
}

/// A directed edge between two registry objects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub id: RegistryId,
    pub association_type: String,
    pub source_object: RegistryId,
    pub target_object: RegistryId,
    #[serde(rename = "slot", default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
}

/// Any object that may appear in a registry object list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryObject {
    ExtrinsicObject(ExtrinsicObject),
    RegistryPackage(RegistryPackage),
    Classification(Classification),
    ExternalIdentifier(ExternalIdentifier),
    Association(Association),
}

impl RegistryObject {
    /// The ebRIM element name for this kind of object.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ExtrinsicObject(_) => "ExtrinsicObject",
            Self::RegistryPackage(_) => "RegistryPackage",
            Self::Classification(_) => "Classification",
            Self::ExternalIdentifier(_) => "ExternalIdentifier",
            Self::Association(_) => "Association",
        }
    }
}

/// Anything with a registry id.
pub trait Identifiable {
    fn id(&self) -> RegistryId;
}

/// A node that owns directly attached classifications and external identifiers.
pub trait RegistryNode: Identifiable {
    fn classifications_mut(&mut self) -> &mut Vec<Classification>;
    fn external_identifiers_mut(&mut self) -> &mut Vec<ExternalIdentifier>;
}

macro_rules! impl_identifiable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identifiable for $ty {
                fn id(&self) -> RegistryId {
                    self.id
                }
            }
        )*
    };
}

impl_identifiable!(
    ExtrinsicObject,
    RegistryPackage,
    Classification,
    ExternalIdentifier,
    Association,
);

impl Identifiable for RegistryObject {
    fn id(&self) -> RegistryId {
        match self {
            Self::ExtrinsicObject(o) => o.id,
            Self::RegistryPackage(o) => o.id,
            Self::Classification(o) => o.id,
            Self::ExternalIdentifier(o) => o.id,
            Self::Association(o) => o.id,
        }
    }
}

impl RegistryNode for ExtrinsicObject {
    fn classifications_mut(&mut self) -> &mut Vec<Classification> {
        &mut self.classifications
    }

    fn external_identifiers_mut(&mut self) -> &mut Vec<ExternalIdentifier> {
        &mut self.external_identifiers
    }
}

impl RegistryNode for RegistryPackage {
    fn classifications_mut(&mut self) -> &mut Vec<Classification> {
        &mut self.classifications
    }

    fn external_identifiers_mut(&mut self) -> &mut Vec<ExternalIdentifier> {
        &mut self.external_identifiers
    }
}

macro_rules! impl_from_for_registry_object {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for RegistryObject {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_registry_object!(
    ExtrinsicObject,
    RegistryPackage,
    Classification,
    ExternalIdentifier,
    Association,
);
