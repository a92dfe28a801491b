//! Registry node construction.
//!
//! Every constructor here that produces an identifiable object assigns it a fresh
//! [`RegistryId`]. Ids are never reassigned after construction.
//!
//! Classifications and external identifiers come in two call shapes:
//! - *unattached*: no back-reference yet; the owner is filled in later by
//!   [`new_extrinsic_object`] or by [`crate::wiring`].
//! - *attached*: the owner is known up front and the back-reference is set immediately.

use crate::catalog::XdsGuid;
use crate::model::{
    Classification, ClassificationKind, ExternalIdentifier, ExtrinsicObject, Identifiable,
    InternationalString, RegistryPackage, Slot,
};
use crate::wiring;
use xds_uuid::RegistryId;

/// Creates a document entry.
///
/// `name` is wrapped in a localized name only when it is present and non-empty. Every supplied
/// classification and external identifier is re-pointed at the new object's id, overwriting any
/// back-reference it already had.
pub fn new_extrinsic_object(
    mime_type: impl Into<String>,
    name: Option<&str>,
    object_type: &XdsGuid,
    slots: Vec<Slot>,
    classifications: Vec<Classification>,
    external_identifiers: Vec<ExternalIdentifier>,
) -> ExtrinsicObject {
    let mut object = ExtrinsicObject {
        id: RegistryId::new(),
        mime_type: mime_type.into(),
        object_type: object_type.urn(),
        name: InternationalString::from_optional(name),
        slots,
        classifications,
        external_identifiers,
    };

    wiring::claim_attachments(&mut object);
    object
}

/// Creates a document entry with slots only.
pub fn new_extrinsic_object_with_slots(
    mime_type: impl Into<String>,
    name: Option<&str>,
    object_type: &XdsGuid,
    slots: Vec<Slot>,
) -> ExtrinsicObject {
    new_extrinsic_object(mime_type, name, object_type, slots, Vec::new(), Vec::new())
}

/// Creates an empty submission set package.
pub fn new_registry_package() -> RegistryPackage {
    RegistryPackage {
        id: RegistryId::new(),
        name: None,
        slots: Vec::new(),
        classifications: Vec::new(),
        external_identifiers: Vec::new(),
    }
}

pub fn new_slot<I>(name: impl Into<String>, values: I) -> Slot
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Slot {
        name: name.into(),
        values: values.into_iter().map(Into::into).collect(),
    }
}

/// Creates an unattached scheme-based classification.
pub fn new_classification(
    scheme: &XdsGuid,
    node_representation: impl Into<String>,
    name: Option<&str>,
    slots: Vec<Slot>,
) -> Classification {
    Classification {
        id: RegistryId::new(),
        classified_object: None,
        kind: ClassificationKind::Scheme {
            classification_scheme: scheme.urn(),
            node_representation: node_representation.into(),
        },
        name: InternationalString::from_optional(name),
        slots,
    }
}

/// Creates a scheme-based classification already pointing at `classified_object`.
pub fn new_attached_classification(
    classified_object: &impl Identifiable,
    scheme: &XdsGuid,
    node_representation: impl Into<String>,
    name: Option<&str>,
    slots: Vec<Slot>,
) -> Classification {
    Classification {
        classified_object: Some(classified_object.id()),
        ..new_classification(scheme, node_representation, name, slots)
    }
}

/// Creates a node-based classification of `owner`, for example tagging a package as an
/// `XDSSubmissionSet`.
pub fn new_node_classification(
    owner: &impl Identifiable,
    classification_node: &XdsGuid,
) -> Classification {
    Classification {
        id: RegistryId::new(),
        classified_object: Some(owner.id()),
        kind: ClassificationKind::Node {
            classification_node: classification_node.urn(),
        },
        name: None,
        slots: Vec::new(),
    }
}

/// Creates an unattached external identifier.
pub fn new_external_identifier(
    scheme: &XdsGuid,
    value: impl Into<String>,
    name: Option<&str>,
) -> ExternalIdentifier {
    ExternalIdentifier {
        id: RegistryId::new(),
        registry_object: None,
        identification_scheme: scheme.urn(),
        value: value.into(),
        name: InternationalString::from_optional(name),
    }
}

/// Creates an external identifier already pointing at `registry_object`.
///
/// The display name is the scheme's catalog name when it has one.
pub fn new_attached_external_identifier(
    registry_object: &impl Identifiable,
    scheme: &XdsGuid,
    value: impl Into<String>,
) -> ExternalIdentifier {
    ExternalIdentifier {
        registry_object: Some(registry_object.id()),
        ..new_external_identifier(scheme, value, scheme.name())
    }
}
