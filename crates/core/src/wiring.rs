//! Relationship wiring between registry objects.
//!
//! Classifications and external identifiers point back at the object they describe
//! (`classifiedObject` / `registryObject`); associations are directed edges between two objects.
//! Every link is an id reference, so wiring only ever copies ids.

use crate::constants::SUBMISSION_SET_STATUS_SLOT;
use crate::factory::new_slot;
use crate::model::{Association, Classification, ExternalIdentifier, Identifiable, RegistryNode};
use xds_uuid::RegistryId;

/// Creates an association edge from `source` to `target`.
///
/// The association carries exactly one `SubmissionSetStatus` slot holding `status`, and
/// `association_type` is stored verbatim. Callers are expected to pass a submission set as the
/// source and a document entry as the target for a membership association; this is not enforced.
pub fn new_association(
    source: &impl Identifiable,
    target: &impl Identifiable,
    status: &str,
    association_type: &str,
) -> Association {
    Association {
        id: RegistryId::new(),
        association_type: association_type.to_owned(),
        source_object: source.id(),
        target_object: target.id(),
        slots: vec![new_slot(SUBMISSION_SET_STATUS_SLOT, [status])],
    }
}

/// Points `classification` at `owner` and adds it to the owner's classification list.
///
/// Any earlier back-reference is overwritten.
pub fn attach_classification<N: RegistryNode>(owner: &mut N, mut classification: Classification) {
    classification.classified_object = Some(owner.id());
    owner.classifications_mut().push(classification);
}

/// Points `identifier` at `owner` and adds it to the owner's external identifier list.
///
/// Any earlier back-reference is overwritten.
pub fn attach_external_identifier<N: RegistryNode>(
    owner: &mut N,
    mut identifier: ExternalIdentifier,
) {
    identifier.registry_object = Some(owner.id());
    owner.external_identifiers_mut().push(identifier);
}

/// Rewrites the back-reference of everything the node already owns so it points at the node.
pub(crate) fn claim_attachments<N: RegistryNode>(owner: &mut N) {
    let id = owner.id();
    for classification in owner.classifications_mut() {
        classification.classified_object = Some(id);
    }
    for identifier in owner.external_identifiers_mut() {
        identifier.registry_object = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        XDS_DOCUMENT_ENTRY, XDS_SUBMISSION_SET_CONTENT_TYPE, XDS_SUBMISSION_SET_PATIENT_ID,
    };
    use crate::factory::{
        new_classification, new_extrinsic_object_with_slots, new_external_identifier,
        new_registry_package,
    };

    #[test]
    fn test_new_association_links_source_and_target() {
        let package = new_registry_package();
        let document =
            new_extrinsic_object_with_slots("text/xml", None, &XDS_DOCUMENT_ENTRY, vec![]);

        let association = new_association(&package, &document, "Submitted", "HasMember");

        assert_eq!(association.source_object, package.id);
        assert_eq!(association.target_object, document.id);
        assert_eq!(association.association_type, "HasMember");
        assert_eq!(association.slots.len(), 1);
        assert_eq!(association.slots[0].name, "SubmissionSetStatus");
        assert_eq!(association.slots[0].values, vec!["Submitted".to_string()]);
        assert_ne!(association.id, package.id);
        assert_ne!(association.id, document.id);
    }

    #[test]
    fn test_attach_classification_overwrites_back_reference() {
        let mut package = new_registry_package();
        let mut classification =
            new_classification(&XDS_SUBMISSION_SET_CONTENT_TYPE, "34133-9", None, vec![]);
        classification.classified_object = Some(RegistryId::new());

        attach_classification(&mut package, classification);

        assert_eq!(package.classifications.len(), 1);
        assert_eq!(package.classifications[0].classified_object, Some(package.id));
    }

    #[test]
    fn test_attach_external_identifier_sets_registry_object() {
        let mut package = new_registry_package();
        let identifier =
            new_external_identifier(&XDS_SUBMISSION_SET_PATIENT_ID, "pid^^^&1.2.3&ISO", None);

        attach_external_identifier(&mut package, identifier);

        assert_eq!(package.external_identifiers.len(), 1);
        assert_eq!(
            package.external_identifiers[0].registry_object,
            Some(package.id)
        );
    }
}
