//! Request graph consistency checks.
//!
//! A registry object list is one graph scope: every id must be unique within it, and every
//! classification, external identifier and association must reference an object in the same
//! list. Classifications and identifiers nested inside a node must reference that node. These
//! checks run when a request is assembled so an inconsistent graph never reaches the wire
//! encoder.

use crate::model::{Association, Classification, ExternalIdentifier, Identifiable, RegistryObject};
use crate::{XdsError, XdsResult};
use std::collections::HashSet;
use xds_uuid::RegistryId;

/// Validates identifier uniqueness and reference integrity for a flat registry object list.
///
/// # Errors
///
/// - [`XdsError::DuplicateId`] if two objects (including nested attachments) share an id.
/// - [`XdsError::UnattachedObject`] if a classification or external identifier has no
///   back-reference.
/// - [`XdsError::DanglingReference`] if any reference points outside the list.
/// - [`XdsError::ForeignAttachment`] if a nested classification or external identifier
///   references a node other than the one that owns it.
pub fn validate_registry_object_list(objects: &[RegistryObject]) -> XdsResult<()> {
    let ids = collect_ids(objects)?;

    for object in objects {
        match object {
            RegistryObject::ExtrinsicObject(o) => {
                check_attachments(&ids, o.id, &o.classifications, &o.external_identifiers)?;
            }
            RegistryObject::RegistryPackage(o) => {
                check_attachments(&ids, o.id, &o.classifications, &o.external_identifiers)?;
            }
            RegistryObject::Classification(c) => check_classification(&ids, c)?,
            RegistryObject::ExternalIdentifier(e) => check_external_identifier(&ids, e)?,
            RegistryObject::Association(a) => check_association(&ids, a)?,
        }
    }

    Ok(())
}

fn collect_ids(objects: &[RegistryObject]) -> XdsResult<HashSet<RegistryId>> {
    fn insert(ids: &mut HashSet<RegistryId>, id: RegistryId) -> XdsResult<()> {
        if ids.insert(id) {
            Ok(())
        } else {
            Err(XdsError::DuplicateId(id))
        }
    }

    let mut ids = HashSet::new();
    for object in objects {
        insert(&mut ids, object.id())?;

        let (classifications, identifiers) = match object {
            RegistryObject::ExtrinsicObject(o) => (&o.classifications, &o.external_identifiers),
            RegistryObject::RegistryPackage(o) => (&o.classifications, &o.external_identifiers),
            _ => continue,
        };
        for classification in classifications {
            insert(&mut ids, classification.id)?;
        }
        for identifier in identifiers {
            insert(&mut ids, identifier.id)?;
        }
    }

    Ok(ids)
}

fn check_attachments(
    ids: &HashSet<RegistryId>,
    owner: RegistryId,
    classifications: &[Classification],
    identifiers: &[ExternalIdentifier],
) -> XdsResult<()> {
    for c in classifications {
        check_classification(ids, c)?;
        check_owner("Classification", c.id, owner, c.classified_object)?;
    }
    for e in identifiers {
        check_external_identifier(ids, e)?;
        check_owner("ExternalIdentifier", e.id, owner, e.registry_object)?;
    }
    Ok(())
}

fn check_owner(
    kind: &'static str,
    object: RegistryId,
    owner: RegistryId,
    target: Option<RegistryId>,
) -> XdsResult<()> {
    match target {
        Some(target) if target != owner => Err(XdsError::ForeignAttachment {
            kind,
            object,
            owner,
            target,
        }),
        _ => Ok(()),
    }
}

fn check_reference(
    ids: &HashSet<RegistryId>,
    kind: &'static str,
    object: RegistryId,
    target: Option<RegistryId>,
) -> XdsResult<()> {
    let target = target.ok_or(XdsError::UnattachedObject { kind, object })?;
    if ids.contains(&target) {
        Ok(())
    } else {
        Err(XdsError::DanglingReference {
            kind,
            object,
            target,
        })
    }
}

fn check_classification(ids: &HashSet<RegistryId>, c: &Classification) -> XdsResult<()> {
    check_reference(ids, "Classification", c.id, c.classified_object)
}

fn check_external_identifier(ids: &HashSet<RegistryId>, e: &ExternalIdentifier) -> XdsResult<()> {
    check_reference(ids, "ExternalIdentifier", e.id, e.registry_object)
}

fn check_association(ids: &HashSet<RegistryId>, a: &Association) -> XdsResult<()> {
    check_reference(ids, "Association", a.id, Some(a.source_object))?;
    check_reference(ids, "Association", a.id, Some(a.target_object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        XDS_DOCUMENT_ENTRY, XDS_DOCUMENT_ENTRY_CLASS_CODE, XDS_DOCUMENT_ENTRY_UNIQUE_ID,
        XDS_SUBMISSION_SET,
    };
    use crate::factory::{
        new_attached_classification, new_attached_external_identifier, new_classification,
        new_external_identifier, new_extrinsic_object, new_extrinsic_object_with_slots,
        new_node_classification, new_registry_package,
    };
    use crate::wiring::new_association;

    #[test]
    fn test_accepts_consistent_graph() {
        let package = new_registry_package();
        let document = new_extrinsic_object(
            "text/xml",
            None,
            &XDS_DOCUMENT_ENTRY,
            vec![],
            vec![new_classification(&XDS_DOCUMENT_ENTRY_CLASS_CODE, "DS", None, vec![])],
            vec![new_external_identifier(&XDS_DOCUMENT_ENTRY_UNIQUE_ID, "1.2.3", None)],
        );
        let tag = new_node_classification(&package, &XDS_SUBMISSION_SET);
        let association = new_association(&package, &document, "Original", "HasMember");

        let objects: Vec<RegistryObject> = vec![
            package.into(),
            tag.into(),
            document.into(),
            association.into(),
        ];
        validate_registry_object_list(&objects).expect("graph should be valid");
    }

    #[test]
    fn test_rejects_association_to_missing_target() {
        let package = new_registry_package();
        let outside =
            new_extrinsic_object_with_slots("text/xml", None, &XDS_DOCUMENT_ENTRY, vec![]);
        let association = new_association(&package, &outside, "Original", "HasMember");
        let association_id = association.id;

        let objects: Vec<RegistryObject> = vec![package.into(), association.into()];
        let err = validate_registry_object_list(&objects).expect_err("should reject");
        assert!(matches!(
            err,
            XdsError::DanglingReference { kind: "Association", object, target }
                if object == association_id && target == outside.id
        ));
    }

    #[test]
    fn test_rejects_classification_of_missing_node() {
        let outside = new_registry_package();
        let tag = new_node_classification(&outside, &XDS_SUBMISSION_SET);

        let err =
            validate_registry_object_list(&[RegistryObject::from(tag)]).expect_err("should reject");
        assert!(matches!(
            err,
            XdsError::DanglingReference {
                kind: "Classification",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unattached_classification() {
        let classification = new_classification(&XDS_DOCUMENT_ENTRY_CLASS_CODE, "DS", None, vec![]);
        let objects = [RegistryObject::from(classification)];

        let err = validate_registry_object_list(&objects).expect_err("should reject");
        assert!(matches!(
            err,
            XdsError::UnattachedObject {
                kind: "Classification",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_nested_identifier_pointing_outside_graph() {
        let mut document =
            new_extrinsic_object_with_slots("text/xml", None, &XDS_DOCUMENT_ENTRY, vec![]);
        let mut identifier = new_external_identifier(&XDS_DOCUMENT_ENTRY_UNIQUE_ID, "1.2.3", None);
        identifier.registry_object = Some(RegistryId::new());
        document.external_identifiers.push(identifier);
        let objects = [RegistryObject::from(document)];

        let err = validate_registry_object_list(&objects).expect_err("should reject");
        assert!(matches!(
            err,
            XdsError::DanglingReference {
                kind: "ExternalIdentifier",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_nested_classification_owned_by_another_node() {
        let package = new_registry_package();
        let mut document =
            new_extrinsic_object_with_slots("text/xml", None, &XDS_DOCUMENT_ENTRY, vec![]);
        let classification = new_attached_classification(
            &package,
            &XDS_DOCUMENT_ENTRY_CLASS_CODE,
            "DS",
            None,
            vec![],
        );
        let classification_id = classification.id;
        document.classifications.push(classification);
        let document_id = document.id;

        let objects: Vec<RegistryObject> = vec![package.clone().into(), document.into()];
        let err = validate_registry_object_list(&objects).expect_err("should reject");
        assert!(matches!(
            err,
            XdsError::ForeignAttachment { kind: "Classification", object, owner, target }
                if object == classification_id && owner == document_id && target == package.id
        ));
    }

    #[test]
    fn test_rejects_nested_identifier_owned_by_another_node() {
        let mut package = new_registry_package();
        let document =
            new_extrinsic_object_with_slots("text/xml", None, &XDS_DOCUMENT_ENTRY, vec![]);
        let identifier =
            new_attached_external_identifier(&document, &XDS_DOCUMENT_ENTRY_UNIQUE_ID, "1.2.3");
        package.external_identifiers.push(identifier);

        let objects: Vec<RegistryObject> = vec![package.into(), document.into()];
        let err = validate_registry_object_list(&objects).expect_err("should reject");
        assert!(matches!(
            err,
            XdsError::ForeignAttachment {
                kind: "ExternalIdentifier",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let package = new_registry_package();
        let copy = package.clone();

        let objects = vec![RegistryObject::from(package.clone()), RegistryObject::from(copy)];
        let err = validate_registry_object_list(&objects).expect_err("should reject");
        assert!(matches!(err, XdsError::DuplicateId(id) if id == package.id));
    }
}
