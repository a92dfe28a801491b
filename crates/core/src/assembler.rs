//! Top-level request assembly.
//!
//! These functions compose nodes and edges into the request shapes an XDS actor sends:
//! - `SubmitObjectsRequest` (register metadata)
//! - `ProvideAndRegisterDocumentSetRequest` (metadata plus document content)
//! - `AdhocQueryRequest` (registry stored query)
//! - retrieve `DocumentRequest` entries
//!
//! Submission requests are validated as they are assembled (see [`crate::validation`]).

use crate::catalog::XdsGuid;
use crate::model::{ExtrinsicObject, RegistryObject, Slot};
use crate::validation::validate_registry_object_list;
use crate::{XdsError, XdsResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use xds_uuid::RegistryId;

/// The root of every submission: one flat registry object list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitObjectsRequest {
    pub registry_object_list: Vec<RegistryObject>,
}

/// Document content paired with the id of the document entry it belongs to.
///
/// The content is borrowed from the caller and never copied by the assembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentPayload<'a> {
    pub id: RegistryId,
    #[serde(rename = "value", serialize_with = "serialize_base64")]
    pub content: &'a [u8],
}

impl<'a> DocumentPayload<'a> {
    pub fn new(document: &ExtrinsicObject, content: &'a [u8]) -> Self {
        Self {
            id: document.id,
            content,
        }
    }
}

fn serialize_base64<S>(content: &&[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(content))
}

/// Metadata plus the content of every document it describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvideAndRegisterDocumentSetRequest<'a> {
    pub submit_objects_request: SubmitObjectsRequest,
    #[serde(rename = "Document")]
    pub documents: Vec<DocumentPayload<'a>>,
}

impl ProvideAndRegisterDocumentSetRequest<'_> {
    /// Total content size in bytes.
    pub fn content_len(&self) -> usize {
        self.documents.iter().map(|d| d.content.len()).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnType {
    LeafClass,
    ObjectRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOption {
    pub return_composed_objects: bool,
    pub return_type: ReturnType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdhocQuery {
    pub id: String,
    #[serde(rename = "slot")]
    pub parameters: Vec<Slot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdhocQueryRequest {
    pub response_option: ResponseOption,
    pub adhoc_query: AdhocQuery,
}

/// One document to fetch from a repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentRequest {
    pub home_community_id: String,
    pub repository_unique_id: String,
    pub document_unique_id: String,
}

/// Wraps objects as one flat registry object list, preserving their order.
///
/// # Errors
///
/// Fails if the objects do not form a consistent graph: duplicate ids, unattached
/// classifications or identifiers, or references to ids outside the list.
pub fn new_submit_objects_request<I>(objects: I) -> XdsResult<SubmitObjectsRequest>
where
    I: IntoIterator,
    I::Item: Into<RegistryObject>,
{
    let registry_object_list: Vec<RegistryObject> = objects.into_iter().map(Into::into).collect();

    if let Err(e) = validate_registry_object_list(&registry_object_list) {
        tracing::warn!("rejected registry object list: {}", e);
        return Err(e);
    }

    tracing::debug!(
        objects = registry_object_list.len(),
        "assembled submit objects request"
    );
    Ok(SubmitObjectsRequest {
        registry_object_list,
    })
}

/// Pairs a metadata graph with document content.
///
/// Every document entry in the metadata must have exactly one payload, and every payload must
/// belong to a document entry in the metadata.
///
/// # Errors
///
/// - [`XdsError::MissingDocumentContent`] for a document entry without a payload.
/// - [`XdsError::UnknownDocumentContent`] for a payload without a document entry.
/// - [`XdsError::DuplicateId`] if two payloads share an id.
pub fn new_provide_and_register_request<'a>(
    submit_request: SubmitObjectsRequest,
    documents: Vec<DocumentPayload<'a>>,
) -> XdsResult<ProvideAndRegisterDocumentSetRequest<'a>> {
    let entries: HashSet<RegistryId> = submit_request
        .registry_object_list
        .iter()
        .filter_map(|object| match object {
            RegistryObject::ExtrinsicObject(o) => Some(o.id),
            _ => None,
        })
        .collect();

    let mut payloads = HashSet::with_capacity(documents.len());
    for document in &documents {
        if !payloads.insert(document.id) {
            return Err(XdsError::DuplicateId(document.id));
        }
        if !entries.contains(&document.id) {
            return Err(XdsError::UnknownDocumentContent(document.id));
        }
    }

    // Report in metadata order so the first missing entry is deterministic.
    if let Some(missing) = submit_request
        .registry_object_list
        .iter()
        .filter_map(|object| match object {
            RegistryObject::ExtrinsicObject(o) => Some(o.id),
            _ => None,
        })
        .find(|id| !payloads.contains(id))
    {
        return Err(XdsError::MissingDocumentContent(missing));
    }

    tracing::debug!(
        documents = documents.len(),
        "assembled provide and register request"
    );
    Ok(ProvideAndRegisterDocumentSetRequest {
        submit_objects_request: submit_request,
        documents,
    })
}

/// Builds a stored query request returning composed objects at leaf-class granularity.
pub fn new_adhoc_query_request(query_id: &XdsGuid, parameters: Vec<Slot>) -> AdhocQueryRequest {
    AdhocQueryRequest {
        response_option: ResponseOption {
            return_composed_objects: true,
            return_type: ReturnType::LeafClass,
        },
        adhoc_query: AdhocQuery {
            id: query_id.urn(),
            parameters,
        },
    }
}

/// Builds one retrieve entry per document id, in input order.
///
/// `None` means the id list is absent, which is an error; an empty list is valid and yields no
/// entries.
///
/// # Errors
///
/// Returns [`XdsError::InvalidArgument`] if `document_ids` is `None`.
pub fn new_retrieve_document_set_request<S: AsRef<str>>(
    repository_id: &str,
    home_community_id: &str,
    document_ids: Option<&[S]>,
) -> XdsResult<Vec<DocumentRequest>> {
    let document_ids = document_ids.ok_or_else(|| {
        XdsError::InvalidArgument("document_ids: value cannot be absent".into())
    })?;

    Ok(document_ids
        .iter()
        .map(|document_id| DocumentRequest {
            home_community_id: home_community_id.to_owned(),
            repository_unique_id: repository_id.to_owned(),
            document_unique_id: document_id.as_ref().to_owned(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        REGISTRY_STORED_QUERY_FIND_DOCUMENTS, XDS_DOCUMENT_ENTRY, XDS_SUBMISSION_SET,
    };
    use crate::constants::{ASSOCIATION_TYPE_HAS_MEMBER, SUBMISSION_SET_STATUS_ORIGINAL};
    use crate::factory::{
        new_extrinsic_object_with_slots, new_node_classification, new_registry_package, new_slot,
    };
    use crate::wiring::new_association;

    fn document() -> ExtrinsicObject {
        new_extrinsic_object_with_slots("text/xml", None, &XDS_DOCUMENT_ENTRY, vec![])
    }

    #[test]
    fn test_submit_objects_request_keeps_exactly_the_supplied_objects() {
        let package = new_registry_package();
        let document = document();
        let association = new_association(
            &package,
            &document,
            SUBMISSION_SET_STATUS_ORIGINAL,
            ASSOCIATION_TYPE_HAS_MEMBER,
        );

        let expected: Vec<RegistryObject> = vec![
            package.clone().into(),
            document.clone().into(),
            association.clone().into(),
        ];
        let request = new_submit_objects_request(vec![
            RegistryObject::from(package),
            document.into(),
            association.into(),
        ])
        .expect("graph should be valid");

        assert_eq!(request.registry_object_list.len(), 3);
        assert_eq!(request.registry_object_list, expected);
    }

    #[test]
    fn test_submit_objects_request_accepts_single_kind_iterators() {
        let packages = vec![new_registry_package(), new_registry_package()];
        let request = new_submit_objects_request(packages).expect("packages are valid");
        assert_eq!(request.registry_object_list.len(), 2);
    }

    #[test]
    fn test_submit_objects_request_rejects_dangling_reference() {
        let outside = new_registry_package();
        let tag = new_node_classification(&outside, &XDS_SUBMISSION_SET);

        let err = new_submit_objects_request([tag]).expect_err("should reject");
        assert!(matches!(err, XdsError::DanglingReference { .. }));
    }

    #[test]
    fn test_provide_and_register_pairs_metadata_with_content() {
        let document = document();
        let content = b"<ClinicalDocument/>".to_vec();
        let payload = DocumentPayload::new(&document, &content);
        let submit = new_submit_objects_request([document]).expect("valid");

        let request =
            new_provide_and_register_request(submit, vec![payload]).expect("aligned payloads");

        assert_eq!(request.documents.len(), 1);
        assert_eq!(request.documents[0].content, content.as_slice());
        assert!(std::ptr::eq(request.documents[0].content, content.as_slice()));
        assert_eq!(request.content_len(), content.len());
    }

    #[test]
    fn test_provide_and_register_rejects_missing_content() {
        let first = document();
        let second = document();
        let content = b"first";
        let payload = DocumentPayload::new(&first, content);
        let missing = second.id;
        let submit = new_submit_objects_request([first, second]).expect("valid");

        let err = new_provide_and_register_request(submit, vec![payload]).expect_err("missing");
        assert!(matches!(err, XdsError::MissingDocumentContent(id) if id == missing));
    }

    #[test]
    fn test_provide_and_register_rejects_unknown_content() {
        let known = document();
        let stranger = document();
        let submit = new_submit_objects_request([known.clone()]).expect("valid");

        let err = new_provide_and_register_request(
            submit,
            vec![
                DocumentPayload::new(&known, b"a"),
                DocumentPayload::new(&stranger, b"b"),
            ],
        )
        .expect_err("unknown payload");
        assert!(matches!(err, XdsError::UnknownDocumentContent(id) if id == stranger.id));
    }

    #[test]
    fn test_provide_and_register_rejects_duplicate_content() {
        let document = document();
        let submit = new_submit_objects_request([document.clone()]).expect("valid");

        let err = new_provide_and_register_request(
            submit,
            vec![
                DocumentPayload::new(&document, b"a"),
                DocumentPayload::new(&document, b"a"),
            ],
        )
        .expect_err("duplicate payload");
        assert!(matches!(err, XdsError::DuplicateId(id) if id == document.id));
    }

    #[test]
    fn test_provide_and_register_serializes_content_as_base64() {
        let document = document();
        let payload = DocumentPayload::new(&document, b"hello");
        let submit = new_submit_objects_request([document.clone()]).expect("valid");
        let request = new_provide_and_register_request(submit, vec![payload]).expect("valid");

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["Document"][0]["value"], "aGVsbG8=");
        assert_eq!(json["Document"][0]["id"], document.id.to_string());
        assert!(json["SubmitObjectsRequest"]["registryObjectList"].is_array());
    }

    #[test]
    fn test_adhoc_query_request() {
        let parameter = new_slot(
            "$XDSDocumentEntryPatientId",
            ["'pid^^^&1.2.3&ISO'"],
        );
        let second = new_slot("$XDSDocumentEntryStatus", ["('Approved')"]);

        let request = new_adhoc_query_request(
            &REGISTRY_STORED_QUERY_FIND_DOCUMENTS,
            vec![parameter.clone(), second.clone()],
        );

        assert_eq!(
            request.adhoc_query.id,
            "urn:uuid:14d4debf-8f97-4251-9a74-a90016b0af0d"
        );
        assert_eq!(request.adhoc_query.parameters, vec![parameter, second]);
        assert!(request.response_option.return_composed_objects);
        assert_eq!(request.response_option.return_type, ReturnType::LeafClass);
    }

    #[test]
    fn test_retrieve_builds_one_entry_per_document_in_order() {
        let requests =
            new_retrieve_document_set_request("REPO1", "1.2.3", Some(&["doc-A", "doc-B"][..]))
                .expect("ids present");

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].document_unique_id, "doc-A");
        assert_eq!(requests[1].document_unique_id, "doc-B");
        for request in &requests {
            assert_eq!(request.repository_unique_id, "REPO1");
            assert_eq!(request.home_community_id, "1.2.3");
        }
    }

    #[test]
    fn test_retrieve_rejects_absent_ids() {
        let err = new_retrieve_document_set_request::<&str>("REPO1", "1.2.3", None)
            .expect_err("absent ids");
        assert!(matches!(err, XdsError::InvalidArgument(_)));
    }

    #[test]
    fn test_retrieve_accepts_empty_ids() {
        let empty: Vec<String> = Vec::new();
        let requests = new_retrieve_document_set_request("REPO1", "1.2.3", Some(&empty[..]))
            .expect("empty is valid");
        assert!(requests.is_empty());
    }
}
