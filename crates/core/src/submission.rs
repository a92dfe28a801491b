//! Complete XDS submissions from clinical document metadata.
//!
//! [`SubmissionBuilder`] turns plain metadata (patient id, author, codes, unique ids) plus the
//! caller's document bytes into a validated `ProvideAndRegisterDocumentSetRequest`:
//!
//! - one `RegistryPackage` for the submission set, tagged by an `XDSSubmissionSet` node
//!   classification and carrying its uniqueId, sourceId and patientId identifiers
//! - one `ExtrinsicObject` per document with its coded classifications and identifiers
//! - one `HasMember` association per document, status `Original`
//!
//! The metadata types deserialize from YAML or JSON with snake_case keys.

use crate::assembler::{
    new_provide_and_register_request, new_submit_objects_request, DocumentPayload,
    ProvideAndRegisterDocumentSetRequest,
};
use crate::catalog::{
    XdsGuid, XDS_DOCUMENT_ENTRY, XDS_DOCUMENT_ENTRY_AUTHOR, XDS_DOCUMENT_ENTRY_CLASS_CODE,
    XDS_DOCUMENT_ENTRY_CONFIDENTIALITY_CODE, XDS_DOCUMENT_ENTRY_EVENT_CODE_LIST,
    XDS_DOCUMENT_ENTRY_FORMAT_CODE, XDS_DOCUMENT_ENTRY_PATIENT_ID,
    XDS_DOCUMENT_ENTRY_PRACTICE_SETTING_CODE, XDS_DOCUMENT_ENTRY_TYPE_CODE,
    XDS_DOCUMENT_ENTRY_UNIQUE_ID, XDS_SUBMISSION_SET, XDS_SUBMISSION_SET_AUTHOR,
    XDS_SUBMISSION_SET_CONTENT_TYPE, XDS_SUBMISSION_SET_PATIENT_ID, XDS_SUBMISSION_SET_SOURCE_ID,
    XDS_SUBMISSION_SET_UNIQUE_ID,
};
use crate::config::XdsConfig;
use crate::constants::{
    ASSOCIATION_TYPE_HAS_MEMBER, DTM_FORMAT, SLOT_AUTHOR_INSTITUTION, SLOT_AUTHOR_PERSON,
    SLOT_AUTHOR_ROLE, SLOT_AUTHOR_SPECIALTY, SLOT_CODING_SCHEME, SLOT_CREATION_TIME,
    SLOT_LANGUAGE_CODE, SLOT_SIZE, SLOT_SOURCE_PATIENT_ID, SLOT_SUBMISSION_TIME,
    SUBMISSION_SET_STATUS_ORIGINAL,
};
use crate::factory::{
    new_classification, new_external_identifier, new_extrinsic_object, new_node_classification,
    new_registry_package, new_slot,
};
use crate::model::{
    Classification, CodedValue, ExtrinsicObject, InternationalString, RegistryObject,
    RegistryPackage, Slot,
};
use crate::wiring::{attach_classification, attach_external_identifier, new_association};
use crate::{XdsError, XdsResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xds_types::{NonEmptyText, Oid};

/// The author of a document or submission set.
///
/// Values are HL7 v2 formatted strings (XCN for the person, XON for institutions).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub institutions: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Author {
    fn is_empty(&self) -> bool {
        self.person.as_deref().map_or(true, str::is_empty)
            && self.institutions.is_empty()
            && self.roles.is_empty()
            && self.specialties.is_empty()
    }

    fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        if let Some(person) = self.person.as_deref().filter(|p| !p.is_empty()) {
            slots.push(new_slot(SLOT_AUTHOR_PERSON, [person]));
        }
        for (name, values) in [
            (SLOT_AUTHOR_INSTITUTION, &self.institutions),
            (SLOT_AUTHOR_ROLE, &self.roles),
            (SLOT_AUTHOR_SPECIALTY, &self.specialties),
        ] {
            if !values.is_empty() {
                slots.push(new_slot(name, values.iter().map(String::as_str)));
            }
        }
        slots
    }
}

/// Metadata describing one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document unique id (an OID, optionally with `^extension`).
    pub unique_id: NonEmptyText,
    /// Affinity domain patient id in CX format, e.g. `123^^^&1.2.3&ISO`.
    pub patient_id: NonEmptyText,
    /// Patient id at the source; defaults to `patient_id`.
    #[serde(default)]
    pub source_patient_id: Option<String>,
    pub mime_type: NonEmptyText,
    #[serde(default)]
    pub title: Option<String>,
    pub creation_time: DateTime<Utc>,
    /// Falls back to the configured language when absent.
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    pub class_code: CodedValue,
    pub type_code: CodedValue,
    pub format_code: CodedValue,
    pub practice_setting_code: CodedValue,
    pub confidentiality_code: CodedValue,
    #[serde(default)]
    pub event_codes: Vec<CodedValue>,
}

/// Metadata describing the submission set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSetMetadata {
    pub unique_id: Oid,
    pub patient_id: NonEmptyText,
    #[serde(default = "Utc::now")]
    pub submission_time: DateTime<Utc>,
    pub content_type_code: CodedValue,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

/// Accumulates documents for one submission set.
///
/// Document bytes are borrowed for the lifetime of the resulting request.
#[derive(Debug)]
pub struct SubmissionBuilder<'a> {
    config: &'a XdsConfig,
    submission_set: SubmissionSetMetadata,
    documents: Vec<(DocumentMetadata, &'a [u8])>,
}

impl<'a> SubmissionBuilder<'a> {
    pub fn new(config: &'a XdsConfig, submission_set: SubmissionSetMetadata) -> Self {
        Self {
            config,
            submission_set,
            documents: Vec::new(),
        }
    }

    pub fn add_document(&mut self, metadata: DocumentMetadata, content: &'a [u8]) -> &mut Self {
        self.documents.push((metadata, content));
        self
    }

    /// Assembles and validates the complete request.
    ///
    /// # Errors
    ///
    /// Returns [`XdsError::InvalidArgument`] if no document was added, or a graph validation
    /// error if the assembled graph is inconsistent.
    pub fn build(self) -> XdsResult<ProvideAndRegisterDocumentSetRequest<'a>> {
        if self.documents.is_empty() {
            return Err(XdsError::InvalidArgument(
                "a submission set must contain at least one document".into(),
            ));
        }

        let package = self.submission_set_package();
        let tag = new_node_classification(&package, &XDS_SUBMISSION_SET);

        let mut entries = Vec::with_capacity(self.documents.len());
        let mut payloads = Vec::with_capacity(self.documents.len());
        let mut associations = Vec::with_capacity(self.documents.len());
        for (metadata, content) in &self.documents {
            let entry = self.document_entry(metadata, content.len());
            payloads.push(DocumentPayload::new(&entry, *content));
            associations.push(new_association(
                &package,
                &entry,
                SUBMISSION_SET_STATUS_ORIGINAL,
                ASSOCIATION_TYPE_HAS_MEMBER,
            ));
            entries.push(entry);
        }

        tracing::debug!(
            submission_set = %package.id,
            documents = entries.len(),
            "built submission set"
        );

        let objects = std::iter::once(RegistryObject::from(package))
            .chain(std::iter::once(RegistryObject::from(tag)))
            .chain(entries.into_iter().map(RegistryObject::from))
            .chain(associations.into_iter().map(RegistryObject::from));

        let submit = new_submit_objects_request(objects)?;
        new_provide_and_register_request(submit, payloads)
    }

    fn submission_set_package(&self) -> RegistryPackage {
        let metadata = &self.submission_set;
        let mut package = new_registry_package();
        package.name = InternationalString::from_optional(metadata.title.as_deref());
        package.slots.push(new_slot(
            SLOT_SUBMISSION_TIME,
            [metadata.submission_time.format(DTM_FORMAT).to_string()],
        ));

        if let Some(author) = metadata.author.as_ref().filter(|a| !a.is_empty()) {
            attach_classification(
                &mut package,
                author_classification(&XDS_SUBMISSION_SET_AUTHOR, author),
            );
        }
        attach_classification(
            &mut package,
            coded_classification(&XDS_SUBMISSION_SET_CONTENT_TYPE, &metadata.content_type_code),
        );

        for (scheme, value) in [
            (&XDS_SUBMISSION_SET_UNIQUE_ID, metadata.unique_id.as_str()),
            (&XDS_SUBMISSION_SET_SOURCE_ID, self.config.source_id().as_str()),
            (&XDS_SUBMISSION_SET_PATIENT_ID, metadata.patient_id.as_str()),
        ] {
            attach_external_identifier(
                &mut package,
                new_external_identifier(scheme, value, scheme.name()),
            );
        }

        package
    }

    fn document_entry(&self, metadata: &DocumentMetadata, size: usize) -> ExtrinsicObject {
        let language = metadata
            .language_code
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(self.config.language_code());
        let source_patient_id = metadata
            .source_patient_id
            .as_deref()
            .unwrap_or(metadata.patient_id.as_str());

        let slots = vec![
            new_slot(
                SLOT_CREATION_TIME,
                [metadata.creation_time.format(DTM_FORMAT).to_string()],
            ),
            new_slot(SLOT_LANGUAGE_CODE, [language]),
            new_slot(SLOT_SOURCE_PATIENT_ID, [source_patient_id]),
            new_slot(SLOT_SIZE, [size.to_string()]),
        ];

        let mut classifications = Vec::new();
        if let Some(author) = metadata.author.as_ref().filter(|a| !a.is_empty()) {
            classifications.push(author_classification(&XDS_DOCUMENT_ENTRY_AUTHOR, author));
        }
        for (scheme, code) in [
            (&XDS_DOCUMENT_ENTRY_CLASS_CODE, &metadata.class_code),
            (&XDS_DOCUMENT_ENTRY_TYPE_CODE, &metadata.type_code),
            (&XDS_DOCUMENT_ENTRY_FORMAT_CODE, &metadata.format_code),
            (
                &XDS_DOCUMENT_ENTRY_PRACTICE_SETTING_CODE,
                &metadata.practice_setting_code,
            ),
            (
                &XDS_DOCUMENT_ENTRY_CONFIDENTIALITY_CODE,
                &metadata.confidentiality_code,
            ),
        ] {
            classifications.push(coded_classification(scheme, code));
        }
        for event in &metadata.event_codes {
            classifications.push(coded_classification(
                &XDS_DOCUMENT_ENTRY_EVENT_CODE_LIST,
                event,
            ));
        }

        let external_identifiers = vec![
            new_external_identifier(
                &XDS_DOCUMENT_ENTRY_PATIENT_ID,
                metadata.patient_id.as_str(),
                XDS_DOCUMENT_ENTRY_PATIENT_ID.name(),
            ),
            new_external_identifier(
                &XDS_DOCUMENT_ENTRY_UNIQUE_ID,
                metadata.unique_id.as_str(),
                XDS_DOCUMENT_ENTRY_UNIQUE_ID.name(),
            ),
        ];

        new_extrinsic_object(
            metadata.mime_type.as_str(),
            metadata.title.as_deref(),
            &XDS_DOCUMENT_ENTRY,
            slots,
            classifications,
            external_identifiers,
        )
    }
}

/// A scheme classification for a coded value: the code is the node representation, the coding
/// scheme goes in a `codingScheme` slot and the display name becomes the classification name.
fn coded_classification(scheme: &XdsGuid, code: &CodedValue) -> Classification {
    new_classification(
        scheme,
        code.code.as_str(),
        code.display_name.as_deref(),
        vec![new_slot(SLOT_CODING_SCHEME, [code.scheme.as_str()])],
    )
}

/// Author classifications have an empty node representation; the author lives in slots.
fn author_classification(scheme: &XdsGuid, author: &Author) -> Classification {
    new_classification(scheme, "", None, author.slots())
}
