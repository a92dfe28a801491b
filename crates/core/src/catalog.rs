//! Well-known XDS identifiers.
//!
//! These are wire constants published by IHE (ITI TF-3) and must be reproduced literally.
//! Every value is a `const` item; nothing here is mutable or looked up by string at runtime.

use crate::model::CodedValue;
use std::fmt;

/// A well-known XDS UUID with an optional coded-attribute name.
///
/// Renders as `urn:uuid:<guid>`. Equality compares the canonical URN form only, so the display
/// name does not take part in comparisons.
#[derive(Clone, Copy, Debug, Eq)]
pub struct XdsGuid {
    guid: &'static str,
    name: &'static str,
}

impl XdsGuid {
    /// An identifier with no coded-attribute name.
    pub const fn new(guid: &'static str) -> Self {
        Self { guid, name: "" }
    }

    /// An identifier carrying the coded-attribute name used as an external identifier's
    /// display name (for example `XDSDocumentEntry.uniqueId`).
    pub const fn named(guid: &'static str, name: &'static str) -> Self {
        Self { guid, name }
    }

    /// The bare UUID text.
    pub fn guid(&self) -> &'static str {
        self.guid
    }

    /// The coded-attribute name, if this identifier has one.
    pub fn name(&self) -> Option<&'static str> {
        (!self.name.is_empty()).then_some(self.name)
    }

    /// The canonical `urn:uuid:` form used on the wire.
    pub fn urn(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for XdsGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", xds_uuid::URN_UUID_PREFIX, self.guid)
    }
}

impl PartialEq for XdsGuid {
    fn eq(&self, other: &Self) -> bool {
        self.guid == other.guid
    }
}

impl std::hash::Hash for XdsGuid {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.guid.hash(state);
    }
}

impl PartialEq<str> for XdsGuid {
    fn eq(&self, other: &str) -> bool {
        other.strip_prefix(xds_uuid::URN_UUID_PREFIX) == Some(self.guid)
    }
}

impl PartialEq<&str> for XdsGuid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for XdsGuid {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

// Submission set

/// Classification node marking a RegistryPackage as a submission set.
pub const XDS_SUBMISSION_SET: XdsGuid = XdsGuid::new("a54d6aa5-d40d-43f9-88c5-b4633d873bdd");
pub const XDS_SUBMISSION_SET_AUTHOR: XdsGuid = XdsGuid::new("a7058bb9-b4e4-4307-ba5b-e3f0ab85e12d");
pub const XDS_SUBMISSION_SET_CONTENT_TYPE: XdsGuid =
    XdsGuid::new("aa543740-bdda-424e-8c96-df4873be8500");
pub const XDS_SUBMISSION_SET_PATIENT_ID: XdsGuid = XdsGuid::named(
    "6b5aea1a-874d-4603-a4bc-96a0a7b38446",
    "XDSSubmissionSet.patientId",
);
pub const XDS_SUBMISSION_SET_SOURCE_ID: XdsGuid = XdsGuid::named(
    "554ac39e-e3fe-47fe-b233-965d2a147832",
    "XDSSubmissionSet.sourceId",
);
pub const XDS_SUBMISSION_SET_UNIQUE_ID: XdsGuid = XdsGuid::named(
    "96fdda7c-d067-4183-912e-bf5ee74998a8",
    "XDSSubmissionSet.uniqueId",
);
pub const XDS_SUBMISSION_SET_LIMITED_METADATA: XdsGuid =
    XdsGuid::new("5003a9db-8d8d-49e6-bf0c-990e34ac7707");

// Document entry

/// Object type of a stable document entry ExtrinsicObject.
pub const XDS_DOCUMENT_ENTRY: XdsGuid = XdsGuid::new("7edca82f-054d-47f2-a032-9b2a5b5186c1");
pub const XDS_DOCUMENT_ENTRY_AUTHOR: XdsGuid = XdsGuid::new("93606bcf-9494-43ec-9b4e-a7748d1a838d");
pub const XDS_DOCUMENT_ENTRY_CLASS_CODE: XdsGuid =
    XdsGuid::new("41a5887f-8865-4c09-adf7-e362475b143a");
pub const XDS_DOCUMENT_ENTRY_CONFIDENTIALITY_CODE: XdsGuid =
    XdsGuid::new("f4f85eac-e6cb-4883-b524-f2705394840f");
pub const XDS_DOCUMENT_ENTRY_EVENT_CODE_LIST: XdsGuid =
    XdsGuid::new("2c6b8cb7-8b2a-4051-b291-b1ae6a575ef4");
pub const XDS_DOCUMENT_ENTRY_FORMAT_CODE: XdsGuid =
    XdsGuid::new("a09d5840-386c-46f2-b5ad-9c3699a4309d");
pub const XDS_DOCUMENT_ENTRY_PATIENT_ID: XdsGuid = XdsGuid::named(
    "58a6f841-87b3-4a3e-92fd-a8ffeff98427",
    "XDSDocumentEntry.patientId",
);
pub const XDS_DOCUMENT_ENTRY_PRACTICE_SETTING_CODE: XdsGuid =
    XdsGuid::new("cccf5598-8b07-4b77-a05e-ae952c785ead");
pub const XDS_DOCUMENT_ENTRY_TYPE_CODE: XdsGuid =
    XdsGuid::new("f0306f51-975f-434e-a61c-c59651d33983");
pub const XDS_DOCUMENT_ENTRY_UNIQUE_ID: XdsGuid = XdsGuid::named(
    "2e82c1f6-a085-4c72-9da3-8640a32e42ab",
    "XDSDocumentEntry.uniqueId",
);
pub const XDS_DOCUMENT_ENTRY_LIMITED_METADATA: XdsGuid =
    XdsGuid::new("ab9b591b-83ab-4d03-8f5d-f93b1fb92e85");

// Registry stored queries

pub const REGISTRY_STORED_QUERY_FIND_DOCUMENTS: XdsGuid =
    XdsGuid::new("14d4debf-8f97-4251-9a74-a90016b0af0d");
pub const REGISTRY_STORED_QUERY_FIND_SUBMISSION_SETS: XdsGuid =
    XdsGuid::new("f26abbcb-ac74-4422-8a30-edb644bbc1a9");
pub const REGISTRY_STORED_QUERY_GET_ALL: XdsGuid =
    XdsGuid::new("10b545ea-725c-446d-9b95-8aeb444eddf3");

/// Every identifier in the catalog.
pub const ALL: &[XdsGuid] = &[
    XDS_SUBMISSION_SET,
    XDS_SUBMISSION_SET_AUTHOR,
    XDS_SUBMISSION_SET_CONTENT_TYPE,
    XDS_SUBMISSION_SET_PATIENT_ID,
    XDS_SUBMISSION_SET_SOURCE_ID,
    XDS_SUBMISSION_SET_UNIQUE_ID,
    XDS_SUBMISSION_SET_LIMITED_METADATA,
    XDS_DOCUMENT_ENTRY,
    XDS_DOCUMENT_ENTRY_AUTHOR,
    XDS_DOCUMENT_ENTRY_CLASS_CODE,
    XDS_DOCUMENT_ENTRY_CONFIDENTIALITY_CODE,
    XDS_DOCUMENT_ENTRY_EVENT_CODE_LIST,
    XDS_DOCUMENT_ENTRY_FORMAT_CODE,
    XDS_DOCUMENT_ENTRY_PATIENT_ID,
    XDS_DOCUMENT_ENTRY_PRACTICE_SETTING_CODE,
    XDS_DOCUMENT_ENTRY_TYPE_CODE,
    XDS_DOCUMENT_ENTRY_UNIQUE_ID,
    XDS_DOCUMENT_ENTRY_LIMITED_METADATA,
    REGISTRY_STORED_QUERY_FIND_DOCUMENTS,
    REGISTRY_STORED_QUERY_FIND_SUBMISSION_SETS,
    REGISTRY_STORED_QUERY_GET_ALL,
];

/// A fixed confidentiality code with its coding scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConfidentialityCode {
    code: &'static str,
    scheme: &'static str,
}

impl ConfidentialityCode {
    const fn new(code: &'static str, scheme: &'static str) -> Self {
        Self { code, scheme }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn scheme(&self) -> &'static str {
        self.scheme
    }
}

impl From<ConfidentialityCode> for CodedValue {
    fn from(value: ConfidentialityCode) -> Self {
        CodedValue {
            code: value.code.to_owned(),
            scheme: value.scheme.to_owned(),
            display_name: None,
        }
    }
}

const CONNECTATHON_CONFIDENTIALITY_CODES: &str = "Connect-a-thon confidentialityCodes";

pub const CONFIDENTIALITY_EMERGENCY_ONLY: ConfidentialityCode = ConfidentialityCode::new(
    "1.3.6.1.4.1.21367.2006.7.110",
    CONNECTATHON_CONFIDENTIALITY_CODES,
);
pub const CONFIDENTIALITY_NORMAL: ConfidentialityCode = ConfidentialityCode::new(
    "1.3.6.1.4.1.21367.2006.7.107",
    CONNECTATHON_CONFIDENTIALITY_CODES,
);
pub const CONFIDENTIALITY_RESTRICTED: ConfidentialityCode = ConfidentialityCode::new(
    "1.3.6.1.4.1.21367.2006.7.109",
    CONNECTATHON_CONFIDENTIALITY_CODES,
);
