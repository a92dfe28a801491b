//! ebRIM and XDS literals used when building requests.

/// Association type linking a submission set to its members.
pub const ASSOCIATION_TYPE_HAS_MEMBER: &str =
    "urn:oasis:names:tc:ebxml-regrep:AssociationType:HasMember";

/// Slot carried by every submission set membership association.
pub const SUBMISSION_SET_STATUS_SLOT: &str = "SubmissionSetStatus";

/// The member was first submitted in this submission set.
pub const SUBMISSION_SET_STATUS_ORIGINAL: &str = "Original";

// Slot names

pub const SLOT_CREATION_TIME: &str = "creationTime";
pub const SLOT_LANGUAGE_CODE: &str = "languageCode";
pub const SLOT_SOURCE_PATIENT_ID: &str = "sourcePatientId";
pub const SLOT_SUBMISSION_TIME: &str = "submissionTime";
pub const SLOT_CODING_SCHEME: &str = "codingScheme";
pub const SLOT_AUTHOR_PERSON: &str = "authorPerson";
pub const SLOT_AUTHOR_INSTITUTION: &str = "authorInstitution";
pub const SLOT_AUTHOR_ROLE: &str = "authorRole";
pub const SLOT_AUTHOR_SPECIALTY: &str = "authorSpecialty";
pub const SLOT_SIZE: &str = "size";

/// `chrono` format for the HL7 DTM values XDS stores in time slots (UTC).
pub const DTM_FORMAT: &str = "%Y%m%d%H%M%S";

// Registry object status values

pub const STATUS_APPROVED: &str = "urn:oasis:names:tc:ebxml-regrep:StatusType:Approved";
pub const STATUS_DEPRECATED: &str = "urn:oasis:names:tc:ebxml-regrep:StatusType:Deprecated";

// Stored query parameter names

pub const PARAM_DOCUMENT_ENTRY_PATIENT_ID: &str = "$XDSDocumentEntryPatientId";
pub const PARAM_DOCUMENT_ENTRY_STATUS: &str = "$XDSDocumentEntryStatus";
pub const PARAM_SUBMISSION_SET_PATIENT_ID: &str = "$XDSSubmissionSetPatientId";
pub const PARAM_SUBMISSION_SET_STATUS: &str = "$XDSSubmissionSetStatus";
pub const PARAM_FOLDER_STATUS: &str = "$XDSFolderStatus";
pub const PARAM_PATIENT_ID: &str = "$patientId";

/// Default document language when neither the metadata nor the configuration names one.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";
