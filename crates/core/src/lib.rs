//! # XDS Core
//!
//! Builds IHE XDS.b registry/repository request objects as ebXML (ebRIM 3.0) RegistryObject
//! graphs.
//!
//! This crate contains pure, in-memory construction logic:
//! - [`catalog`]: well-known classification scheme, stored query and confidentiality code ids
//! - [`factory`]: document entries, submission sets, slots, classifications and external
//!   identifiers, each with a fresh `urn:uuid:` id
//! - [`wiring`]: back-references from classifications/identifiers to their owner, and
//!   association edges between objects
//! - [`assembler`]: SubmitObjectsRequest, ProvideAndRegisterDocumentSetRequest,
//!   AdhocQueryRequest and retrieve DocumentRequests
//! - [`submission`]: a high-level builder that turns document metadata into a complete
//!   submission graph
//!
//! **No transport concerns**: SOAP envelopes, MTOM and HTTP belong to the caller. The graph types
//! derive serde traits with ebRIM attribute names so an external encoder can render them.

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod factory;
pub mod model;
pub mod query;
pub mod submission;
pub mod validation;
pub mod wiring;

pub use assembler::{
    new_adhoc_query_request, new_provide_and_register_request, new_retrieve_document_set_request,
    new_submit_objects_request, AdhocQuery, AdhocQueryRequest, DocumentPayload, DocumentRequest,
    ProvideAndRegisterDocumentSetRequest, ResponseOption, ReturnType, SubmitObjectsRequest,
};
pub use catalog::{ConfidentialityCode, XdsGuid};
pub use config::XdsConfig;
pub use error::{XdsError, XdsResult};
pub use model::{
    Association, Classification, ClassificationKind, CodedValue, ExternalIdentifier,
    ExtrinsicObject, Identifiable, InternationalString, LocalizedString, RegistryNode,
    RegistryObject, RegistryPackage, Slot,
};
pub use submission::{Author, DocumentMetadata, SubmissionBuilder, SubmissionSetMetadata};

// Re-export shared primitives so callers need only depend on this crate.
pub use xds_types::{NonEmptyText, Oid};
pub use xds_uuid::RegistryId;
