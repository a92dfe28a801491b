use xds_uuid::RegistryId;

#[derive(Debug, thiserror::Error)]
pub enum XdsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{kind} {object} references {target}, which is not part of the request graph")]
    DanglingReference {
        kind: &'static str,
        object: RegistryId,
        target: RegistryId,
    },
    #[error("{kind} {object} is not attached to any registry object")]
    UnattachedObject {
        kind: &'static str,
        object: RegistryId,
    },
    #[error("{kind} {object} is nested under {owner} but references {target}")]
    ForeignAttachment {
        kind: &'static str,
        object: RegistryId,
        owner: RegistryId,
        target: RegistryId,
    },
    #[error("duplicate registry object id in request graph: {0}")]
    DuplicateId(RegistryId),

    #[error("document entry {0} has no matching document content")]
    MissingDocumentContent(RegistryId),
    #[error("document content {0} has no matching document entry")]
    UnknownDocumentContent(RegistryId),

    #[error("invalid text: {0}")]
    InvalidText(#[from] xds_types::TextError),
}

pub type XdsResult<T> = std::result::Result<T, XdsError>;
