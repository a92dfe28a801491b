//! Registry object identifier utilities.
//!
//! Every object in an ebXML submission graph (document entries, submission sets,
//! classifications, external identifiers and associations) carries an `id` attribute that must be
//! unique within the request. XDS uses *symbolic* UUID URNs for these ids:
//! **`urn:uuid:` followed by a lowercase, hyphenated RFC 4122 UUID**.
//!
//! This crate provides:
//! - [`RegistryId`], a wrapper type that *guarantees* the canonical URN form once constructed.
//! - [`URN_UUID_PREFIX`], the fixed literal scheme prefix.
//!
//! ## Canonical form
//! - Prefix: `urn:uuid:`
//! - Body: 36 characters, `8-4-4-4-12` lowercase hex groups
//! - Example: `urn:uuid:550e8400-e29b-41d4-a716-446655440000`
//!
//! Notes:
//! - Fresh ids come from [`RegistryId::new`], which draws a v4 UUID from the operating system RNG.
//!   This is safe to call concurrently from any number of threads; no registry of issued ids is
//!   kept.
//! - Externally supplied ids (for example, ids read back from a stored request) must be parsed
//!   with [`RegistryId::parse`], which rejects anything not already canonical.

mod service;

// Re-export public types
pub use service::{RegistryId, URN_UUID_PREFIX};

/// Error type for registry id operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for registry id operations.
pub type IdResult<T> = Result<T, IdError>;
