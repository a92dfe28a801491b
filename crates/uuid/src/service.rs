//! Internal implementation of registry id generation and parsing.

use crate::{IdError, IdResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
use ::uuid::Uuid;

/// Fixed scheme prefix for symbolic registry object ids.
pub const URN_UUID_PREFIX: &str = "urn:uuid:";

/// A registry object id in canonical URN form (`urn:uuid:` + lowercase hyphenated UUID).
///
/// Once constructed, the contained UUID always renders in the canonical form, so two ids compare
/// equal exactly when their URN text is equal.
///
/// # Construction
/// - [`RegistryId::new`] generates a fresh random id.
/// - [`RegistryId::parse`] validates an externally supplied id.
///
/// # Errors
/// [`RegistryId::parse`] returns [`IdError::InvalidInput`] if the input is not canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryId(Uuid);

impl Default for RegistryId {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryId {
    /// Generates a new random registry id.
    ///
    /// The UUID is RFC 4122 version 4, drawn from the operating system RNG.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an id that must already be in canonical URN form.
    ///
    /// This does **not** normalise other common forms (bare UUIDs, uppercase, braces).
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not canonical.
    pub fn parse(input: &str) -> IdResult<Self> {
        let body = input.strip_prefix(URN_UUID_PREFIX).ok_or_else(|| {
            IdError::InvalidInput(format!(
                "registry id must start with '{}', got: '{}'",
                URN_UUID_PREFIX, input
            ))
        })?;

        if !Self::is_canonical_body(body) {
            return Err(IdError::InvalidInput(format!(
                "registry id must be a lowercase hyphenated UUID, got: '{}'",
                input
            )));
        }

        Uuid::parse_str(body)
            .map(Self)
            .map_err(|e| IdError::InvalidInput(format!("invalid UUID '{}': {}", input, e)))
    }

    /// Returns true if `input` is a canonical registry id URN.
    pub fn is_canonical(input: &str) -> bool {
        input
            .strip_prefix(URN_UUID_PREFIX)
            .is_some_and(Self::is_canonical_body)
    }

    fn is_canonical_body(body: &str) -> bool {
        body.len() == 36
            && body.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", URN_UUID_PREFIX, self.0.hyphenated())
    }
}

impl FromStr for RegistryId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegistryId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RegistryId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RegistryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RegistryId::parse(&s).map_err(serde::de::Error::custom)
    }
}
