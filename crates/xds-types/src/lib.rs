//! Validated text primitives shared by the XDS crates.
//!
//! - [`NonEmptyText`]: trimmed text that must contain at least one non-whitespace character.
//! - [`Oid`]: an ISO object identifier in dotted-decimal form, as used for XDS unique ids,
//!   source ids and repository ids.

/// Maximum length of an OID used as an XDS unique id.
pub const MAX_OID_LEN: usize = 64;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,

    /// The input was not a dotted-decimal OID
    #[error("invalid OID '{0}': expected dotted-decimal arcs without leading zeros")]
    InvalidOid(String),

    /// The OID exceeded the maximum length
    #[error("OID exceeds maximum length of 64 characters: '{0}'")]
    OidTooLong(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// An ISO object identifier such as `1.3.6.1.4.1.21367.2005.3.7`.
///
/// Each arc is a run of decimal digits with no leading zero (a lone `0` is allowed), arcs are
/// separated by single dots, and the whole value is at most [`MAX_OID_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(String);

impl Oid {
    /// Parses and validates an OID.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(TextError::Empty);
        }
        if input.len() > MAX_OID_LEN {
            return Err(TextError::OidTooLong(input.to_owned()));
        }

        let valid = input.split('.').all(|arc| {
            !arc.is_empty()
                && arc.bytes().all(|b| b.is_ascii_digit())
                && (arc == "0" || !arc.starts_with('0'))
        });
        if !valid || !input.contains('.') {
            return Err(TextError::InvalidOid(input.to_owned()));
        }

        Ok(Self(input.to_owned()))
    }

    /// Returns the OID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the OID as a `urn:oid:` URN, the form XDS uses for home community ids.
    pub fn to_urn(&self) -> String {
        format!("urn:oid:{}", self.0)
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Oid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Oid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Oid::parse(&s).map_err(serde::de::Error::custom)
    }
}
