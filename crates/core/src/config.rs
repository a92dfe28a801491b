//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the submission builder, so
//! request construction never reads environment variables itself.

use crate::constants::DEFAULT_LANGUAGE_CODE;
use crate::XdsResult;
use xds_types::{NonEmptyText, Oid};

/// Submission source settings resolved at startup.
#[derive(Clone, Debug)]
pub struct XdsConfig {
    source_id: Oid,
    language_code: NonEmptyText,
}

impl XdsConfig {
    /// Create a new `XdsConfig`.
    ///
    /// `source_id` identifies the document source actor and is stamped on every submission set.
    /// `language_code` falls back to `en-US` when absent.
    pub fn new(source_id: &str, language_code: Option<&str>) -> XdsResult<Self> {
        Ok(Self {
            source_id: Oid::parse(source_id)?,
            language_code: NonEmptyText::new(language_code.unwrap_or(DEFAULT_LANGUAGE_CODE))?,
        })
    }

    pub fn source_id(&self) -> &Oid {
        &self.source_id
    }

    pub fn language_code(&self) -> &str {
        self.language_code.as_str()
    }
}
