//! Runtime settings resolved from the environment.
//!
//! # Environment Variables
//! - `XDS_SOURCE_ID`: document source OID, required for `submit`
//! - `XDS_HOME_COMMUNITY_ID`: home community OID or `urn:oid:` URN
//! - `XDS_REPOSITORY_UNIQUE_ID`: repository OID
//! - `XDS_LANGUAGE_CODE`: default document language (default: "en-US")
//!
//! Command line flags take precedence over the environment.

use anyhow::{anyhow, Context};
use xds_core::{Oid, XdsConfig};

pub const ENV_SOURCE_ID: &str = "XDS_SOURCE_ID";
pub const ENV_HOME_COMMUNITY_ID: &str = "XDS_HOME_COMMUNITY_ID";
pub const ENV_REPOSITORY_UNIQUE_ID: &str = "XDS_REPOSITORY_UNIQUE_ID";
pub const ENV_LANGUAGE_CODE: &str = "XDS_LANGUAGE_CODE";

const URN_OID_PREFIX: &str = "urn:oid:";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub source_id: Option<String>,
    pub home_community_id: Option<String>,
    pub repository_unique_id: Option<String>,
    pub language_code: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            source_id: get(ENV_SOURCE_ID),
            home_community_id: get(ENV_HOME_COMMUNITY_ID),
            repository_unique_id: get(ENV_REPOSITORY_UNIQUE_ID),
            language_code: get(ENV_LANGUAGE_CODE),
        }
    }

    /// Replaces any setting for which `overrides` carries a value.
    pub fn merge(mut self, overrides: Settings) -> Self {
        if overrides.source_id.is_some() {
            self.source_id = overrides.source_id;
        }
        if overrides.home_community_id.is_some() {
            self.home_community_id = overrides.home_community_id;
        }
        if overrides.repository_unique_id.is_some() {
            self.repository_unique_id = overrides.repository_unique_id;
        }
        if overrides.language_code.is_some() {
            self.language_code = overrides.language_code;
        }
        self
    }

    pub fn to_config(&self) -> anyhow::Result<XdsConfig> {
        let source_id = self
            .source_id
            .as_deref()
            .ok_or_else(|| anyhow!("{ENV_SOURCE_ID} is not set and no --source-id was given"))?;
        XdsConfig::new(source_id, self.language_code.as_deref())
            .context("invalid XDS configuration")
    }

    /// Home community id in `urn:oid:` form.
    pub fn home_community_urn(&self) -> anyhow::Result<String> {
        let raw = self
            .home_community_id
            .as_deref()
            .ok_or_else(|| anyhow!("{ENV_HOME_COMMUNITY_ID} is not set and no --home was given"))?;
        let oid = Oid::parse(strip_urn_oid(raw))
            .with_context(|| format!("invalid home community id {raw}"))?;
        Ok(oid.to_urn())
    }

    pub fn repository_id(&self) -> anyhow::Result<Oid> {
        let raw = self.repository_unique_id.as_deref().ok_or_else(|| {
            anyhow!("{ENV_REPOSITORY_UNIQUE_ID} is not set and no --repository was given")
        })?;
        Oid::parse(raw).with_context(|| format!("invalid repository unique id {raw}"))
    }
}

fn strip_urn_oid(value: &str) -> &str {
    value.strip_prefix(URN_OID_PREFIX).unwrap_or(value)
}
