use crate::error::ValidationError;
use crate::resource::Resource;
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Create-or-update request for a registry
///
/// Only presence of `name`, `kind` and `url` is checked here. The kind is
/// matched against the allow-list when the remote record is turned back into
/// a [`Registry`](super::Registry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryUpsertRequest {
    pub name: String,
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub config: UpsertRequestConfig,
}

impl RegistryUpsertRequest {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            url: url.into(),
            description: None,
            config: UpsertRequestConfig::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_config(mut self, config: UpsertRequestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_request_fields(
            Resource::Registry,
            &[
                ("name", !self.name.is_empty()),
                ("kind", !self.kind.is_empty()),
                ("url", !self.url.is_empty()),
            ],
        )
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Provider credentials sent along an upsert request
///
/// Every field is optional; which ones matter depends on the kind and is left
/// to the remote API.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertRequestConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaleway_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaleway_secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpsertRequestConfig {
    /// True when no credential is supplied at all
    pub fn is_empty(&self) -> bool {
        self.access_key_id.is_none()
            && self.secret_access_key.is_none()
            && self.region.is_none()
            && self.scaleway_access_key.is_none()
            && self.scaleway_secret_key.is_none()
            && self.username.is_none()
            && self.password.is_none()
    }
}

// Secrets are never printed.
impl fmt::Debug for UpsertRequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "***")
        }

        f.debug_struct("UpsertRequestConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("region", &self.region)
            .field("scaleway_access_key", &self.scaleway_access_key)
            .field("scaleway_secret_key", &redact(&self.scaleway_secret_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}
