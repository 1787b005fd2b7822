use super::kind::RegistryKind;
use crate::error::ValidationError;
use crate::resource::{IdentifierSubject, Resource};
use crate::validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;
use uuid::Uuid;

const RESOURCE: Resource = Resource::Registry;

/// Raw input of [`Registry::new`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistryParams {
    #[serde(rename = "id")]
    pub registry_id: String,
    pub organization_id: String,
    pub name: String,
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// A container registry as known by the control plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewRegistryParams")]
pub struct Registry {
    id: Uuid,
    organization_id: Uuid,
    name: String,
    kind: RegistryKind,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    config: BTreeMap<String, String>,
}

impl Registry {
    /// Validate `params` and build a registry from them
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// id, organization id, url, kind, name, then the whole-object check.
    pub fn new(params: NewRegistryParams) -> Result<Self, ValidationError> {
        let id = validate::parse_identifier(
            RESOURCE,
            IdentifierSubject::Resource,
            &params.registry_id,
        )?;
        let organization_id = validate::parse_identifier(
            RESOURCE,
            IdentifierSubject::Organization,
            &params.organization_id,
        )?;
        validate::parse_url(RESOURCE, &params.url)?;
        let kind = validate::parse_kind::<RegistryKind>(&params.kind)?;
        validate::require_name(RESOURCE, &params.name)?;

        let registry = Self {
            id,
            organization_id,
            name: params.name,
            kind,
            url: params.url,
            description: params.description,
            config: params.config,
        };
        registry.validate()?;

        Ok(registry)
    }

    /// Required-field check over the assembled registry
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_fields(
            RESOURCE,
            &[
                (IdentifierSubject::Resource.field(), !self.id.is_nil()),
                (IdentifierSubject::Organization.field(), !self.organization_id.is_nil()),
                ("name", !self.name.is_empty()),
                ("url", !self.url.is_empty()),
            ],
        )
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// The registry URL exactly as it was given
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parsed_url(&self) -> Result<Url, ValidationError> {
        validate::parse_url(RESOURCE, &self.url)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Provider-specific key/value configuration
    pub fn config(&self) -> &BTreeMap<String, String> {
        &self.config
    }
}

impl TryFrom<NewRegistryParams> for Registry {
    type Error = ValidationError;

    fn try_from(params: NewRegistryParams) -> Result<Self, Self::Error> {
        Registry::new(params)
    }
}
