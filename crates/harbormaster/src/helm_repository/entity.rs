use super::kind::HelmRepositoryKind;
use crate::error::ValidationError;
use crate::resource::{IdentifierSubject, Resource};
use crate::validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;
use uuid::Uuid;

const RESOURCE: Resource = Resource::HelmRepository;

/// Raw input of [`HelmRepository::new`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHelmRepositoryParams {
    #[serde(rename = "id")]
    pub repository_id: String,
    pub organization_id: String,
    pub name: String,
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` leaves the decision to the provider
    #[serde(default)]
    pub skip_tls_verification: Option<bool>,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// A helm chart repository as known by the control plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewHelmRepositoryParams")]
pub struct HelmRepository {
    id: Uuid,
    organization_id: Uuid,
    name: String,
    kind: HelmRepositoryKind,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_tls_verification: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    config: BTreeMap<String, String>,
}

impl HelmRepository {
    /// Validate `params` and build a helm repository from them
    ///
    /// Same check order as [`Registry::new`](crate::registry::Registry::new).
    pub fn new(params: NewHelmRepositoryParams) -> Result<Self, ValidationError> {
        let id = validate::parse_identifier(
            RESOURCE,
            IdentifierSubject::Resource,
            &params.repository_id,
        )?;
        let organization_id = validate::parse_identifier(
            RESOURCE,
            IdentifierSubject::Organization,
            &params.organization_id,
        )?;
        validate::parse_url(RESOURCE, &params.url)?;
        let kind = validate::parse_kind::<HelmRepositoryKind>(&params.kind)?;
        validate::require_name(RESOURCE, &params.name)?;

        let repository = Self {
            id,
            organization_id,
            name: params.name,
            kind,
            url: params.url,
            description: params.description,
            skip_tls_verification: params.skip_tls_verification,
            config: params.config,
        };
        repository.validate()?;

        Ok(repository)
    }

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

    pub fn kind(&self) -> HelmRepositoryKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parsed_url(&self) -> Result<Url, ValidationError> {
        validate::parse_url(RESOURCE, &self.url)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn skip_tls_verification(&self) -> Option<bool> {
        self.skip_tls_verification
    }

    pub fn config(&self) -> &BTreeMap<String, String> {
        &self.config
    }
}

impl TryFrom<NewHelmRepositoryParams> for HelmRepository {
    type Error = ValidationError;

    fn try_from(params: NewHelmRepositoryParams) -> Result<Self, Self::Error> {
        HelmRepository::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const REPOSITORY_ID: &str = "3b0f6a7e-1d2c-4e5f-8a9b-0c1d2e3f4a5b";
    const ORGANIZATION_ID: &str = "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d";

    fn params(kind: &str) -> NewHelmRepositoryParams {
        NewHelmRepositoryParams {
            repository_id: REPOSITORY_ID.to_string(),
            organization_id: ORGANIZATION_ID.to_string(),
            name: "test-repo".to_string(),
            kind: kind.to_string(),
            url: "https://charts.example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_oci_ecr() {
        let repository = HelmRepository::new(params("OCI_ECR")).unwrap();
        assert_eq!(repository.kind(), HelmRepositoryKind::OciEcr);
        assert_eq!(repository.kind().as_str(), "OCI_ECR");
        assert_eq!(repository.name(), "test-repo");
        assert_eq!(repository.url(), "https://charts.example.com");
        assert_eq!(repository.skip_tls_verification(), None);
        assert!(repository.config().is_empty());
    }

    #[test]
    fn test_new_invalid_kind() {
        let err = HelmRepository::new(params("INVALID_KIND")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKind);
        assert_eq!(err.resource(), Resource::HelmRepository);
    }

    #[test]
    fn test_skip_tls_verification_is_kept() {
        let repository = HelmRepository::new(NewHelmRepositoryParams {
            skip_tls_verification: Some(true),
            description: Some("internal mirror".to_string()),
            ..params("HTTPS")
        })
        .unwrap();

        assert_eq!(repository.skip_tls_verification(), Some(true));
        assert_eq!(repository.description(), Some("internal mirror"));
    }

    #[test]
    fn test_parsed_url() {
        let repository = HelmRepository::new(NewHelmRepositoryParams {
            url: "oci://ghcr.io/acme/charts".to_string(),
            ..params("OCI_GITHUB_CR")
        })
        .unwrap();

        let parsed = repository.parsed_url().unwrap();
        assert_eq!(parsed.scheme(), "oci");
        assert_eq!(parsed.host_str(), Some("ghcr.io"));
        assert_eq!(parsed.path(), "/acme/charts");
    }

    #[test]
    fn test_url_checked_before_kind() {
        let err = HelmRepository::new(NewHelmRepositoryParams {
            url: "::not-a-url".to_string(),
            ..params("INVALID_KIND")
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    }

    #[test]
    fn test_kind_checked_before_name() {
        let err = HelmRepository::new(NewHelmRepositoryParams {
            name: String::new(),
            ..params("oci_ecr")
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKind);
    }

    #[test]
    fn test_nil_id_is_rejected() {
        let err = HelmRepository::new(NewHelmRepositoryParams {
            repository_id: Uuid::nil().to_string(),
            ..params("HTTPS")
        })
        .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::InvalidEntity { source, .. } if source.field == "id"
        ));
    }

    #[test]
    fn test_serde_roundtrip_through_constructor() {
        let repository = HelmRepository::new(NewHelmRepositoryParams {
            skip_tls_verification: Some(false),
            config: BTreeMap::from([("chart_prefix".to_string(), "stable".to_string())]),
            ..params("OCI_GITHUB_CR")
        })
        .unwrap();

        let json = serde_json::to_value(&repository).unwrap();
        assert_eq!(json["kind"], "OCI_GITHUB_CR");
        assert_eq!(json["skip_tls_verification"], false);
        assert_eq!(json["config"]["chart_prefix"], "stable");

        let back: HelmRepository = serde_json::from_value(json).unwrap();
        assert_eq!(back, repository);
    }
}
