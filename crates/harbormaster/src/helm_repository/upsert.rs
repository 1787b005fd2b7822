use crate::error::ValidationError;
use crate::registry::UpsertRequestConfig;
use crate::resource::Resource;
use crate::validate;
use serde::{Deserialize, Serialize};

/// Create-or-update request for a helm repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelmRepositoryUpsertRequest {
    pub name: String,
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub skip_tls_verification: bool,
    #[serde(default)]
    pub config: UpsertRequestConfig,
}

impl HelmRepositoryUpsertRequest {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_skip_tls_verification(mut self, skip: bool) -> Self {
        self.skip_tls_verification = skip;
        self
    }

    pub fn with_config(mut self, config: UpsertRequestConfig) -> Self {
        self.config = config;
        self
    }

    /// Presence check of `name`, `kind` and `url`; the kind tag itself is not checked
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_request_fields(
            Resource::HelmRepository,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_https_with_empty_config_is_valid() {
        let request =
            HelmRepositoryUpsertRequest::new("charts", "HTTPS", "https://charts.example.com");
        assert!(request.config.is_empty());
        assert!(!request.skip_tls_verification);
        assert!(request.is_valid());
    }

    #[test]
    fn test_missing_fields() {
        let request = HelmRepositoryUpsertRequest::new("", "HTTPS", "https://charts.example.com");
        let err = request.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUpsertRequest);
        assert_eq!(err.resource(), Resource::HelmRepository);

        assert!(
            !HelmRepositoryUpsertRequest::new("charts", "", "https://x.example.com").is_valid()
        );
        assert!(!HelmRepositoryUpsertRequest::new("charts", "HTTPS", "").is_valid());
    }

    #[test]
    fn test_credentials_do_not_affect_validation() {
        let config = UpsertRequestConfig {
            username: Some("ci".to_string()),
            password: Some("token".to_string()),
            ..Default::default()
        };
        let request =
            HelmRepositoryUpsertRequest::new("", "OCI_GITLAB_CR", "oci://registry.gitlab.com")
                .with_config(config);
        assert!(!request.is_valid());

        let request = HelmRepositoryUpsertRequest {
            name: "gitlab".to_string(),
            ..request
        }
        .with_skip_tls_verification(true);
        assert!(request.is_valid());
    }

    #[test]
    fn test_skip_tls_defaults_to_false_on_the_wire() {
        let request: HelmRepositoryUpsertRequest = serde_json::from_str(
            r#"{"name": "charts", "kind": "HTTPS", "url": "https://charts.example.com"}"#,
        )
        .unwrap();
        assert!(!request.skip_tls_verification);
        assert!(request.config.is_empty());
    }
}
