use harbormaster::error::ErrorKind;
use harbormaster::{
    HelmRepository, HelmRepositoryKind, HelmRepositoryUpsertRequest, IdentifierSubject,
    NewHelmRepositoryParams, NewRegistryParams, Registry, RegistryUpsertRequest,
    UpsertRequestConfig, ValidationError,
};
use std::error::Error as _;
use uuid::Uuid;

fn registry_params() -> NewRegistryParams {
    NewRegistryParams {
        registry_id: Uuid::new_v4().to_string(),
        organization_id: Uuid::new_v4().to_string(),
        name: "docr".to_string(),
        kind: "DOCR".to_string(),
        url: "https://registry.digitalocean.com/acme".to_string(),
        ..Default::default()
    }
}

fn helm_params(kind: &str) -> NewHelmRepositoryParams {
    NewHelmRepositoryParams {
        repository_id: Uuid::new_v4().to_string(),
        organization_id: Uuid::new_v4().to_string(),
        name: "test-repo".to_string(),
        kind: kind.to_string(),
        url: "https://charts.example.com".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_helm_repository_scenario() {
    let repository = HelmRepository::new(helm_params("OCI_ECR")).unwrap();
    assert_eq!(repository.kind(), HelmRepositoryKind::OciEcr);
    assert_eq!(repository.kind().to_string(), "OCI_ECR");

    let err = HelmRepository::new(helm_params("INVALID_KIND")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKind);
    assert!(matches!(
        err,
        ValidationError::InvalidKind(ref inner) if inner.value == "INVALID_KIND"
    ));
}

#[test]
fn test_registry_check_order() {
    // Each case breaks every rule from its position onwards; the first one must be reported.
    let cases: Vec<(NewRegistryParams, ErrorKind)> = vec![
        (
            NewRegistryParams {
                registry_id: "123".to_string(),
                organization_id: "456".to_string(),
                url: "nope".to_string(),
                kind: "nope".to_string(),
                name: String::new(),
                ..registry_params()
            },
            ErrorKind::InvalidIdentifier,
        ),
        (
            NewRegistryParams {
                organization_id: "456".to_string(),
                url: "nope".to_string(),
                kind: "nope".to_string(),
                name: String::new(),
                ..registry_params()
            },
            ErrorKind::InvalidIdentifier,
        ),
        (
            NewRegistryParams {
                url: "nope".to_string(),
                kind: "nope".to_string(),
                name: String::new(),
                ..registry_params()
            },
            ErrorKind::InvalidUrl,
        ),
        (
            NewRegistryParams {
                kind: "nope".to_string(),
                name: String::new(),
                ..registry_params()
            },
            ErrorKind::InvalidKind,
        ),
        (
            NewRegistryParams {
                name: String::new(),
                ..registry_params()
            },
            ErrorKind::InvalidName,
        ),
    ];

    for (params, expected) in cases {
        let err = Registry::new(params).unwrap_err();
        assert_eq!(err.kind(), expected, "{}", err);
    }
}

#[test]
fn test_identifier_subject_is_reported() {
    let err = Registry::new(NewRegistryParams {
        organization_id: "org".to_string(),
        ..registry_params()
    })
    .unwrap_err();

    match &err {
        ValidationError::InvalidIdentifier { subject, value, .. } => {
            assert_eq!(*subject, IdentifierSubject::Organization);
            assert_eq!(value, "org");
        }
        other => panic!("Expected InvalidIdentifier, got {:?}", other),
    }
    assert!(err.source().is_some(), "uuid parse error is kept as cause");
}

#[test]
fn test_successful_construction_is_verbatim() {
    let params = registry_params();
    let registry = Registry::new(params.clone()).unwrap();

    assert_eq!(registry.id().to_string(), params.registry_id);
    assert_eq!(registry.organization_id().to_string(), params.organization_id);
    assert_eq!(registry.name(), params.name);
    assert_eq!(registry.kind().as_str(), params.kind);
    assert_eq!(registry.url(), params.url);
    assert_eq!(registry.description(), None);
}

#[test]
fn test_upsert_requests_ignore_config_contents() {
    let empty = UpsertRequestConfig::default();
    let full = UpsertRequestConfig {
        access_key_id: Some("AKIA".to_string()),
        secret_access_key: Some("secret".to_string()),
        region: Some("us-east-1".to_string()),
        scaleway_access_key: Some("SCW".to_string()),
        scaleway_secret_key: Some("scw-secret".to_string()),
        username: Some("user".to_string()),
        password: Some("pass".to_string()),
    };

    for config in [empty, full] {
        let registry = RegistryUpsertRequest::new("r", "ECR", "https://r.example.com")
            .with_config(config.clone());
        assert!(registry.is_valid());

        let helm = HelmRepositoryUpsertRequest::new("h", "HTTPS", "https://h.example.com")
            .with_config(config.clone());
        assert!(helm.is_valid());

        let missing_url = HelmRepositoryUpsertRequest::new("h", "HTTPS", "").with_config(config);
        assert_eq!(
            missing_url.validate().unwrap_err().kind(),
            ErrorKind::InvalidUpsertRequest
        );
    }
}
