use harbormaster::{ClosedKind, HelmRepositoryKind, RegistryKind};

const CANDIDATES: &[&str] = &[
    "ECR",
    "ecr",
    "DOCR",
    "SCALEWAY_CR",
    "DOCKER_HUB",
    "Docker_Hub",
    "PUBLIC_ECR",
    "HTTPS",
    "https",
    "OCI_ECR",
    "OCI_DOCR",
    "OCI_SCALEWAY_CR",
    "OCI_DOCKER_HUB",
    "OCI_GITHUB_CR",
    "OCI_GITLAB_CR",
    "OCI_PUBLIC_ECR",
    "OCI_GENERIC_CR",
    "OCI_GENERIC_CR ",
    "",
    "INVALID_KIND",
];

#[test]
fn test_is_valid_matches_allow_list_membership() {
    for candidate in CANDIDATES {
        assert_eq!(
            RegistryKind::is_valid(candidate),
            RegistryKind::ALLOWED_VALUES.contains(candidate),
            "registry kind {:?}",
            candidate
        );
        assert_eq!(
            HelmRepositoryKind::is_valid(candidate),
            HelmRepositoryKind::ALLOWED_VALUES.contains(candidate),
            "helm repository kind {:?}",
            candidate
        );
    }
}

#[test]
fn test_allow_list_sizes() {
    assert_eq!(RegistryKind::ALLOWED_VALUES.len(), 5);
    assert_eq!(HelmRepositoryKind::ALLOWED_VALUES.len(), 9);
}

#[test]
fn test_allow_lists_are_disjoint() {
    for tag in RegistryKind::ALLOWED_VALUES {
        assert!(!HelmRepositoryKind::ALLOWED_VALUES.contains(tag));
    }
}

#[test]
fn test_from_str_errors_carry_allow_list() {
    let err = "gcr".parse::<RegistryKind>().unwrap_err();
    assert_eq!(err.value, "gcr");
    assert_eq!(err.allowed, RegistryKind::ALLOWED_VALUES);
    assert_eq!(
        err.to_string(),
        "unsupported registry kind `gcr`, expected one of: ECR, DOCR, SCALEWAY_CR, DOCKER_HUB, PUBLIC_ECR"
    );
}
