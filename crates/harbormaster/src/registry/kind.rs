use crate::resource::Resource;

closed_kind! {
    /// Flavor of the container registry backing a [`Registry`](super::Registry)
    pub enum RegistryKind for Resource::Registry {
        /// Amazon Elastic Container Registry
        Ecr => "ECR",
        /// DigitalOcean Container Registry
        Docr => "DOCR",
        ScalewayCr => "SCALEWAY_CR",
        DockerHub => "DOCKER_HUB",
        /// Amazon ECR Public Gallery
        PublicEcr => "PUBLIC_ECR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ClosedKind;

    #[test]
    fn test_allow_list_is_exact() {
        assert_eq!(RegistryKind::ALLOWED_VALUES.len(), 5);
        assert_eq!(RegistryKind::ALL.len(), 5);
        assert_eq!(RegistryKind::RESOURCE, Resource::Registry);
        assert_eq!(
            RegistryKind::ALLOWED_VALUES,
            &["ECR", "DOCR", "SCALEWAY_CR", "DOCKER_HUB", "PUBLIC_ECR"]
        );
    }

    #[test]
    fn test_from_string_roundtrip() {
        for tag in RegistryKind::ALLOWED_VALUES {
            let kind = RegistryKind::from_string(tag).unwrap();
            assert_eq!(kind.to_string(), *tag);
        }
    }

    #[test]
    fn test_is_valid_is_case_sensitive() {
        assert!(RegistryKind::is_valid("ECR"));
        assert!(!RegistryKind::is_valid("ecr"));
        assert!(!RegistryKind::is_valid(" ECR"));
        assert!(!RegistryKind::is_valid(""));
        // helm repository tags are not registry kinds
        assert!(!RegistryKind::is_valid("OCI_ECR"));
    }

    #[test]
    fn test_validate_reports_value_and_allow_list() {
        let err = RegistryKind::validate("GCR").unwrap_err();
        assert_eq!(err.value, "GCR");
        assert_eq!(err.resource, Resource::Registry);
        assert_eq!(err.allowed, RegistryKind::ALLOWED_VALUES);
    }

    #[test]
    fn test_parse_and_serde() {
        let kind: RegistryKind = "DOCKER_HUB".parse().unwrap();
        assert_eq!(kind, RegistryKind::DockerHub);

        let json = serde_json::to_string(&RegistryKind::ScalewayCr).unwrap();
        assert_eq!(json, "\"SCALEWAY_CR\"");

        let kind: RegistryKind = serde_json::from_str("\"PUBLIC_ECR\"").unwrap();
        assert_eq!(kind, RegistryKind::PublicEcr);

        assert!(serde_json::from_str::<RegistryKind>("\"public_ecr\"").is_err());
    }
}
