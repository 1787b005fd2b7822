use crate::resource::Resource;

closed_kind! {
    /// Protocol used to reach a helm chart repository
    pub enum HelmRepositoryKind for Resource::HelmRepository {
        /// Classic `index.yaml` repository served over HTTPS
        Https => "HTTPS",
        OciEcr => "OCI_ECR",
        OciDocr => "OCI_DOCR",
        OciScalewayCr => "OCI_SCALEWAY_CR",
        OciDockerHub => "OCI_DOCKER_HUB",
        OciGithubCr => "OCI_GITHUB_CR",
        OciGitlabCr => "OCI_GITLAB_CR",
        OciPublicEcr => "OCI_PUBLIC_ECR",
        /// Any other OCI compliant registry
        OciGenericCr => "OCI_GENERIC_CR",
    }
}

impl HelmRepositoryKind {
    /// Whether charts are pulled as OCI artifacts
    pub fn is_oci(&self) -> bool {
        !matches!(self, HelmRepositoryKind::Https)
    }
}
