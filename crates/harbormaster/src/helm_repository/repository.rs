use super::entity::HelmRepository;
use super::upsert::HelmRepositoryUpsertRequest;
use crate::context::Context;
use crate::error::{RepositoryError, ServiceError};
use async_trait::async_trait;

/// Persistence boundary for helm repositories
///
/// Implementations must be safe to call concurrently, must hand back only
/// valid [`HelmRepository`] values, and must stop with
/// [`RepositoryError::Cancelled`] or [`RepositoryError::DeadlineExceeded`]
/// when `ctx` says so.
#[async_trait]
pub trait HelmRepositoryRepository: Send + Sync {
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError>;

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<HelmRepository, RepositoryError>;

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError>;

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<(), RepositoryError>;
}

/// Use-case boundary for helm repositories
#[async_trait]
pub trait HelmRepositoryService: Send + Sync {
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, ServiceError>;

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<HelmRepository, ServiceError>;

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, ServiceError>;

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<(), ServiceError>;
}
