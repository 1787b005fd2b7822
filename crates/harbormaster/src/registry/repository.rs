use super::entity::Registry;
use super::upsert::RegistryUpsertRequest;
use crate::context::Context;
use crate::error::{RepositoryError, ServiceError};
use async_trait::async_trait;

/// Persistence boundary for registries
///
/// Implementations must be safe to call concurrently, must hand back only
/// valid [`Registry`] values, and must stop with
/// [`RepositoryError::Cancelled`] or [`RepositoryError::DeadlineExceeded`]
/// when `ctx` says so.
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError>;

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<Registry, RepositoryError>;

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError>;

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<(), RepositoryError>;
}

/// Use-case boundary for registries
#[async_trait]
pub trait RegistryService: Send + Sync {
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, ServiceError>;

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<Registry, ServiceError>;

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, ServiceError>;

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<(), ServiceError>;
}
