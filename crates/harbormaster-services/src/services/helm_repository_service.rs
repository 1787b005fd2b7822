//! Helm repository service business logic

use super::{check_identifier, invalid_parameters, repository_failure};
use crate::config::ServiceConfig;
use async_trait::async_trait;
use harbormaster::{
    Context, HelmRepository, HelmRepositoryRepository, HelmRepositoryService,
    HelmRepositoryUpsertRequest, IdentifierSubject, Operation, Resource, ServiceError,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

const RESOURCE: Resource = Resource::HelmRepository;

/// Service validating helm repository requests before they reach the repository
pub struct DefaultHelmRepositoryService<R: ?Sized> {
    repository: Arc<R>,
    config: ServiceConfig,
}

impl<R: HelmRepositoryRepository + ?Sized> DefaultHelmRepositoryService<R> {
    pub fn new(repository: Arc<R>, config: ServiceConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl<R: ?Sized> Clone for DefaultHelmRepositoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            config: self.config.clone(),
        }
    }
}

#[async_trait]
impl<R> HelmRepositoryService for DefaultHelmRepositoryService<R>
where
    R: HelmRepositoryRepository + ?Sized,
{
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, ServiceError> {
        let op = Operation::Create;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        request
            .validate()
            .map_err(|source| invalid_parameters(op, RESOURCE, source))?;

        debug!(
            "Creating {} helm repository {} in organization {}",
            request.kind, request.name, organization_id
        );
        let ctx = self.config.bound(ctx);
        let repository = self
            .repository
            .create(&ctx, organization_id, request)
            .await
            .map_err(|err| {
                warn!(
                    "Failed to create helm repository in organization {}: {}",
                    organization_id, err
                );
                repository_failure(op, RESOURCE, err)
            })?;

        info!("Created helm repository {} ({})", repository.name(), repository.id());
        Ok(repository)
    }

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<HelmRepository, ServiceError> {
        let op = Operation::Get;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        check_identifier(op, RESOURCE, IdentifierSubject::Resource, repository_id)?;

        let ctx = self.config.bound(ctx);
        self.repository
            .get(&ctx, organization_id, repository_id)
            .await
            .map_err(|err| {
                debug!("Failed to get helm repository {}: {}", repository_id, err);
                repository_failure(op, RESOURCE, err)
            })
    }

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, ServiceError> {
        let op = Operation::Update;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        check_identifier(op, RESOURCE, IdentifierSubject::Resource, repository_id)?;
        request
            .validate()
            .map_err(|source| invalid_parameters(op, RESOURCE, source))?;

        debug!("Updating helm repository {} in organization {}", repository_id, organization_id);
        let ctx = self.config.bound(ctx);
        let repository = self
            .repository
            .update(&ctx, organization_id, repository_id, request)
            .await
            .map_err(|err| {
                warn!("Failed to update helm repository {}: {}", repository_id, err);
                repository_failure(op, RESOURCE, err)
            })?;

        info!("Updated helm repository {} ({})", repository.name(), repository.id());
        Ok(repository)
    }

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<(), ServiceError> {
        let op = Operation::Delete;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        check_identifier(op, RESOURCE, IdentifierSubject::Resource, repository_id)?;

        let ctx = self.config.bound(ctx);
        self.repository
            .delete(&ctx, organization_id, repository_id)
            .await
            .map_err(|err| {
                warn!("Failed to delete helm repository {}: {}", repository_id, err);
                repository_failure(op, RESOURCE, err)
            })?;

        info!("Deleted helm repository {}", repository_id);
        Ok(())
    }
}
