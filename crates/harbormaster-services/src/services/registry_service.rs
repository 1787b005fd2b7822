//! Registry service business logic

use super::{check_identifier, invalid_parameters, repository_failure};
use crate::config::ServiceConfig;
use async_trait::async_trait;
use harbormaster::{
    Context, IdentifierSubject, Operation, Registry, RegistryRepository, RegistryService,
    RegistryUpsertRequest, Resource, ServiceError,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

const RESOURCE: Resource = Resource::Registry;

/// Service validating registry requests before they reach the repository
pub struct DefaultRegistryService<R: ?Sized> {
    repository: Arc<R>,
    config: ServiceConfig,
}

impl<R: RegistryRepository + ?Sized> DefaultRegistryService<R> {
    pub fn new(repository: Arc<R>, config: ServiceConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl<R: ?Sized> Clone for DefaultRegistryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            config: self.config.clone(),
        }
    }
}

#[async_trait]
impl<R> RegistryService for DefaultRegistryService<R>
where
    R: RegistryRepository + ?Sized,
{
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, ServiceError> {
        let op = Operation::Create;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        request
            .validate()
            .map_err(|source| invalid_parameters(op, RESOURCE, source))?;

        debug!(
            "Creating {} registry {} in organization {}",
            request.kind, request.name, organization_id
        );
        let ctx = self.config.bound(ctx);
        let registry = self
            .repository
            .create(&ctx, organization_id, request)
            .await
            .map_err(|err| {
                warn!(
                    "Failed to create registry in organization {}: {}",
                    organization_id, err
                );
                repository_failure(op, RESOURCE, err)
            })?;

        info!("Created registry {} ({})", registry.name(), registry.id());
        Ok(registry)
    }

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<Registry, ServiceError> {
        let op = Operation::Get;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        check_identifier(op, RESOURCE, IdentifierSubject::Resource, registry_id)?;

        let ctx = self.config.bound(ctx);
        self.repository
            .get(&ctx, organization_id, registry_id)
            .await
            .map_err(|err| {
                debug!("Failed to get registry {}: {}", registry_id, err);
                repository_failure(op, RESOURCE, err)
            })
    }

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, ServiceError> {
        let op = Operation::Update;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        check_identifier(op, RESOURCE, IdentifierSubject::Resource, registry_id)?;
        request
            .validate()
            .map_err(|source| invalid_parameters(op, RESOURCE, source))?;

        debug!("Updating registry {} in organization {}", registry_id, organization_id);
        let ctx = self.config.bound(ctx);
        let registry = self
            .repository
            .update(&ctx, organization_id, registry_id, request)
            .await
            .map_err(|err| {
                warn!("Failed to update registry {}: {}", registry_id, err);
                repository_failure(op, RESOURCE, err)
            })?;

        info!("Updated registry {} ({})", registry.name(), registry.id());
        Ok(registry)
    }

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<(), ServiceError> {
        let op = Operation::Delete;
        check_identifier(op, RESOURCE, IdentifierSubject::Organization, organization_id)?;
        check_identifier(op, RESOURCE, IdentifierSubject::Resource, registry_id)?;

        let ctx = self.config.bound(ctx);
        self.repository
            .delete(&ctx, organization_id, registry_id)
            .await
            .map_err(|err| {
                warn!("Failed to delete registry {}: {}", registry_id, err);
                repository_failure(op, RESOURCE, err)
            })?;

        info!("Deleted registry {}", registry_id);
        Ok(())
    }
}
