//! In-memory repositories
//!
//! Records are kept per (organization id, resource id). Every call runs
//! inside [`Context::run`], so a call that is cancelled or times out leaves
//! the store untouched.

use async_trait::async_trait;
use harbormaster::{
    Context, HelmRepository, HelmRepositoryRepository, HelmRepositoryUpsertRequest,
    NewHelmRepositoryParams, NewRegistryParams, Registry, RegistryRepository,
    RegistryUpsertRequest, RepositoryError, Resource, UpsertRequestConfig,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::time::Duration;
use tracing::trace;
use uuid::Uuid;

type Key = (String, String);

#[derive(Debug)]
struct MemoryStore<T> {
    resource: Resource,
    items: Mutex<HashMap<Key, T>>,
    latency: Option<Duration>,
}

impl<T: Clone> MemoryStore<T> {
    fn new(resource: Resource) -> Self {
        Self {
            resource,
            items: Mutex::new(HashMap::new()),
            latency: None,
        }
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Key, T>>, RepositoryError> {
        self.items
            .lock()
            .map_err(|_| RepositoryError::backend("Lock poisoned"))
    }

    fn insert(&self, organization_id: &str, id: &str, item: T) -> Result<(), RepositoryError> {
        let mut items = self.lock()?;
        items.insert((organization_id.to_string(), id.to_string()), item);
        Ok(())
    }

    fn get(&self, organization_id: &str, id: &str) -> Result<T, RepositoryError> {
        let items = self.lock()?;
        items
            .get(&(organization_id.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(self.resource, organization_id, id))
    }

    /// Rebuild an existing record from its current value under a single lock
    fn replace<F>(&self, organization_id: &str, id: &str, build: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&T) -> Result<T, RepositoryError>,
    {
        let mut items = self.lock()?;
        let key = (organization_id.to_string(), id.to_string());
        let existing = items
            .get(&key)
            .ok_or_else(|| RepositoryError::not_found(self.resource, organization_id, id))?;
        let item = build(existing)?;
        items.insert(key, item.clone());
        Ok(item)
    }

    fn remove(&self, organization_id: &str, id: &str) -> Result<(), RepositoryError> {
        let mut items = self.lock()?;
        items
            .remove(&(organization_id.to_string(), id.to_string()))
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(self.resource, organization_id, id))
    }

    fn len(&self) -> usize {
        self.lock().map(|items| items.len()).unwrap_or(0)
    }
}

/// Non-secret credential fields echoed back in the record's `config`
fn public_config(config: &UpsertRequestConfig) -> BTreeMap<String, String> {
    [
        ("access_key_id", &config.access_key_id),
        ("region", &config.region),
        ("scaleway_access_key", &config.scaleway_access_key),
        ("username", &config.username),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.clone().map(|value| (key.to_string(), value)))
    .collect()
}

/// In-memory registry repository for testing
#[derive(Debug)]
pub struct MemoryRegistryRepository {
    store: MemoryStore<Registry>,
}

impl Default for MemoryRegistryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRegistryRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(Resource::Registry),
        }
    }

    /// Delay every call by `latency` before touching the store
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.store.latency = Some(latency);
        self
    }

    /// Get number of stored registries
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn build(
        id: String,
        organization_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError> {
        let config = public_config(&request.config);
        let registry = Registry::new(NewRegistryParams {
            registry_id: id,
            organization_id: organization_id.to_string(),
            name: request.name,
            kind: request.kind,
            url: request.url,
            description: request.description,
            config,
        })?;
        Ok(registry)
    }

    async fn create_inner(
        &self,
        organization_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError> {
        self.store.simulate_latency().await;
        let registry = Self::build(Uuid::new_v4().to_string(), organization_id, request)?;
        self.store.insert(organization_id, &registry.id().to_string(), registry.clone())?;
        trace!("Stored registry {}", registry.id());
        Ok(registry)
    }

    async fn get_inner(
        &self,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<Registry, RepositoryError> {
        self.store.simulate_latency().await;
        self.store.get(organization_id, registry_id)
    }

    async fn update_inner(
        &self,
        organization_id: &str,
        registry_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError> {
        self.store.simulate_latency().await;
        self.store.replace(organization_id, registry_id, |existing| {
            Self::build(existing.id().to_string(), organization_id, request)
        })
    }

    async fn delete_inner(
        &self,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<(), RepositoryError> {
        self.store.simulate_latency().await;
        self.store.remove(organization_id, registry_id)
    }
}

#[async_trait]
impl RegistryRepository for MemoryRegistryRepository {
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError> {
        ctx.run(self.create_inner(organization_id, request)).await
    }

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<Registry, RepositoryError> {
        ctx.run(self.get_inner(organization_id, registry_id)).await
    }

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
        request: RegistryUpsertRequest,
    ) -> Result<Registry, RepositoryError> {
        ctx.run(self.update_inner(organization_id, registry_id, request)).await
    }

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        registry_id: &str,
    ) -> Result<(), RepositoryError> {
        ctx.run(self.delete_inner(organization_id, registry_id)).await
    }
}

/// In-memory helm repository repository for testing
#[derive(Debug)]
pub struct MemoryHelmRepositoryRepository {
    store: MemoryStore<HelmRepository>,
}

impl Default for MemoryHelmRepositoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHelmRepositoryRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(Resource::HelmRepository),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.store.latency = Some(latency);
        self
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn build(
        id: String,
        organization_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError> {
        let config = public_config(&request.config);
        let repository = HelmRepository::new(NewHelmRepositoryParams {
            repository_id: id,
            organization_id: organization_id.to_string(),
            name: request.name,
            kind: request.kind,
            url: request.url,
            description: request.description,
            skip_tls_verification: Some(request.skip_tls_verification),
            config,
        })?;
        Ok(repository)
    }

    async fn create_inner(
        &self,
        organization_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError> {
        self.store.simulate_latency().await;
        let repository = Self::build(Uuid::new_v4().to_string(), organization_id, request)?;
        self.store
            .insert(organization_id, &repository.id().to_string(), repository.clone())?;
        trace!("Stored helm repository {}", repository.id());
        Ok(repository)
    }

    async fn get_inner(
        &self,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<HelmRepository, RepositoryError> {
        self.store.simulate_latency().await;
        self.store.get(organization_id, repository_id)
    }

    async fn update_inner(
        &self,
        organization_id: &str,
        repository_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError> {
        self.store.simulate_latency().await;
        self.store.replace(organization_id, repository_id, |existing| {
            Self::build(existing.id().to_string(), organization_id, request)
        })
    }

    async fn delete_inner(
        &self,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<(), RepositoryError> {
        self.store.simulate_latency().await;
        self.store.remove(organization_id, repository_id)
    }
}

#[async_trait]
impl HelmRepositoryRepository for MemoryHelmRepositoryRepository {
    async fn create(
        &self,
        ctx: &Context,
        organization_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError> {
        ctx.run(self.create_inner(organization_id, request)).await
    }

    async fn get(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<HelmRepository, RepositoryError> {
        ctx.run(self.get_inner(organization_id, repository_id)).await
    }

    async fn update(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
        request: HelmRepositoryUpsertRequest,
    ) -> Result<HelmRepository, RepositoryError> {
        ctx.run(self.update_inner(organization_id, repository_id, request)).await
    }

    async fn delete(
        &self,
        ctx: &Context,
        organization_id: &str,
        repository_id: &str,
    ) -> Result<(), RepositoryError> {
        ctx.run(self.delete_inner(organization_id, repository_id)).await
    }
}
