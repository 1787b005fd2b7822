//! Helm chart repositories

mod entity;
mod kind;
mod repository;
mod upsert;

pub use entity::{HelmRepository, NewHelmRepositoryParams};
pub use kind::HelmRepositoryKind;
pub use repository::{HelmRepositoryRepository, HelmRepositoryService};
pub use upsert::HelmRepositoryUpsertRequest;

/// Credentials are shared with registries
pub use crate::registry::UpsertRequestConfig;
