//! Container registries

mod entity;
mod kind;
mod repository;
mod upsert;

pub use entity::{NewRegistryParams, Registry};
pub use kind::RegistryKind;
pub use repository::{RegistryRepository, RegistryService};
pub use upsert::{RegistryUpsertRequest, UpsertRequestConfig};
