//! # Harbormaster
//!
//! Domain layer for the two artifact sources an infrastructure control plane
//! manages on behalf of an organization:
//! - **Container registries** (ECR, DOCR, Scaleway, Docker Hub, public ECR)
//! - **Helm chart repositories** (plain HTTPS or one of the OCI flavors)
//!
//! ## Core Concepts
//!
//! - **Kinds** are closed enumerations; a tag is valid only if it is
//!   byte-for-byte one of the allow-listed values
//! - **Entities** are built once through a validating constructor and never
//!   mutated afterwards
//! - **Upsert requests** only check that their required fields are present
//! - **Repositories** and **services** are the async seams to the remote API
//!
//! ## Example Usage
//!
//! ```rust
//! use harbormaster::helm_repository::{HelmRepository, NewHelmRepositoryParams};
//! use harbormaster::error::ErrorKind;
//!
//! let params = NewHelmRepositoryParams {
//!     repository_id: "6f1b3c2a-8a59-4d7e-9d8b-3c6a1f0e2b11".to_string(),
//!     organization_id: "0c7d4bde-2c3e-4a55-8f0a-5f5b6f0d1e22".to_string(),
//!     name: "test-repo".to_string(),
//!     kind: "OCI_ECR".to_string(),
//!     url: "https://charts.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let repository = HelmRepository::new(params.clone()).unwrap();
//! assert_eq!(repository.kind().as_str(), "OCI_ECR");
//!
//! let rejected = HelmRepository::new(NewHelmRepositoryParams {
//!     kind: "INVALID_KIND".to_string(),
//!     ..params
//! });
//! assert_eq!(rejected.unwrap_err().kind(), ErrorKind::InvalidKind);
//! ```

#[macro_use]
mod macros;

pub mod context;
pub mod error;
pub mod helm_repository;
pub mod kind;
pub mod registry;
pub mod resource;
pub mod validate;

pub use context::Context;
pub use error::{
    ErrorKind, InvalidKindError, MissingFieldError, RepositoryError, ServiceError,
    ValidationError,
};
pub use helm_repository::{
    HelmRepository, HelmRepositoryKind, HelmRepositoryRepository, HelmRepositoryService,
    HelmRepositoryUpsertRequest, NewHelmRepositoryParams,
};
pub use kind::ClosedKind;
pub use registry::{
    NewRegistryParams, Registry, RegistryKind, RegistryRepository, RegistryService,
    RegistryUpsertRequest, UpsertRequestConfig,
};
pub use resource::{IdentifierSubject, Operation, Resource};
