//! Use-case layer for harbormaster
//!
//! - [`services`] validates caller input and forwards to a repository
//! - [`storage`] holds in-memory repositories for tests and local development
//! - [`config`] reads service settings from the environment

pub mod config;
pub mod error;
pub mod services;
pub mod storage;

pub use config::ServiceConfig;
pub use error::ConfigError;
pub use services::{DefaultHelmRepositoryService, DefaultRegistryService};
pub use storage::{MemoryHelmRepositoryRepository, MemoryRegistryRepository};
