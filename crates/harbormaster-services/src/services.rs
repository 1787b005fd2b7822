//! Default service implementations

use harbormaster::validate;
use harbormaster::{
    IdentifierSubject, Operation, RepositoryError, Resource, ServiceError, ValidationError,
};

pub mod helm_repository_service;
pub mod registry_service;

pub use helm_repository_service::DefaultHelmRepositoryService;
pub use registry_service::DefaultRegistryService;

/// Reject identifiers that are empty or not UUID-shaped
fn check_identifier(
    operation: Operation,
    resource: Resource,
    subject: IdentifierSubject,
    value: &str,
) -> Result<(), ServiceError> {
    validate::parse_identifier(resource, subject, value)
        .map(|_| ())
        .map_err(|source| invalid_parameters(operation, resource, source))
}

fn invalid_parameters(
    operation: Operation,
    resource: Resource,
    source: ValidationError,
) -> ServiceError {
    ServiceError::InvalidParameters {
        operation,
        resource,
        source,
    }
}

fn repository_failure(
    operation: Operation,
    resource: Resource,
    source: RepositoryError,
) -> ServiceError {
    ServiceError::Repository {
        operation,
        resource,
        source,
    }
}
