//! Error types for harbormaster
//!
//! Errors are layered: each layer wraps the error of the layer below and keeps
//! it reachable through [`std::error::Error::source`]. Callers match on
//! [`ErrorKind`] rather than on message text.

use crate::resource::{IdentifierSubject, Operation, Resource};
use thiserror::Error;

/// Kind of a failure, independent of the resource or layer that reported it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidIdentifier,
    InvalidUrl,
    InvalidKind,
    InvalidName,
    InvalidEntity,
    InvalidUpsertRequest,
    Cancelled,
    DeadlineExceeded,
    NotFound,
    Backend,
}

/// A value that is not part of a resource's kind allow-list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported {resource} kind `{value}`, expected one of: {}", .allowed.join(", "))]
pub struct InvalidKindError {
    pub resource: Resource,
    /// The rejected value, as given
    pub value: String,
    /// The full allow-list of the resource
    pub allowed: &'static [&'static str],
}

impl InvalidKindError {
    pub fn new(
        resource: Resource,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            resource,
            value: value.into(),
            allowed,
        }
    }
}

/// A required field that is empty or zero
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("missing required field `{field}`")]
pub struct MissingFieldError {
    pub field: &'static str,
}

/// Validation failures of entities and upsert requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid {resource} {subject} `{value}`")]
    InvalidIdentifier {
        resource: Resource,
        subject: IdentifierSubject,
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid {resource} url `{value}`")]
    InvalidUrl {
        resource: Resource,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid {} kind", .0.resource)]
    InvalidKind(#[from] InvalidKindError),

    #[error("invalid {resource} name: name must not be empty")]
    InvalidName { resource: Resource },

    #[error("invalid {resource}")]
    InvalidEntity {
        resource: Resource,
        #[source]
        source: MissingFieldError,
    },

    #[error("invalid {resource} upsert request")]
    InvalidUpsertRequest {
        resource: Resource,
        #[source]
        source: MissingFieldError,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            ValidationError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            ValidationError::InvalidKind(_) => ErrorKind::InvalidKind,
            ValidationError::InvalidName { .. } => ErrorKind::InvalidName,
            ValidationError::InvalidEntity { .. } => ErrorKind::InvalidEntity,
            ValidationError::InvalidUpsertRequest { .. } => ErrorKind::InvalidUpsertRequest,
        }
    }

    /// The resource whose validation failed
    pub fn resource(&self) -> Resource {
        match self {
            ValidationError::InvalidIdentifier { resource, .. }
            | ValidationError::InvalidUrl { resource, .. }
            | ValidationError::InvalidName { resource }
            | ValidationError::InvalidEntity { resource, .. }
            | ValidationError::InvalidUpsertRequest { resource, .. } => *resource,
            ValidationError::InvalidKind(err) => err.resource,
        }
    }
}

/// Errors reported by repository implementations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("operation deadline exceeded")]
    DeadlineExceeded,

    #[error("{resource} `{id}` not found in organization `{organization_id}`")]
    NotFound {
        resource: Resource,
        organization_id: String,
        id: String,
    },

    #[error("{} record failed validation", .0.resource())]
    Invalid(#[from] ValidationError),

    #[error("backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::Cancelled => ErrorKind::Cancelled,
            RepositoryError::DeadlineExceeded => ErrorKind::DeadlineExceeded,
            RepositoryError::NotFound { .. } => ErrorKind::NotFound,
            RepositoryError::Invalid(err) => err.kind(),
            RepositoryError::Backend { .. } => ErrorKind::Backend,
        }
    }

    pub fn not_found(resource: Resource, organization_id: &str, id: &str) -> Self {
        Self::NotFound {
            resource,
            organization_id: organization_id.to_string(),
            id: id.to_string(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }
}

/// Errors reported by service implementations
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to {operation} {resource}: invalid parameters")]
    InvalidParameters {
        operation: Operation,
        resource: Resource,
        #[source]
        source: ValidationError,
    },

    #[error("failed to {operation} {resource}")]
    Repository {
        operation: Operation,
        resource: Resource,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    /// Kind of the innermost cause
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidParameters { source, .. } => source.kind(),
            ServiceError::Repository { source, .. } => source.kind(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ServiceError::InvalidParameters { operation, .. }
            | ServiceError::Repository { operation, .. } => *operation,
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            ServiceError::InvalidParameters { resource, .. }
            | ServiceError::Repository { resource, .. } => *resource,
        }
    }
}
