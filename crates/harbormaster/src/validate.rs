//! Ordered field checks shared by the entity constructors
//!
//! Constructors call these one after another and stop at the first failure,
//! so the reported error always belongs to the earliest violated rule.

use crate::error::{MissingFieldError, ValidationError};
use crate::kind::ClosedKind;
use crate::resource::{IdentifierSubject, Resource};
use url::Url;
use uuid::Uuid;

/// Parse a UUID-shaped identifier
pub fn parse_identifier(
    resource: Resource,
    subject: IdentifierSubject,
    value: &str,
) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|source| ValidationError::InvalidIdentifier {
        resource,
        subject,
        value: value.to_string(),
        source,
    })
}

/// Check that a URL is structurally well formed. Reachability is not checked.
pub fn parse_url(resource: Resource, value: &str) -> Result<Url, ValidationError> {
    Url::parse(value).map_err(|source| ValidationError::InvalidUrl {
        resource,
        value: value.to_string(),
        source,
    })
}

pub fn parse_kind<K: ClosedKind>(value: &str) -> Result<K, ValidationError> {
    K::from_string(value).map_err(ValidationError::InvalidKind)
}

pub fn require_name(resource: Resource, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName { resource });
    }
    Ok(())
}

/// Whole-object presence check; reports the first absent field
pub fn require_fields(
    resource: Resource,
    fields: &[(&'static str, bool)],
) -> Result<(), ValidationError> {
    match first_missing(fields) {
        Some(source) => Err(ValidationError::InvalidEntity { resource, source }),
        None => Ok(()),
    }
}

/// Presence check for upsert requests; reports the first empty field
pub fn require_request_fields(
    resource: Resource,
    fields: &[(&'static str, bool)],
) -> Result<(), ValidationError> {
    match first_missing(fields) {
        Some(source) => Err(ValidationError::InvalidUpsertRequest { resource, source }),
        None => Ok(()),
    }
}

fn first_missing(fields: &[(&'static str, bool)]) -> Option<MissingFieldError> {
    fields
        .iter()
        .find(|(_, present)| !present)
        .map(|(field, _)| MissingFieldError { field: *field })
}
