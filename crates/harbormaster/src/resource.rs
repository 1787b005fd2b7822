//! Resource, operation and identifier labels shared by both resource kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The resource kinds managed by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Registry,
    HelmRepository,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Registry => "registry",
            Resource::HelmRepository => "helm repository",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which identifier of a resource a check is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierSubject {
    /// The id of the registry or helm repository itself
    Resource,
    /// The id of the owning organization
    Organization,
}

impl IdentifierSubject {
    /// Field name used in diagnostics
    pub fn field(&self) -> &'static str {
        match self {
            IdentifierSubject::Resource => "id",
            IdentifierSubject::Organization => "organization_id",
        }
    }
}

impl fmt::Display for IdentifierSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierSubject::Resource => f.write_str("resource id"),
            IdentifierSubject::Organization => f.write_str("organization id"),
        }
    }
}

/// Repository / service operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}
