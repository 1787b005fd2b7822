//! Closed enumerations of allowed kind tags
//!
//! Each resource has a fixed allow-list of kind tags. A tag is accepted only
//! when it is byte-for-byte one of the listed values, so `"HTTPS"` is a helm
//! repository kind while `"https"` is not. Concrete kinds are declared with
//! the `closed_kind!` macro.

use crate::error::InvalidKindError;
use crate::resource::Resource;

/// A kind tag restricted to a process-wide allow-list
pub trait ClosedKind: Sized + Copy + 'static {
    /// Resource the allow-list belongs to
    const RESOURCE: Resource;

    /// Every accepted tag, in declaration order
    const ALLOWED_VALUES: &'static [&'static str];

    /// The tag of this kind, exactly as listed in the allow-list
    fn as_str(&self) -> &'static str;

    /// Exact match of a tag against the variants
    fn lookup(value: &str) -> Option<Self>;

    fn validate(value: &str) -> Result<(), InvalidKindError> {
        if Self::ALLOWED_VALUES.contains(&value) {
            Ok(())
        } else {
            Err(InvalidKindError::new(
                Self::RESOURCE,
                value,
                Self::ALLOWED_VALUES,
            ))
        }
    }

    fn is_valid(value: &str) -> bool {
        Self::validate(value).is_ok()
    }

    /// Build a kind from its tag, rejecting anything outside the allow-list
    fn from_string(value: &str) -> Result<Self, InvalidKindError> {
        Self::validate(value)?;
        Self::lookup(value).ok_or_else(|| {
            InvalidKindError::new(Self::RESOURCE, value, Self::ALLOWED_VALUES)
        })
    }
}
