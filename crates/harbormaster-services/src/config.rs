//! Service configuration management

use crate::error::{ConfigError, Result};
use harbormaster::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const OPERATION_TIMEOUT_VAR: &str = "HARBORMASTER_OPERATION_TIMEOUT_SECONDS";

const DEFAULT_OPERATION_TIMEOUT_SECONDS: u64 = 30;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Upper bound for a single repository call; `None` leaves only the caller's deadline
    pub operation_timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        match std::env::var(OPERATION_TIMEOUT_VAR) {
            Ok(value) => Self::from_timeout_value(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Read a `.env` file if one exists, then load from the environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    fn from_timeout_value(value: &str) -> Result<Self> {
        let seconds: u64 = value
            .trim()
            .parse()
            .map_err(|err: std::num::ParseIntError| ConfigError::InvalidValue {
                var: OPERATION_TIMEOUT_VAR,
                value: value.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            operation_timeout: (seconds > 0).then(|| Duration::from_secs(seconds)),
        })
    }

    /// Derive the context a single repository call runs under
    pub fn bound(&self, ctx: &Context) -> Context {
        let child = ctx.child();
        match self.operation_timeout {
            Some(timeout) => child.with_timeout(timeout),
            None => child,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            operation_timeout: Some(Duration::from_secs(DEFAULT_OPERATION_TIMEOUT_SECONDS)),
        }
    }
}
