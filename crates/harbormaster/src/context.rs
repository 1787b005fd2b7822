//! Execution context for repository and service calls
//!
//! A [`Context`] carries a cancellation token and an optional deadline.
//! [`Context::run`] races a future against both; when cancellation or the
//! deadline wins, the future is dropped before it completes.

use crate::error::RepositoryError;
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context without deadline that is never cancelled unless asked to
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the context by `timeout` from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.with_deadline(deadline)
    }

    /// Bound the context by `deadline`. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// A context cancelled together with this one, that can also be cancelled on its own
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail if the context is already cancelled or past its deadline
    pub fn check(&self) -> Result<(), RepositoryError> {
        if self.token.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(RepositoryError::DeadlineExceeded);
            }
        }
        Ok(())
    }

    /// Drive `future` to completion unless the context is cancelled or expires first
    pub async fn run<F, T>(&self, future: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        self.check()?;

        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;

            _ = self.token.cancelled() => Err(RepositoryError::Cancelled),
            _ = expired => Err(RepositoryError::DeadlineExceeded),
            result = future => result,
        }
    }
}
