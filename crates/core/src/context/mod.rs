//! Caller-supplied cancellation and deadline signal.
//!
//! A [`Context`] travels with every repository call and is forwarded to
//! both the durable store and the cache. Adapters wrap their I/O in
//! [`Context::run`] so that a canceled or expired context aborts the
//! in-flight call.
//!
//! ```
//! use std::time::Duration;
//! use usercache_core::context::{Context, ContextError};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! let ctx = Context::background().with_timeout(Duration::from_millis(10));
//! let result = ctx.run(std::future::pending::<()>()).await;
//! assert_eq!(result, Err(ContextError::DeadlineExceeded));
//! # });
//! ```

mod error;

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

pub use error::ContextError;

/// Cancellation and deadline signal for a single logical operation.
///
/// Cloning a context shares its cancellation token: canceling any clone
/// cancels all of them. Use [`Context::child`] for a context that can be
/// canceled independently of its parent.
#[derive(Debug, Clone)]
pub struct Context {
    deadline: Option<Instant>,
    token: CancellationToken,
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl Context {
    /// A context with no deadline that is never canceled unless asked to.
    pub fn background() -> Self {
        Self {
            deadline: None,
            token: CancellationToken::new(),
        }
    }

    /// Sets a deadline `timeout` from now, keeping an earlier existing one.
    ///
    /// A timeout too large to represent as an `Instant` sets no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Sets an absolute deadline, keeping an earlier existing one.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Replaces the cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Derives a context that is canceled whenever this one is.
    pub fn child(&self) -> Self {
        Self {
            deadline: self.deadline,
            token: self.token.child_token(),
        }
    }

    /// Cancels this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, if any. Zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns why the context is done, or `None` if work may proceed.
    ///
    /// Cancellation takes precedence over an expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            return Some(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Runs `future` until it completes, the context is canceled, or the
    /// deadline passes, whichever happens first.
    ///
    /// When the context is already done the future is dropped unpolled.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ContextError::Canceled),
            _ = deadline => Err(ContextError::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
