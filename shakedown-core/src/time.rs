//! Time provider abstraction for pacing delays.
//!
//! Actions sleep and measure elapsed time through a [`TimeProvider`], which
//! lets tests run against tokio's paused clock.

use async_trait::async_trait;
use std::time::Duration;

/// Provider trait for time operations.
#[async_trait]
pub trait TimeProvider: Clone + Send + Sync {
    /// Sleep for the specified duration.
    ///
    /// Cancellation is the caller's concern: race this future against the
    /// run's cancellation token.
    async fn sleep(&self, duration: Duration);

    /// Time elapsed since the provider was created.
    fn now(&self) -> Duration;
}

/// Time provider using tokio's timer.
///
/// `now()` is measured with [`tokio::time::Instant`], so it follows a paused
/// or manually advanced test clock.
#[derive(Debug, Clone)]
pub struct TokioTimeProvider {
    start_time: tokio::time::Instant,
}

impl TokioTimeProvider {
    /// Create a new tokio time provider.
    ///
    /// Must be called from within a tokio runtime when the test clock is
    /// paused, so that the start instant is taken from the paused clock.
    pub fn new() -> Self {
        Self {
            start_time: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeProvider for TokioTimeProvider {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }
}
