//! Action contract for chaos testing.
//!
//! [`Action`] is the shape every fault-injection action shares, so a
//! scheduler can hold a `Vec<Box<dyn Action>>` and invoke any of them
//! uniformly. [`ActionContext`] is the shared run handle: the cluster admin
//! capability, the random and time providers, and the run's cancellation
//! token.
//!
//! # Usage
//!
//! ```ignore
//! use shakedown::{Action, ActionContext, ChaosResult};
//!
//! struct ListOnly { table: TableName }
//!
//! #[async_trait]
//! impl Action for ListOnly {
//!     fn name(&self) -> &str { "list_only" }
//!     async fn perform(&self, ctx: &ActionContext) -> ChaosResult<()> {
//!         ctx.checkpoint()?;
//!         let regions = ctx.admin().list_regions(&self.table).await?;
//!         tracing::info!(count = regions.len(), "listed regions");
//!         Ok(())
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{Span, info_span};

use shakedown_core::{
    ChaosError, ChaosResult, ClusterAdmin, SeededRandomProvider, TimeProvider, TokioTimeProvider,
};

use crate::pacing::Pacing;

/// Shared context handed to every action invocation.
///
/// Owned by the harness and cheap to clone; actions only borrow it for the
/// duration of one `perform` call and never mutate it.
#[derive(Clone)]
pub struct ActionContext {
    admin: Arc<dyn ClusterAdmin>,
    random: SeededRandomProvider,
    time: TokioTimeProvider,
    shutdown: CancellationToken,
}

impl ActionContext {
    /// Create a new action context.
    pub fn new(
        admin: Arc<dyn ClusterAdmin>,
        random: SeededRandomProvider,
        time: TokioTimeProvider,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            admin,
            random,
            time,
            shutdown,
        }
    }

    /// Create a context with a seeded random provider, a fresh tokio time
    /// provider and a new cancellation token.
    pub fn with_seed(admin: Arc<dyn ClusterAdmin>, seed: u64) -> Self {
        Self::new(
            admin,
            SeededRandomProvider::new(seed),
            TokioTimeProvider::new(),
            CancellationToken::new(),
        )
    }

    /// Get the cluster admin capability.
    pub fn admin(&self) -> &dyn ClusterAdmin {
        self.admin.as_ref()
    }

    /// Get the seeded random provider.
    pub fn random(&self) -> &SeededRandomProvider {
        &self.random
    }

    /// Get the time provider.
    pub fn time(&self) -> &TokioTimeProvider {
        &self.time
    }

    /// Get the run's cancellation token.
    ///
    /// Cancelling it interrupts in-flight actions at their next pause or
    /// administrative call. Moves that already happened stay in place.
    pub fn shutdown(&self) -> &CancellationToken {
        &self.shutdown
    }

    /// Fail with [`ChaosError::Cancelled`] if the run has been cancelled.
    ///
    /// Actions call this before every administrative call.
    pub fn checkpoint(&self) -> ChaosResult<()> {
        if self.shutdown.is_cancelled() {
            Err(ChaosError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Sleep for `pacing`, unless it is disabled.
    ///
    /// The sleep races the cancellation token and holds no lock, so other
    /// actions keep running while this one is paused.
    pub async fn pause(&self, pacing: Pacing) -> ChaosResult<()> {
        let Some(delay) = pacing.delay() else {
            return Ok(());
        };

        tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => Err(ChaosError::Cancelled),
            _ = self.time.sleep(delay) => Ok(()),
        }
    }
}

impl fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("admin", &"<dyn ClusterAdmin>")
            .field("seed", &self.random.seed())
            .field("time", &self.time)
            .field("cancelled", &self.shutdown.is_cancelled())
            .finish()
    }
}

/// A unit of fault injection against a live cluster.
///
/// Actions are constructed once per chaos run with fixed parameters and may
/// be performed any number of times, possibly concurrently with each other.
/// They keep no mutable state between invocations.
#[async_trait]
pub trait Action: Send + Sync + 'static {
    /// Name of this action for reporting.
    fn name(&self) -> &str;

    /// Logging span for this action.
    ///
    /// Everything the action logs during `perform` is recorded inside it.
    fn span(&self) -> Span {
        info_span!("chaos_action", action = self.name())
    }

    /// Perform the action once.
    ///
    /// A run with nothing to act on is a successful no-op. Administrative
    /// failures are returned unmodified and never retried.
    async fn perform(&self, ctx: &ActionContext) -> ChaosResult<()>;
}
