//! Move every region of a table.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{Instrument, Span, info, info_span};

use shakedown_core::{ChaosResult, TableName, TimeProvider};

use crate::action::{Action, ActionContext};
use crate::moves::{live_servers, move_region};
use crate::pacing::Pacing;
use crate::select::shuffle;

/// Default time budget for one invocation of [`MoveRegionsOfTableAction`].
pub const DEFAULT_MAX_TIME: Duration = Duration::from_secs(10 * 60);

/// Action that moves all regions of a table, one by one, in random order.
///
/// Pauses once before listing, then after every move. The live-server pool
/// is listed once per invocation. Moves stop early once
/// `max_time` has elapsed; the first failed move ends the invocation.
#[derive(Debug, Clone)]
pub struct MoveRegionsOfTableAction {
    sleep_time: Pacing,
    table: TableName,
    max_time: Duration,
}

impl MoveRegionsOfTableAction {
    /// Create the action with pacing disabled and the default time budget.
    pub fn new(table: TableName) -> Self {
        Self::with_sleep(Pacing::disabled(), table, DEFAULT_MAX_TIME)
    }

    /// Create the action, pausing for `sleep_time` before listing and after
    /// each move.
    pub fn with_sleep(sleep_time: Pacing, table: TableName, max_time: Duration) -> Self {
        Self {
            sleep_time,
            table,
            max_time,
        }
    }

    /// Target table.
    pub fn table(&self) -> &TableName {
        &self.table
    }

    /// Time budget per invocation.
    pub fn max_time(&self) -> Duration {
        self.max_time
    }

    async fn run(&self, ctx: &ActionContext) -> ChaosResult<()> {
        ctx.pause(self.sleep_time).await?;

        info!("Performing action: Move regions of table {}", self.table);
        ctx.checkpoint()?;
        let mut regions = ctx.admin().list_regions(&self.table).await?;
        if regions.is_empty() {
            info!("Table {} doesn't have regions to move", self.table);
            return Ok(());
        }

        ctx.checkpoint()?;
        let servers = live_servers(ctx.admin()).await?;
        shuffle(ctx.random(), &mut regions);

        let start = ctx.time().now();
        let mut moved = 0usize;
        for region in &regions {
            ctx.checkpoint()?;
            let elapsed = ctx.time().now().saturating_sub(start);
            if elapsed > self.max_time {
                info!(
                    moved,
                    remaining = regions.len() - moved,
                    "Reached max time of {:?}, stopping",
                    self.max_time
                );
                break;
            }

            move_region(ctx.admin(), ctx.random(), &servers, region).await?;
            moved += 1;
            ctx.pause(self.sleep_time).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Action for MoveRegionsOfTableAction {
    fn name(&self) -> &str {
        "move_regions_of_table"
    }

    fn span(&self) -> Span {
        info_span!("chaos_action", action = self.name(), table = %self.table)
    }

    async fn perform(&self, ctx: &ActionContext) -> ChaosResult<()> {
        self.run(ctx).instrument(self.span()).await
    }
}
