//! Move one random region of a table.

use async_trait::async_trait;
use tracing::{Instrument, Span, debug, info, info_span};

use shakedown_core::{ChaosResult, TableName};

use crate::action::{Action, ActionContext};
use crate::moves::{live_servers, move_region};
use crate::pacing::Pacing;
use crate::select::select_random_item;

/// Action that moves a random region of a table to another live server.
///
/// Per invocation: optional pause, list the table's regions (an empty table
/// is a no-op), pick one uniformly, list live servers, move it, optional
/// pause. A failed move ends the invocation with that error.
#[derive(Debug, Clone)]
pub struct MoveRandomRegionOfTableAction {
    sleep_time: Pacing,
    table: TableName,
}

impl MoveRandomRegionOfTableAction {
    /// Create the action with pacing disabled.
    pub fn new(table: TableName) -> Self {
        Self::with_sleep(Pacing::disabled(), table)
    }

    /// Create the action, pausing for `sleep_time` before and after each move.
    pub fn with_sleep(sleep_time: Pacing, table: TableName) -> Self {
        Self { sleep_time, table }
    }

    /// Target table.
    pub fn table(&self) -> &TableName {
        &self.table
    }

    /// Configured pacing.
    pub fn sleep_time(&self) -> Pacing {
        self.sleep_time
    }

    async fn run(&self, ctx: &ActionContext) -> ChaosResult<()> {
        ctx.pause(self.sleep_time).await?;

        info!("Performing action: Move random region of table {}", self.table);
        ctx.checkpoint()?;
        let regions = ctx.admin().list_regions(&self.table).await?;
        if regions.is_empty() {
            info!("Table {} doesn't have regions to move", self.table);
            return Ok(());
        }

        let region = select_random_item(ctx.random(), &regions);
        debug!(region = %region, "Move random region {}", region.region_name());

        ctx.checkpoint()?;
        let servers = live_servers(ctx.admin()).await?;
        ctx.checkpoint()?;
        move_region(ctx.admin(), ctx.random(), &servers, region).await?;

        ctx.pause(self.sleep_time).await
    }
}

#[async_trait]
impl Action for MoveRandomRegionOfTableAction {
    fn name(&self) -> &str {
        "move_random_region_of_table"
    }

    fn span(&self) -> Span {
        info_span!("chaos_action", action = self.name(), table = %self.table)
    }

    async fn perform(&self, ctx: &ActionContext) -> ChaosResult<()> {
        self.run(ctx).instrument(self.span()).await
    }
}
