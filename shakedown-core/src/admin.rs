//! Cluster administrative capability.
//!
//! [`ClusterAdmin`] is the only way chaos actions observe or mutate the
//! cluster. It is deliberately narrow: list regions of a table, list live
//! servers, move a region. Implementations own their own concurrency control;
//! callers assume nothing is serialized across concurrent actions.

use async_trait::async_trait;

use crate::error::AdminError;
use crate::types::{RegionInfo, ServerName, TableName};

/// Administrative handle to a live cluster.
///
/// Every call reads or mutates live state. Nothing returned is cached by the
/// caller, and a region or server listed by one call may be gone by the next.
#[async_trait]
pub trait ClusterAdmin: Send + Sync {
    /// List the regions of `table`, possibly empty.
    async fn list_regions(&self, table: &TableName) -> Result<Vec<RegionInfo>, AdminError>;

    /// List the currently live region servers.
    async fn list_live_servers(&self) -> Result<Vec<ServerName>, AdminError>;

    /// Reassign `region` to `destination`.
    ///
    /// Fails if the region or the destination no longer exists, or if the
    /// cluster refuses the move.
    async fn move_region(
        &self,
        region: &RegionInfo,
        destination: &ServerName,
    ) -> Result<(), AdminError>;
}
