//! Region-move primitive.
//!
//! [`move_region`] relocates one region to a server picked from a candidate
//! pool and reports the outcome. It is shared by every action that moves
//! regions. It never retries: a region or server that disappeared since it
//! was listed is reported to the caller as a failed move.

use tracing::{debug, warn};

use shakedown_core::{
    ChaosError, ChaosResult, ClusterAdmin, RandomProvider, RegionInfo, ServerName,
};

use crate::select::select_random_item;

/// List the currently live servers.
///
/// Always a fresh query; the result is a candidate pool for
/// [`move_region`], not a cache.
pub async fn live_servers(admin: &dyn ClusterAdmin) -> ChaosResult<Vec<ServerName>> {
    Ok(admin.list_live_servers().await?)
}

/// Choose a destination for a region currently hosted on `current`.
///
/// Picks uniformly among the servers other than `current`. When every
/// candidate is the current host, picks uniformly among all of them.
/// Returns `None` only for an empty pool.
pub fn choose_destination<'a, R: RandomProvider>(
    random: &R,
    servers: &'a [ServerName],
    current: Option<&ServerName>,
) -> Option<&'a ServerName> {
    if servers.is_empty() {
        return None;
    }

    let others: Vec<&ServerName> = servers
        .iter()
        .filter(|server| Some(*server) != current)
        .collect();

    if others.is_empty() {
        Some(select_random_item(random, servers))
    } else {
        Some(*select_random_item(random, &others))
    }
}

/// Move `region` to a server picked from `servers`.
///
/// Logs into the caller's current span. Returns the destination on success.
/// Fails fast with [`ChaosError::NoCandidateServers`] on an empty pool, and
/// returns the admin error unmodified if the move itself fails.
pub async fn move_region<R: RandomProvider>(
    admin: &dyn ClusterAdmin,
    random: &R,
    servers: &[ServerName],
    region: &RegionInfo,
) -> ChaosResult<ServerName> {
    let Some(destination) = choose_destination(random, servers, region.server.as_ref()) else {
        warn!(region = %region, "No live servers to move region to");
        return Err(ChaosError::NoCandidateServers {
            region: region.region_name(),
        });
    };

    debug!(
        region = %region,
        from = ?region.server.as_ref().map(ToString::to_string),
        to = %destination,
        "Moving {} to {}",
        region.region_name(),
        destination
    );

    match admin.move_region(region, destination).await {
        Ok(()) => {
            debug!(region = %region, to = %destination, "Region moved");
            Ok(destination.clone())
        }
        Err(error) => {
            warn!(
                region = %region,
                to = %destination,
                error = %error,
                "Move failed, might be caused by other chaos"
            );
            Err(error.into())
        }
    }
}
