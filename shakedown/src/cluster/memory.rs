//! In-memory implementation of [`ClusterAdmin`].
//!
//! Holds a table → region map and a live-server set behind a mutex, counts
//! every administrative call and lets tests inject failures. Regions are
//! assigned round-robin when a table is created; servers leaving the cluster
//! leave their regions unassigned.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use shakedown_core::{AdminError, ClusterAdmin, RegionInfo, ServerName, TableName};

/// One successful region move, as recorded by [`InMemoryCluster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Encoded name of the moved region.
    pub region: String,
    /// Host before the move.
    pub from: Option<ServerName>,
    /// Host after the move.
    pub to: ServerName,
}

#[derive(Debug, Default)]
struct ClusterState {
    servers: BTreeSet<ServerName>,
    tables: BTreeSet<TableName>,
    /// Regions by encoded name.
    regions: BTreeMap<String, RegionInfo>,
    next_region_id: u64,
    next_server: usize,
    unavailable: bool,
    move_failures: VecDeque<AdminError>,
    history: Vec<MoveRecord>,
}

/// A cluster that lives entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryCluster {
    state: Mutex<ClusterState>,
    list_regions_calls: AtomicUsize,
    list_servers_calls: AtomicUsize,
    move_calls: AtomicUsize,
}

impl InMemoryCluster {
    /// Create an empty cluster with no servers and no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cluster with the given live servers.
    pub fn with_servers(servers: impl IntoIterator<Item = ServerName>) -> Self {
        let cluster = Self::new();
        for server in servers {
            cluster.add_server(server);
        }
        cluster
    }

    fn state(&self) -> MutexGuard<'_, ClusterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a live server.
    pub fn add_server(&self, server: ServerName) {
        self.state().servers.insert(server);
    }

    /// Remove a server; its regions become unassigned.
    pub fn remove_server(&self, server: &ServerName) {
        let mut state = self.state();
        state.servers.remove(server);
        for region in state.regions.values_mut() {
            if region.server.as_ref() == Some(server) {
                region.server = None;
            }
        }
    }

    /// Create `table` split into `regions` regions and return them.
    ///
    /// Regions are assigned round-robin over the live servers, or left
    /// unassigned when there are none. Creating an existing table adds
    /// regions to it.
    pub fn create_table(&self, table: TableName, regions: usize) -> Vec<RegionInfo> {
        let mut state = self.state();
        state.tables.insert(table.clone());

        let servers: Vec<ServerName> = state.servers.iter().cloned().collect();
        let mut created = Vec::with_capacity(regions);
        for i in 0..regions {
            let start_key = if i == 0 {
                Vec::new()
            } else {
                format!("row-{:04}", i).into_bytes()
            };
            let end_key = if i + 1 == regions {
                Vec::new()
            } else {
                format!("row-{:04}", i + 1).into_bytes()
            };

            let server = if servers.is_empty() {
                None
            } else {
                let server = servers[state.next_server % servers.len()].clone();
                state.next_server += 1;
                Some(server)
            };

            let encoded_name = format!("{:032x}", state.next_region_id);
            state.next_region_id += 1;

            let region = RegionInfo::new(table.clone(), encoded_name, start_key, end_key, server);
            state
                .regions
                .insert(region.encoded_name.clone(), region.clone());
            created.push(region);
        }
        created
    }

    /// Remove a region from the cluster, as a concurrent merge would.
    pub fn drop_region(&self, encoded_name: &str) -> Option<RegionInfo> {
        self.state().regions.remove(encoded_name)
    }

    /// Current regions of `table`, ordered by encoded name.
    pub fn regions_of(&self, table: &TableName) -> Vec<RegionInfo> {
        self.state()
            .regions
            .values()
            .filter(|region| &region.table == table)
            .cloned()
            .collect()
    }

    /// Current host of a region.
    pub fn region_location(&self, encoded_name: &str) -> Option<ServerName> {
        self.state()
            .regions
            .get(encoded_name)
            .and_then(|region| region.server.clone())
    }

    /// Number of regions hosted by each live server.
    pub fn region_distribution(&self) -> BTreeMap<ServerName, usize> {
        let state = self.state();
        let mut distribution: BTreeMap<ServerName, usize> =
            state.servers.iter().map(|s| (s.clone(), 0)).collect();
        for server in state.regions.values().filter_map(|r| r.server.as_ref()) {
            if let Some(count) = distribution.get_mut(server) {
                *count += 1;
            }
        }
        distribution
    }

    /// Make every administrative call fail with [`AdminError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state().unavailable = unavailable;
    }

    /// Fail the next move attempt with `error`. Failures queue up.
    pub fn fail_next_move(&self, error: AdminError) {
        self.state().move_failures.push_back(error);
    }

    /// Successful moves, oldest first.
    pub fn moves(&self) -> Vec<MoveRecord> {
        self.state().history.clone()
    }

    /// Number of `list_regions` calls so far.
    pub fn list_regions_calls(&self) -> usize {
        self.list_regions_calls.load(Ordering::SeqCst)
    }

    /// Number of `list_live_servers` calls so far.
    pub fn list_servers_calls(&self) -> usize {
        self.list_servers_calls.load(Ordering::SeqCst)
    }

    /// Number of `move_region` calls so far, failed ones included.
    pub fn move_calls(&self) -> usize {
        self.move_calls.load(Ordering::SeqCst)
    }
}

fn unavailable() -> AdminError {
    AdminError::Unavailable("in-memory cluster marked unavailable".to_string())
}

#[async_trait]
impl ClusterAdmin for InMemoryCluster {
    async fn list_regions(&self, table: &TableName) -> Result<Vec<RegionInfo>, AdminError> {
        self.list_regions_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state();
        if state.unavailable {
            return Err(unavailable());
        }
        if !state.tables.contains(table) {
            return Err(AdminError::TableNotFound(table.clone()));
        }
        Ok(state
            .regions
            .values()
            .filter(|region| &region.table == table)
            .cloned()
            .collect())
    }

    async fn list_live_servers(&self) -> Result<Vec<ServerName>, AdminError> {
        self.list_servers_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state();
        if state.unavailable {
            return Err(unavailable());
        }
        Ok(state.servers.iter().cloned().collect())
    }

    async fn move_region(
        &self,
        region: &RegionInfo,
        destination: &ServerName,
    ) -> Result<(), AdminError> {
        self.move_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state();
        if state.unavailable {
            return Err(unavailable());
        }
        if let Some(error) = state.move_failures.pop_front() {
            return Err(error);
        }
        if !state.servers.contains(destination) {
            return Err(AdminError::UnknownServer(destination.clone()));
        }

        let current = state
            .regions
            .get_mut(&region.encoded_name)
            .ok_or_else(|| AdminError::UnknownRegion(region.encoded_name.clone()))?;
        let from = current.server.replace(destination.clone());

        state.history.push(MoveRecord {
            region: region.encoded_name.clone(),
            from,
            to: destination.clone(),
        });
        Ok(())
    }
}
