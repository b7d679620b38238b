//! MoveRandomRegionOfTableAction behaviour.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shakedown::{
    Action, ActionContext, AdminError, ChaosError, ClusterAdmin, InMemoryCluster,
    MoveRandomRegionOfTableAction, RegionInfo, ServerName, TableName,
};

use super::common::{TABLE, cluster, context, init_tracing, server};

#[tokio::test]
async fn test_empty_table_is_noop() {
    init_tracing();
    let (cluster, _) = cluster(2, 0);
    let ctx = context(&cluster, 1);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    action.perform(&ctx).await.expect("no-op succeeds");

    assert_eq!(cluster.list_regions_calls(), 1);
    assert_eq!(cluster.list_servers_calls(), 0);
    assert_eq!(cluster.move_calls(), 0);
}

#[tokio::test]
async fn test_moves_exactly_one_region_per_call() {
    init_tracing();
    let (cluster, _) = cluster(2, 3);
    let ctx = context(&cluster, 2);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    for expected in 1..=5 {
        action.perform(&ctx).await.expect("move succeeds");
        assert_eq!(cluster.move_calls(), expected);
        assert_eq!(cluster.list_regions_calls(), expected);
        assert_eq!(cluster.list_servers_calls(), expected);
    }
}

#[tokio::test]
async fn test_three_regions_two_servers_scenario() {
    init_tracing();
    let (cluster, regions) = cluster(2, 3);
    let ctx = context(&cluster, 3);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    action.perform(&ctx).await.expect("move succeeds");

    let moves = cluster.moves();
    assert_eq!(moves.len(), 1);
    let record = &moves[0];
    assert!(regions.iter().any(|r| r.encoded_name == record.region));
    assert!(record.to == server(1) || record.to == server(2));
    assert_ne!(Some(&record.to), record.from.as_ref());
}

#[tokio::test]
async fn test_destination_always_differs_from_host() {
    let (cluster, _) = cluster(2, 3);
    let ctx = context(&cluster, 4);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    for _ in 0..50 {
        action.perform(&ctx).await.expect("move succeeds");
    }

    for record in cluster.moves() {
        assert_ne!(Some(&record.to), record.from.as_ref());
    }
}

#[tokio::test]
async fn test_selection_is_uniform_over_regions() {
    let (cluster, regions) = cluster(3, 3);
    let ctx = context(&cluster, 5);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));
    let trials = 3000;

    for _ in 0..trials {
        action.perform(&ctx).await.expect("move succeeds");
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in cluster.moves() {
        *counts.entry(record.region).or_default() += 1;
    }

    let expected = trials / regions.len();
    for region in &regions {
        let count = counts.get(&region.encoded_name).copied().unwrap_or(0);
        let deviation = (count as f64 - expected as f64).abs() / expected as f64;
        assert!(
            deviation < 0.15,
            "region {} moved {} times, expected ~{}",
            region,
            count,
            expected
        );
    }
}

#[tokio::test]
async fn test_same_seed_same_moves() {
    let run = |seed| async move {
        let (cluster, _) = cluster(3, 6);
        let ctx = context(&cluster, seed);
        let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));
        for _ in 0..10 {
            action.perform(&ctx).await.expect("move succeeds");
        }
        cluster.moves()
    };

    assert_eq!(run(77).await, run(77).await);
}

#[tokio::test]
async fn test_move_failure_propagates_without_retry() {
    init_tracing();
    let (cluster, regions) = cluster(2, 3);
    let ctx = context(&cluster, 6);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));
    cluster.fail_next_move(AdminError::Rejected("region in transition".into()));

    let result = action.perform(&ctx).await;

    assert_eq!(
        result,
        Err(ChaosError::Admin(AdminError::Rejected(
            "region in transition".into()
        )))
    );
    assert_eq!(cluster.move_calls(), 1);
    assert!(cluster.moves().is_empty());
    for region in &regions {
        assert_eq!(cluster.region_location(&region.encoded_name), region.server);
    }
}

#[tokio::test]
async fn test_unreachable_admin_propagates() {
    let (cluster, _) = cluster(2, 3);
    let ctx = context(&cluster, 7);
    cluster.set_unavailable(true);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    let result = action.perform(&ctx).await;

    assert!(matches!(
        result,
        Err(ChaosError::Admin(AdminError::Unavailable(_)))
    ));
    assert_eq!(cluster.move_calls(), 0);
}

#[tokio::test]
async fn test_missing_table_propagates() {
    let (cluster, _) = cluster(2, 3);
    let ctx = context(&cluster, 8);
    let action = MoveRandomRegionOfTableAction::new(TableName::new("missing"));

    let result = action.perform(&ctx).await;

    assert_eq!(
        result,
        Err(ChaosError::Admin(AdminError::TableNotFound(TableName::new(
            "missing"
        ))))
    );
}

#[tokio::test]
async fn test_no_live_servers_fails_fast() {
    let cluster = Arc::new(InMemoryCluster::new());
    cluster.create_table(TableName::new(TABLE), 2);
    let ctx = context(&cluster, 9);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    let result = action.perform(&ctx).await;

    assert!(matches!(
        result,
        Err(ChaosError::NoCandidateServers { .. })
    ));
    assert_eq!(cluster.move_calls(), 0);
}

/// Admin whose topology changes right after regions are listed, as if
/// another action merged every listed region away.
struct VanishingRegions {
    inner: Arc<InMemoryCluster>,
}

#[async_trait]
impl ClusterAdmin for VanishingRegions {
    async fn list_regions(&self, table: &TableName) -> Result<Vec<RegionInfo>, AdminError> {
        let regions = self.inner.list_regions(table).await?;
        for region in &regions {
            self.inner.drop_region(&region.encoded_name);
        }
        Ok(regions)
    }

    async fn list_live_servers(&self) -> Result<Vec<ServerName>, AdminError> {
        self.inner.list_live_servers().await
    }

    async fn move_region(
        &self,
        region: &RegionInfo,
        destination: &ServerName,
    ) -> Result<(), AdminError> {
        self.inner.move_region(region, destination).await
    }
}

#[tokio::test]
async fn test_stale_region_is_a_failed_move() {
    let (cluster, _) = cluster(2, 3);
    let admin = Arc::new(VanishingRegions {
        inner: cluster.clone(),
    });
    let ctx = ActionContext::with_seed(admin, 10);
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));

    let result = action.perform(&ctx).await;

    assert!(matches!(
        result,
        Err(ChaosError::Admin(AdminError::UnknownRegion(_)))
    ));
    assert_eq!(cluster.move_calls(), 1);
}

#[test]
fn test_action_metadata() {
    let action = MoveRandomRegionOfTableAction::new(TableName::new(TABLE));
    assert_eq!(action.name(), "move_random_region_of_table");
    assert_eq!(action.table(), &TableName::new(TABLE));
    assert!(!action.sleep_time().is_enabled());
}
