//! Many actions against the same cluster at once.

use std::sync::Arc;

use shakedown::{Action, MoveRandomRegionOfTableAction, MoveRegionsOfTableAction, TableName};

use super::common::{TABLE, cluster, context};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_actions_share_context() {
    let (cluster, regions) = cluster(4, 16);
    let ctx = context(&cluster, 11);
    let actions: Vec<Arc<dyn Action>> = vec![
        Arc::new(MoveRandomRegionOfTableAction::new(TableName::new(TABLE))),
        Arc::new(MoveRegionsOfTableAction::new(TableName::new(TABLE))),
    ];

    let mut handles = Vec::new();
    for i in 0..16 {
        let action = actions[i % actions.len()].clone();
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move { action.perform(&ctx).await }));
    }

    for handle in handles {
        handle.await.expect("task completes").expect("action succeeds");
    }

    // 8 single moves plus 8 full passes over 16 regions.
    assert_eq!(cluster.move_calls(), 8 + 8 * regions.len());
    assert_eq!(cluster.moves().len(), cluster.move_calls());
    assert_eq!(
        cluster.region_distribution().values().sum::<usize>(),
        regions.len()
    );
}
