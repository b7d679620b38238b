//! Pacing delays around the mutating work.

use std::time::Duration;

use shakedown::{Action, MoveRandomRegionOfTableAction, Pacing, TableName};

use super::common::{TABLE, cluster, context};

#[tokio::test(start_paused = true)]
async fn test_enabled_pacing_pauses_before_and_after() {
    let (cluster, _) = cluster(2, 3);
    let ctx = context(&cluster, 1);
    let delay = Duration::from_millis(750);
    let action =
        MoveRandomRegionOfTableAction::with_sleep(Pacing::from(delay), TableName::new(TABLE));

    let start = tokio::time::Instant::now();
    action.perform(&ctx).await.expect("move succeeds");

    assert!(start.elapsed() >= delay * 2);
    assert_eq!(cluster.move_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_pacing_takes_no_time() {
    let (cluster, _) = cluster(2, 3);
    let ctx = context(&cluster, 2);

    for millis in [-1, 0] {
        let action = MoveRandomRegionOfTableAction::with_sleep(
            Pacing::from_millis(millis),
            TableName::new(TABLE),
        );
        let start = tokio::time::Instant::now();
        action.perform(&ctx).await.expect("move succeeds");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

#[tokio::test(start_paused = true)]
async fn test_empty_table_only_pays_pre_delay() {
    let (cluster, _) = cluster(2, 0);
    let ctx = context(&cluster, 3);
    let delay = Duration::from_millis(400);
    let action =
        MoveRandomRegionOfTableAction::with_sleep(Pacing::from(delay), TableName::new(TABLE));

    let start = tokio::time::Instant::now();
    action.perform(&ctx).await.expect("no-op succeeds");

    let elapsed = start.elapsed();
    assert!(elapsed >= delay);
    assert!(elapsed < delay * 2);
}
