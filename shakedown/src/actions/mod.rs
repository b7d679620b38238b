//! Concrete chaos actions.
//!
//! Both actions relocate regions of a single table through the shared
//! [`move_region`](crate::moves::move_region) primitive:
//!
//! - [`MoveRandomRegionOfTableAction`]: one random region per invocation
//! - [`MoveRegionsOfTableAction`]: every region, in random order, bounded by
//!   a time budget

mod move_random_region;
mod move_regions;

pub use move_random_region::MoveRandomRegionOfTableAction;
pub use move_regions::{DEFAULT_MAX_TIME, MoveRegionsOfTableAction};

use crate::action::Action;
use crate::config::ActionConfiguration;

/// Build the region actions described by `config`.
pub fn region_actions(config: &ActionConfiguration) -> Vec<Box<dyn Action>> {
    vec![
        Box::new(MoveRandomRegionOfTableAction::with_sleep(
            config.pacing(),
            config.table_name(),
        )),
        Box::new(MoveRegionsOfTableAction::with_sleep(
            config.pacing(),
            config.table_name(),
            config.max_time(),
        )),
    ]
}
