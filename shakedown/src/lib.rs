//! # shakedown
//!
//! Chaos actions that perturb the region layout of a live storage cluster.
//!
//! An [`Action`] is a unit of deliberate fault injection. An external
//! scheduler decides which actions run and how often; each invocation of
//! [`Action::perform`] reads fresh topology through the [`ClusterAdmin`]
//! capability carried by an [`ActionContext`], picks a target at random and
//! mutates the cluster.
//!
//! ## Actions
//!
//! | Action | What it does |
//! |--------|--------------|
//! | [`MoveRandomRegionOfTableAction`] | Moves one random region of a table to another live server |
//! | [`MoveRegionsOfTableAction`] | Moves every region of a table, in random order, within a time budget |
//!
//! ## Topology is stale on arrival
//!
//! Regions and servers may come and go between listing and moving: other
//! actions run concurrently against the same cluster, and the cluster
//! rebalances on its own. Actions never cache topology, and a target that
//! vanished before the move surfaces as an error of that one invocation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use shakedown::{Action, ActionContext, MoveRandomRegionOfTableAction, TableName};
//!
//! let ctx = ActionContext::with_seed(admin, 42);
//! let action = MoveRandomRegionOfTableAction::new(TableName::new("usertable"));
//! action.perform(&ctx).await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

// Re-export core types for convenience
pub use shakedown_core::{
    AdminError, ChaosError, ChaosResult, ClusterAdmin, RandomProvider, RegionInfo,
    SeededRandomProvider, ServerName, TableName, TimeProvider, TokioTimeProvider,
};

/// Action contract and the shared run context.
pub mod action;

/// Concrete chaos actions.
pub mod actions;

/// In-memory cluster for tests and local runs.
pub mod cluster;

/// Action configuration.
pub mod config;

/// Region-move primitive shared by the actions.
pub mod moves;

/// Pacing delays between mutating operations.
pub mod pacing;

/// Uniform random selection helpers.
pub mod select;

pub use action::{Action, ActionContext};
pub use actions::{MoveRandomRegionOfTableAction, MoveRegionsOfTableAction, region_actions};
pub use cluster::{InMemoryCluster, MoveRecord};
pub use config::ActionConfiguration;
pub use moves::{choose_destination, live_servers, move_region};
pub use pacing::Pacing;
pub use select::{select_random_item, shuffle};
