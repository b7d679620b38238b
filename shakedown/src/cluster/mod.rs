//! Cluster admin implementations.
//!
//! Real deployments plug their own [`ClusterAdmin`](shakedown_core::ClusterAdmin)
//! client into an [`ActionContext`](crate::ActionContext). This module ships
//! [`InMemoryCluster`], a self-contained cluster model used by the tests and
//! the `region_chaos` binary.

mod memory;

pub use memory::{InMemoryCluster, MoveRecord};
