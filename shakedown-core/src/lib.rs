//! # shakedown-core
//!
//! Core abstractions for the shakedown chaos actions.
//!
//! This crate provides the capability traits and value types that chaos
//! actions are written against, so the actions themselves never depend on a
//! concrete cluster client:
//!
//! - **Capability traits**: [`ClusterAdmin`] for topology queries and region
//!   moves, [`RandomProvider`] for target selection, [`TimeProvider`] for
//!   pacing delays
//! - **Value types**: [`TableName`], [`RegionInfo`], [`ServerName`]
//! - **Errors**: [`AdminError`] from the administrative layer, [`ChaosError`]
//!   for everything an action can fail with
//!
//! ## Provider Traits
//!
//! The provider traits keep target selection and pacing replayable:
//!
//! - [`SeededRandomProvider`]: ChaCha8-backed, shareable across tasks
//! - [`TokioTimeProvider`]: tokio timers (honours a paused test clock)

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod admin;
mod error;
mod random;
mod time;
mod types;

// Capability exports
pub use admin::ClusterAdmin;
pub use random::{RandomProvider, SeededRandomProvider};
pub use time::{TimeProvider, TokioTimeProvider};

// Error exports
pub use error::{AdminError, ChaosError, ChaosResult};

// Value type exports
pub use types::{RegionInfo, ServerName, TableName};
