//! Error types shared by the cluster admin capability and chaos actions.

use thiserror::Error;

use crate::types::{ServerName, TableName};

/// Errors surfaced by a [`ClusterAdmin`](crate::ClusterAdmin) implementation.
///
/// Chaos actions never interpret these; they are carried upward unmodified
/// inside [`ChaosError::Admin`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The table does not exist.
    #[error("table {0} not found")]
    TableNotFound(TableName),

    /// The region is not (or no longer) known to the cluster.
    #[error("unknown region {0}")]
    UnknownRegion(String),

    /// The server is not (or no longer) live.
    #[error("unknown server {0}")]
    UnknownServer(ServerName),

    /// The cluster refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The administrative endpoint could not be reached.
    #[error("admin unavailable: {0}")]
    Unavailable(String),
}

/// Errors that end a chaos action invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChaosError {
    /// An administrative call failed.
    #[error("admin call failed: {0}")]
    Admin(#[from] AdminError),

    /// A move was requested with an empty candidate server pool.
    #[error("no candidate servers to move region {region} to")]
    NoCandidateServers {
        /// Name of the region that could not be moved.
        region: String,
    },

    /// The surrounding chaos run was cancelled.
    #[error("chaos run cancelled")]
    Cancelled,

    /// The action was configured with unusable parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// A type alias for `Result<T, ChaosError>`.
pub type ChaosResult<T> = Result<T, ChaosError>;
