//! Value types describing cluster topology.
//!
//! All of these are snapshots: they describe what the cluster reported at
//! query time and may be stale by the time an action acts on them.
//!
//! - [`TableName`]: identity of a table
//! - [`ServerName`]: identity of a live region server
//! - [`RegionInfo`]: identity and observed location of one region

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TableName(String);

impl TableName {
    /// Create a table name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the table name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TableName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identity of a region server.
///
/// The start code distinguishes successive incarnations of a server on the
/// same host and port: a restarted server is a different `ServerName`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServerName {
    /// Hostname the server is reachable at.
    pub host: String,
    /// RPC port.
    pub port: u16,
    /// Start timestamp of this server incarnation.
    pub start_code: u64,
}

impl ServerName {
    /// Create a server name.
    pub fn new(host: impl Into<String>, port: u16, start_code: u64) -> Self {
        Self {
            host: host.into(),
            port,
            start_code,
        }
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.host, self.port, self.start_code)
    }
}

/// Snapshot of a region's identity and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionInfo {
    /// Table the region belongs to.
    pub table: TableName,
    /// Encoded region name, unique within the cluster.
    pub encoded_name: String,
    /// First row key covered by the region (inclusive, empty for the first region).
    pub start_key: Vec<u8>,
    /// Last row key covered by the region (exclusive, empty for the last region).
    pub end_key: Vec<u8>,
    /// Server hosting the region when the snapshot was taken.
    pub server: Option<ServerName>,
}

impl RegionInfo {
    /// Create a region snapshot.
    pub fn new(
        table: TableName,
        encoded_name: impl Into<String>,
        start_key: impl Into<Vec<u8>>,
        end_key: impl Into<Vec<u8>>,
        server: Option<ServerName>,
    ) -> Self {
        Self {
            table,
            encoded_name: encoded_name.into(),
            start_key: start_key.into(),
            end_key: end_key.into(),
            server,
        }
    }

    /// Full region name, `table,start_key,encoded_name.`
    ///
    /// Non UTF-8 start keys are rendered lossily; the name is only used for
    /// logging.
    pub fn region_name(&self) -> String {
        format!(
            "{},{},{}.",
            self.table,
            String::from_utf8_lossy(&self.start_key),
            self.encoded_name
        )
    }
}

impl fmt::Display for RegionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.region_name())
    }
}
