//! # Action Configuration
//!
//! Parameters shared by the region actions, loadable from JSON:
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `table` | `usertable` | Table whose regions are moved |
//! | `sleep_time_ms` | `-1` | Pacing delay; `<= 0` disables it |
//! | `max_time_ms` | `600000` | Time budget for moving every region |
//! | `seed` | none | Seed for target selection; random when absent |
//!
//! ```rust
//! use shakedown::ActionConfiguration;
//!
//! let config = ActionConfiguration::from_json(r#"{ "table": "orders", "sleep_time_ms": 500 }"#)
//!     .expect("valid configuration");
//! assert!(config.pacing().is_enabled());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use shakedown_core::{ChaosError, ChaosResult, TableName};

use crate::actions::DEFAULT_MAX_TIME;
use crate::pacing::Pacing;

/// Configuration for the region actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfiguration {
    /// Table whose regions are moved.
    pub table: String,
    /// Pacing delay in milliseconds; `<= 0` disables it.
    pub sleep_time_ms: i64,
    /// Time budget in milliseconds for moving every region of the table.
    pub max_time_ms: u64,
    /// Seed for target selection.
    pub seed: Option<u64>,
}

impl Default for ActionConfiguration {
    fn default() -> Self {
        Self {
            table: "usertable".to_string(),
            sleep_time_ms: Pacing::disabled().millis(),
            max_time_ms: DEFAULT_MAX_TIME.as_millis() as u64,
            seed: None,
        }
    }
}

impl ActionConfiguration {
    /// Configuration for local runs: no pacing, fixed seed.
    pub fn fast_local(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            seed: Some(0),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ChaosResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ChaosError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the actions cannot run with.
    pub fn validate(&self) -> ChaosResult<()> {
        if self.table.trim().is_empty() {
            return Err(ChaosError::InvalidConfiguration(
                "table name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Target table.
    pub fn table_name(&self) -> TableName {
        TableName::new(self.table.clone())
    }

    /// Pacing delay.
    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.sleep_time_ms)
    }

    /// Time budget for moving every region.
    pub fn max_time(&self) -> Duration {
        Duration::from_millis(self.max_time_ms)
    }
}
