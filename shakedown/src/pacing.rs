//! Pacing delays.
//!
//! A [`Pacing`] is a signed millisecond count. Any value `<= 0` disables the
//! delay, which lets configuration files use `-1` as the "off" sentinel.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay applied before and/or after an action's mutating work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pacing(i64);

impl Pacing {
    /// Pacing from a signed millisecond count; `<= 0` disables it.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Disabled pacing (`-1`).
    pub const fn disabled() -> Self {
        Self(-1)
    }

    /// Configured value in milliseconds, sentinel included.
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Whether a delay is applied at all.
    pub const fn is_enabled(&self) -> bool {
        self.0 > 0
    }

    /// The delay to sleep for, or `None` when disabled.
    pub fn delay(&self) -> Option<Duration> {
        u64::try_from(self.0)
            .ok()
            .filter(|millis| *millis > 0)
            .map(Duration::from_millis)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::disabled()
    }
}

impl From<Duration> for Pacing {
    fn from(duration: Duration) -> Self {
        Self(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delay() {
            Some(delay) => write!(f, "{:?}", delay),
            None => f.write_str("disabled"),
        }
    }
}
