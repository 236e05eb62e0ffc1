//! Configuration for innsync clients.
//!
//! Resolution is two-level: built-in defaults, optionally overridden by a
//! JSON settings file. The hosting application owns anything beyond that
//! (auth provider keys, per-user preferences).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::reconcile::DEFAULT_RETENTION_DAYS;

/// Complete innsync client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub poller: PollerConfig,
}

/// Booking API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the booking API (e.g. "<https://api.innsync.app>").
    pub base_url: String,
    /// Per-request timeout (seconds).
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.innsync.app".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// On-device booking cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Retention window for cached bookings, keyed on check-in.
    pub retention_days: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

/// Booking-status poller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Delay before the first status check (seconds).
    pub initial_delay_secs: u64,
    /// Fixed delay between subsequent checks (seconds).
    pub interval_secs: u64,
    /// Attempt cap; the poller gives up once this many checks have run.
    pub max_attempts: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            initial_delay_secs: 5,
            interval_secs: 3,
            max_attempts: 10,
        }
    }
}

impl Config {
    /// Load configuration from a JSON settings file on top of defaults.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error rather than a silent fallback.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}
