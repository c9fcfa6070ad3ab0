use serde::{Deserialize, Serialize};

use super::defaults;

/// Fixed-window throttle on stance writes per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_events: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_events: defaults::DEFAULT_RATE_LIMIT_MAX_EVENTS,
            window_secs: defaults::DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}
