use serde::{Deserialize, Serialize};

use super::defaults;

/// Disclosure thresholds shared by every attribute-keyed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Minimum reactions before any analysis is released.
    pub sample_floor: usize,
    /// Minimum supporting count for a single distribution or cross-tab cell.
    pub cell_floor: usize,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            sample_floor: defaults::DEFAULT_SAMPLE_FLOOR,
            cell_floor: defaults::DEFAULT_CELL_FLOOR,
        }
    }
}
