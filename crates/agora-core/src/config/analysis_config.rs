use serde::{Deserialize, Serialize};

use super::defaults;
use crate::attributes::AttributeKey;

/// Structural thresholds of the analytics components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Smallest value-group the divergence analyzer keeps.
    pub min_group_size: usize,
    /// Fewest disclosed values for a diversity dimension to count.
    pub min_dimension_samples: usize,
    /// Attribute pairs cross-tabulated in post analysis (row, column).
    pub cross_tab_pairs: Vec<(AttributeKey, AttributeKey)>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_group_size: defaults::DEFAULT_MIN_GROUP_SIZE,
            min_dimension_samples: defaults::DEFAULT_MIN_DIMENSION_SAMPLES,
            cross_tab_pairs: AttributeKey::all_pairs(),
        }
    }
}
