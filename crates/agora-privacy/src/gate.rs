use std::collections::BTreeMap;

use agora_core::config::defaults::{DEFAULT_CELL_FLOOR, DEFAULT_SAMPLE_FLOOR};
use agora_core::config::PrivacyConfig;

/// Whole-sample eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCheck {
    Sufficient,
    /// `remaining` more samples are needed before anything is released.
    Insufficient { remaining: usize },
}

impl SampleCheck {
    pub fn is_sufficient(&self) -> bool {
        matches!(self, Self::Sufficient)
    }
}

/// The two independent disclosure floors.
///
/// - sample floor: below it no analysis is released at all
/// - cell floor: any single value or cross-tab cell below it is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyGate {
    sample_floor: usize,
    cell_floor: usize,
}

impl PrivacyGate {
    pub fn new(sample_floor: usize, cell_floor: usize) -> Self {
        Self {
            sample_floor,
            cell_floor: cell_floor.max(1),
        }
    }

    pub fn from_config(config: &PrivacyConfig) -> Self {
        Self::new(config.sample_floor, config.cell_floor)
    }

    pub fn sample_floor(&self) -> usize {
        self.sample_floor
    }

    pub fn cell_floor(&self) -> usize {
        self.cell_floor
    }

    pub fn check_sample(&self, total: usize) -> SampleCheck {
        if total >= self.sample_floor {
            SampleCheck::Sufficient
        } else {
            SampleCheck::Insufficient {
                remaining: self.sample_floor - total,
            }
        }
    }

    pub fn admits_cell(&self, count: usize) -> bool {
        count >= self.cell_floor
    }

    /// Drop every cell whose supporting count is below the cell floor.
    pub fn retain_cells<K: Ord, V>(
        &self,
        mut cells: BTreeMap<K, V>,
        count: impl Fn(&V) -> usize,
    ) -> BTreeMap<K, V> {
        let before = cells.len();
        cells.retain(|_, v| self.admits_cell(count(v)));
        tracing::trace!(kept = cells.len(), examined = before, "cell floor applied");
        cells
    }
}

impl Default for PrivacyGate {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_FLOOR, DEFAULT_CELL_FLOOR)
    }
}
