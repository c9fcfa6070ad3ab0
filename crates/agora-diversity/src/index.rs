//! Per-dimension and aggregate diversity scores.

use std::collections::HashMap;

use agora_core::config::defaults::DEFAULT_MIN_DIMENSION_SAMPLES;
use agora_core::models::DiversityDimension;
use agora_core::{AttributeKey, AttributeSnapshot};

use crate::entropy::normalized_entropy;

/// Diversity scores over a set of followee snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiversityOutcome {
    /// Mean of the valid dimension scores; `None` when there are none.
    pub score: Option<u32>,
    /// One entry per valid dimension, registry order.
    pub dimensions: Vec<DiversityDimension>,
}

/// Computes the echo-chamber index.
///
/// A dimension is valid when at least `min_samples` followees disclosed it.
/// A valid dimension with a single observed value scores 0: that homogeneity
/// is informative, not missing data.
#[derive(Debug, Clone, Copy)]
pub struct DiversityIndexCalculator {
    min_samples: usize,
}

impl DiversityIndexCalculator {
    pub fn new(min_samples: usize) -> Self {
        Self {
            min_samples: min_samples.max(1),
        }
    }

    pub fn compute(&self, followees: &[AttributeSnapshot]) -> DiversityOutcome {
        let scored: Vec<(AttributeKey, f64)> = AttributeKey::ALL
            .iter()
            .filter_map(|&key| self.dimension_score(key, followees).map(|s| (key, s)))
            .collect();

        let score = if scored.is_empty() {
            None
        } else {
            let mean = scored.iter().map(|(_, s)| s).sum::<f64>() / scored.len() as f64;
            Some(mean.round() as u32)
        };

        DiversityOutcome {
            score,
            dimensions: scored
                .into_iter()
                .map(|(key, s)| DiversityDimension {
                    attribute_key: key,
                    label: key.label().to_string(),
                    score: s.round() as u32,
                })
                .collect(),
        }
    }

    /// Unrounded 0-100 score for one dimension, `None` when underpopulated.
    pub fn dimension_score(
        &self,
        key: AttributeKey,
        followees: &[AttributeSnapshot],
    ) -> Option<f64> {
        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for value in followees.iter().filter_map(|s| s.get(key)) {
            *frequencies.entry(value).or_default() += 1;
        }
        let total: usize = frequencies.values().sum();
        if total < self.min_samples {
            return None;
        }
        let counts: Vec<usize> = frequencies.into_values().collect();
        Some(normalized_entropy(&counts) * 100.0)
    }
}

impl Default for DiversityIndexCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DIMENSION_SAMPLES)
    }
}
