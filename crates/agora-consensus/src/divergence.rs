//! Attribute divergence: how far apart the value-groups of an attribute sit.
//!
//! For each registry key, reactions are grouped by disclosed value. Groups
//! smaller than `min_group_size` are dropped, and at least two groups must
//! remain. The score is `round(max(0, 1 - var/2500) * 100)` where `var` is the
//! population variance of the group means. 2500 is the variance of two means
//! pinned at 0 and 100, so 100 means every group agrees and 0 means maximal
//! polarization.

use std::collections::BTreeMap;

use agora_core::config::defaults::DEFAULT_MIN_GROUP_SIZE;
use agora_core::constants::MAX_MEAN_VARIANCE;
use agora_core::models::AttributeDivergence;
use agora_core::{AttributeKey, Scored};

use crate::stats::population_variance;

/// Computes per-attribute divergence scores over a set of scored opinions.
#[derive(Debug, Clone, Copy)]
pub struct DivergenceAnalyzer {
    min_group_size: usize,
}

impl DivergenceAnalyzer {
    pub fn new(min_group_size: usize) -> Self {
        Self {
            min_group_size: min_group_size.max(1),
        }
    }

    /// Scores for every registry key with at least two qualifying groups, in registry order.
    pub fn analyze<T: Scored>(&self, opinions: &[T]) -> Vec<AttributeDivergence> {
        AttributeKey::ALL
            .iter()
            .filter_map(|&key| {
                self.score_for(key, opinions).map(|score| AttributeDivergence {
                    attribute_key: key,
                    label: key.label().to_string(),
                    score,
                })
            })
            .collect()
    }

    /// Divergence score for a single key, or `None` when fewer than two groups qualify.
    pub fn score_for<T: Scored>(&self, key: AttributeKey, opinions: &[T]) -> Option<u32> {
        let means = self.group_means(key, opinions);
        if means.len() < 2 {
            return None;
        }
        let variance = population_variance(&means)?;
        let agreement = (1.0 - variance / MAX_MEAN_VARIANCE).max(0.0);
        Some((agreement * 100.0).round() as u32)
    }

    /// Mean score of each qualifying group for `key`.
    fn group_means<T: Scored>(&self, key: AttributeKey, opinions: &[T]) -> Vec<f64> {
        let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
        for opinion in opinions {
            if let Some(value) = opinion.attributes().get(key) {
                let entry = groups.entry(value).or_default();
                entry.0 += u64::from(opinion.score());
                entry.1 += 1;
            }
        }
        groups
            .into_values()
            .filter(|&(_, count)| count >= self.min_group_size)
            .map(|(sum, count)| sum as f64 / count as f64)
            .collect()
    }
}

impl Default for DivergenceAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_GROUP_SIZE)
    }
}
