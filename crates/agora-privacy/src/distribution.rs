//! Per-value breakdowns of a single attribute, with the cell floor applied.

use std::collections::BTreeMap;

use agora_core::models::{AttributeCounts, AttributeDistribution, ValueCount, ValueStat};
use agora_core::{AttributeKey, AttributeSnapshot, Scored};

use crate::gate::PrivacyGate;

/// Running score total for one cell.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScoreTally {
    pub sum: u64,
    pub count: usize,
}

impl ScoreTally {
    pub fn add(&mut self, score: u8) {
        self.sum += u64::from(score);
        self.count += 1;
    }

    pub fn average(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        (self.sum as f64 / self.count as f64).round() as u32
    }
}

/// Ordering of values on output: ordinal values follow their fixed scale,
/// everything else sorts lexicographically after them.
pub(crate) fn value_order(key: AttributeKey, value: &str) -> (usize, String) {
    (
        key.ordinal_index(value).unwrap_or(usize::MAX),
        value.to_string(),
    )
}

/// Count and mean score per disclosed value, for every registry key with at
/// least one value that passes the cell floor.
pub fn attribute_distribution<T: Scored>(
    gate: &PrivacyGate,
    opinions: &[T],
) -> Vec<AttributeDistribution> {
    AttributeKey::ALL
        .iter()
        .filter_map(|&key| {
            let mut tallies: BTreeMap<(usize, String), ScoreTally> = BTreeMap::new();
            for opinion in opinions {
                if let Some(value) = opinion.attributes().get(key) {
                    tallies
                        .entry(value_order(key, value))
                        .or_default()
                        .add(opinion.score());
                }
            }
            let kept = gate.retain_cells(tallies, |t| t.count);
            if kept.is_empty() {
                return None;
            }
            Some(AttributeDistribution {
                attribute_key: key,
                label: key.label().to_string(),
                values: kept
                    .into_iter()
                    .map(|((_, value), tally)| ValueStat {
                        label: key.value_label(&value),
                        value,
                        count: tally.count,
                        average_score: tally.average(),
                    })
                    .collect(),
            })
        })
        .collect()
}

/// Number of snapshots per disclosed value, with the cell floor applied.
pub fn attribute_counts(
    gate: &PrivacyGate,
    snapshots: &[AttributeSnapshot],
) -> Vec<AttributeCounts> {
    AttributeKey::ALL
        .iter()
        .filter_map(|&key| {
            let mut counts: BTreeMap<(usize, String), usize> = BTreeMap::new();
            for value in snapshots.iter().filter_map(|s| s.get(key)) {
                *counts.entry(value_order(key, value)).or_default() += 1;
            }
            let kept = gate.retain_cells(counts, |&c| c);
            if kept.is_empty() {
                return None;
            }
            Some(AttributeCounts {
                attribute_key: key,
                label: key.label().to_string(),
                values: kept
                    .into_iter()
                    .map(|((_, value), count)| ValueCount {
                        label: key.value_label(&value),
                        value,
                        count,
                    })
                    .collect(),
            })
        })
        .collect()
}
