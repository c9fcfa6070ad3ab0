//! Post placement on the attribute axis.

use std::collections::HashMap;

use agora_consensus::stats::round_to;
use agora_core::models::SpectrumPoint;
use agora_core::{AttributeKey, Reaction};

use crate::axis::Axis;

/// Projected points and the axis they were placed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub points: Vec<SpectrumPoint>,
    pub axis_labels: Vec<String>,
}

#[derive(Debug, Default)]
struct PostTally<'a> {
    post_id: &'a str,
    index_sum: usize,
    mapped: usize,
    score_sum: u64,
    reactions: usize,
}

/// Projects a topic's reactions onto one attribute axis.
///
/// For each post, x is the mean axis index of reactors whose value maps onto
/// the axis (2 decimals), and y is the mean score over all of the post's
/// reactions (integer). Posts without a single mappable reactor produce no
/// point; callers must read a missing post as "not plottable", never as 0.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumProjector {
    min_value_support: usize,
}

impl SpectrumProjector {
    pub fn new() -> Self {
        Self {
            min_value_support: 1,
        }
    }

    /// Nominal values seen on fewer than `support` reactions across the whole
    /// topic are left off the axis and treated as unmapped.
    pub fn with_min_value_support(mut self, support: usize) -> Self {
        self.min_value_support = support.max(1);
        self
    }

    pub fn project(&self, key: AttributeKey, reactions: &[Reaction]) -> Projection {
        let axis = self.build_axis(key, reactions);

        let mut order: Vec<PostTally<'_>> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for reaction in reactions {
            let slot = *slots.entry(reaction.post_id.as_str()).or_insert_with(|| {
                order.push(PostTally {
                    post_id: &reaction.post_id,
                    ..PostTally::default()
                });
                order.len() - 1
            });
            let tally = &mut order[slot];
            tally.score_sum += u64::from(reaction.score);
            tally.reactions += 1;
            if let Some(index) = reaction
                .attribute_snapshot
                .get(key)
                .and_then(|value| axis.index_of(value))
            {
                tally.index_sum += index;
                tally.mapped += 1;
            }
        }

        let points = order
            .into_iter()
            .filter(|t| t.mapped > 0)
            .map(|t| SpectrumPoint {
                post_id: t.post_id.to_string(),
                x: round_to(t.index_sum as f64 / t.mapped as f64, 2),
                y: (t.score_sum as f64 / t.reactions as f64).round() as u32,
                reactor_count: t.mapped,
            })
            .collect();

        Projection {
            points,
            axis_labels: axis.labels(),
        }
    }

    fn build_axis(&self, key: AttributeKey, reactions: &[Reaction]) -> Axis {
        let mut support: HashMap<&str, usize> = HashMap::new();
        for value in reactions.iter().filter_map(|r| r.attribute_snapshot.get(key)) {
            *support.entry(value).or_default() += 1;
        }
        Axis::new(
            key,
            support
                .into_iter()
                .filter(|&(_, n)| n >= self.min_value_support)
                .map(|(value, _)| value),
        )
    }
}

impl Default for SpectrumProjector {
    fn default() -> Self {
        Self::new()
    }
}
