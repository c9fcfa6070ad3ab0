use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;
use crate::constants::HISTOGRAM_BINS;

/// Consensus summary over a topic's (or an issue's) scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicConsensus {
    pub score: u32,
    pub total_reactions: usize,
    pub average_score: u32,
    pub distribution: [usize; HISTOGRAM_BINS],
    pub attribute_breakdown: Vec<AttributeDivergence>,
}

/// How closely the value-groups of one attribute agree (100 = identical means).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDivergence {
    pub attribute_key: AttributeKey,
    pub label: String,
    pub score: u32,
}
