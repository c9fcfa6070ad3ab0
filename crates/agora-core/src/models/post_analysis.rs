use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;

/// Per-post analysis. Everything except the counts is absent below the sample floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnalysis {
    pub available: bool,
    pub total_reactions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_for_analysis: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_bad_ratio: Option<GoodBadRatio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_distribution: Option<Vec<AttributeDistribution>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_tabulation: Option<Vec<CrossTabulation>>,
}

impl PostAnalysis {
    /// The low-data response: counts and a hint, nothing derived.
    pub fn unavailable(total_reactions: usize, remaining: usize) -> Self {
        Self {
            available: false,
            total_reactions,
            remaining_for_analysis: Some(remaining),
            good_bad_ratio: None,
            attribute_distribution: None,
            cross_tabulation: None,
        }
    }
}

/// Integer percentages; `good + bad == 100` whenever any score was counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodBadRatio {
    pub good: u32,
    pub bad: u32,
}

/// Score summary per disclosed value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDistribution {
    pub attribute_key: AttributeKey,
    pub label: String,
    pub values: Vec<ValueStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueStat {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub average_score: u32,
}

/// Two-way table of one attribute against another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossTabulation {
    pub row_key: AttributeKey,
    pub column_key: AttributeKey,
    pub cells: Vec<CrossTabCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossTabCell {
    pub row_value: String,
    pub column_value: String,
    pub count: usize,
    pub average_score: u32,
}
