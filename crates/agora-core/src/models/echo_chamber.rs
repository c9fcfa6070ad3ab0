use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;

/// Diversity of the attributes of the accounts a user follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoChamberIndex {
    /// Mean of the valid dimension scores; `None` when no dimension had enough data.
    pub score: Option<u32>,
    pub dimensions: Vec<DiversityDimension>,
    pub distribution: Vec<AttributeCounts>,
    pub following_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversityDimension {
    pub attribute_key: AttributeKey,
    pub label: String,
    pub score: u32,
}

/// Followee counts per disclosed value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCounts {
    pub attribute_key: AttributeKey,
    pub label: String,
    pub values: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCount {
    pub value: String,
    pub label: String,
    pub count: usize,
}
