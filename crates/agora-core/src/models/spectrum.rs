use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;

/// Posts of a topic placed on an attribute axis against their average score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spectrum {
    pub attribute_key: AttributeKey,
    pub points: Vec<SpectrumPoint>,
    /// Label of axis position `i` at index `i`.
    pub axis_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumPoint {
    pub post_id: String,
    /// Mean axis index of the post's reactors, rounded to 2 decimals.
    pub x: f64,
    /// Mean score over all of the post's reactions.
    pub y: u32,
    /// Reactors that carried a mappable value.
    pub reactor_count: usize,
}
