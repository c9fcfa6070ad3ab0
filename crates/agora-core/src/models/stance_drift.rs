use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stance::StanceSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftDirection {
    MoreSupportive,
    MoreCritical,
    Stable,
}

impl DriftDirection {
    pub fn from_drift(drift: i32) -> Self {
        match drift.signum() {
            1 => Self::MoreSupportive,
            -1 => Self::MoreCritical,
            _ => Self::Stable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StanceDriftReport {
    pub summary: DriftSummary,
    pub per_issue: Vec<IssueDrift>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftSummary {
    pub issue_count: usize,
    pub total_samples: usize,
    /// Mean of `|drift|` across issues, one decimal.
    pub average_absolute_drift: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDrift {
    pub issue_id: String,
    pub first_score: u8,
    pub last_score: u8,
    pub drift: i32,
    pub direction: DriftDirection,
    pub samples: usize,
    pub series: Vec<StancePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StancePoint {
    pub score: u8,
    pub confidence: Option<u8>,
    pub source_type: StanceSource,
    pub created_at: DateTime<Utc>,
}
