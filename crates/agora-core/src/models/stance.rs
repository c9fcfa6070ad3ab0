//! Stance events (append-only) and their latest materialized view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a stance sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StanceSource {
    /// The user set the position directly.
    SelfReport,
    /// Answer to a structured questionnaire.
    Questionnaire,
    /// Derived from the user's reactions on the issue.
    ReactionDerived,
}

/// One self-reported position of a user on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StanceEvent {
    pub user_id: String,
    pub issue_id: String,
    pub score: u8,
    pub confidence: Option<u8>,
    pub source_type: StanceSource,
    pub created_at: DateTime<Utc>,
}

/// Latest stance per `(user_id, issue_id)`, upserted alongside every append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StanceRecord {
    pub user_id: String,
    pub issue_id: String,
    pub score: u8,
    pub confidence: Option<u8>,
    pub source_type: StanceSource,
    /// Number of events appended for this pair so far.
    pub sample_count: u32,
    pub updated_at: DateTime<Utc>,
}
