//! Latest-stance materialization.

use agora_core::{StanceEvent, StanceRecord};

/// The record that replaces `previous` once `event` is appended.
///
/// Stores call this inside the same transaction as the append, so the
/// record never lags the event log.
pub fn next_record(previous: Option<&StanceRecord>, event: &StanceEvent) -> StanceRecord {
    StanceRecord {
        user_id: event.user_id.clone(),
        issue_id: event.issue_id.clone(),
        score: event.score,
        confidence: event.confidence,
        source_type: event.source_type,
        sample_count: previous.map_or(1, |r| r.sample_count.saturating_add(1)),
        updated_at: event.created_at,
    }
}
