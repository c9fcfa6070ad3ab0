//! Row builders with deterministic ids and timestamps.

use std::sync::atomic::{AtomicI64, Ordering};

use agora_core::models::{StanceEvent, StanceSource};
use agora_core::{AttributeKey, AttributeSnapshot, Reaction};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed epoch all fixture timestamps are offset from.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// Build a snapshot from `(key, value)` pairs.
pub fn snapshot(values: &[(AttributeKey, &str)]) -> AttributeSnapshot {
    values
        .iter()
        .fold(AttributeSnapshot::new(), |s, &(key, value)| s.with(key, value))
}

/// Build a reaction with a random id, created at the fixture epoch.
pub fn reaction(post_id: &str, user_id: &str, score: u8, attrs: AttributeSnapshot) -> Reaction {
    Reaction {
        id: uuid::Uuid::new_v4().to_string(),
        post_id: post_id.to_string(),
        user_id: user_id.to_string(),
        score,
        attribute_snapshot: attrs,
        created_at: epoch(),
    }
}

/// A stance event `minutes` after the fixture epoch.
pub fn stance_event(user_id: &str, issue_id: &str, score: u8, minutes: i64) -> StanceEvent {
    StanceEvent {
        user_id: user_id.to_string(),
        issue_id: issue_id.to_string(),
        score,
        confidence: None,
        source_type: StanceSource::SelfReport,
        created_at: epoch() + Duration::minutes(minutes),
    }
}

/// Produces reactions from distinct synthetic users, one second apart.
#[derive(Debug, Default)]
pub struct ReactionFactory {
    next: AtomicI64,
}

impl ReactionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(&self, post_id: &str, score: u8, attrs: AttributeSnapshot) -> Reaction {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let mut r = reaction(post_id, &format!("user-{n}"), score, attrs);
        r.created_at = epoch() + Duration::seconds(n);
        r
    }

    /// `count` reactions with identical score and snapshot.
    pub fn many(
        &self,
        post_id: &str,
        count: usize,
        score: u8,
        attrs: &AttributeSnapshot,
    ) -> Vec<Reaction> {
        (0..count)
            .map(|_| self.make(post_id, score, attrs.clone()))
            .collect()
    }
}
