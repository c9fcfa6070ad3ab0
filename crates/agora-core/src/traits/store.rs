use std::fmt;

use crate::attributes::AttributeSnapshot;
use crate::errors::StoreError;
use crate::models::{OpinionRecord, Reaction, StanceEvent, StanceRecord};

/// Grouping a reaction query is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionScope<'a> {
    Post(&'a str),
    Topic(&'a str),
    Issue(&'a str),
}

impl fmt::Display for ReactionScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post(id) => write!(f, "post:{id}"),
            Self::Topic(id) => write!(f, "topic:{id}"),
            Self::Issue(id) => write!(f, "issue:{id}"),
        }
    }
}

/// Read access to the reaction/attribute store, plus the single stance write.
///
/// Implementations own timeouts and retries. Every query is independent and
/// keyed by id, so callers may issue them concurrently.
pub trait IReactionStore: Send + Sync {
    /// Live reactions within `scope`. Each reaction carries its original snapshot.
    fn fetch_reactions(&self, scope: ReactionScope<'_>) -> Result<Vec<Reaction>, StoreError>;

    /// Freshness marker for the reactions visible within `topic_id`.
    ///
    /// Must change whenever a reaction in the topic is added, removed or
    /// rescored, or a post joins the topic. A value that changes more often
    /// (a store-wide write counter) is acceptable.
    fn topic_watermark(&self, topic_id: &str) -> Result<u64, StoreError>;

    /// Externally-sourced opinion records attached to an issue.
    fn fetch_issue_opinions(&self, issue_id: &str) -> Result<Vec<OpinionRecord>, StoreError>;

    /// Current attribute snapshots of every account `user_id` follows.
    fn fetch_followed_attribute_snapshots(
        &self,
        user_id: &str,
    ) -> Result<Vec<AttributeSnapshot>, StoreError>;

    /// Latest stance per issue for `user_id`.
    fn fetch_stance_records(&self, user_id: &str) -> Result<Vec<StanceRecord>, StoreError>;

    /// Stance history for one issue, ascending by `created_at`.
    fn fetch_stance_events(
        &self,
        user_id: &str,
        issue_id: &str,
    ) -> Result<Vec<StanceEvent>, StoreError>;

    /// Append `event` and upsert the matching [`StanceRecord`] in one transaction.
    fn append_stance_event(&self, event: &StanceEvent) -> Result<StanceRecord, StoreError>;
}
