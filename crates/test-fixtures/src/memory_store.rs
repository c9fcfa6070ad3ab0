//! In-memory reaction/attribute store used by tests, benches and demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use agora_core::errors::StoreError;
use agora_core::models::{OpinionRecord, Reaction, StanceEvent, StanceRecord};
use agora_core::traits::{IReactionStore, ReactionScope};
use agora_core::AttributeSnapshot;
use agora_temporal::next_record;

use crate::builders::reaction;

#[derive(Debug, Default)]
struct State {
    reactions: Vec<Reaction>,
    topic_posts: HashMap<String, Vec<String>>,
    issue_posts: HashMap<String, Vec<String>>,
    issue_opinions: HashMap<String, Vec<OpinionRecord>>,
    follows: HashMap<String, Vec<AttributeSnapshot>>,
    stance_events: Vec<StanceEvent>,
    stance_records: HashMap<(String, String), StanceRecord>,
    reaction_writes: u64,
}

/// Thread-safe store backed by plain collections.
///
/// `fail_with` makes every subsequent call return the given error until
/// `recover` is called; `fetch_count` counts row reads (watermark lookups
/// are not counted). Topic watermarks are a store-wide reaction write counter.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    failure: Mutex<Option<StoreError>>,
    fetches: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), StoreError> {
        let failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        match failure.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn read(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.check()?;
        Ok(self.state())
    }

    // --- Setup ---

    pub fn assign_post_to_topic(&self, topic_id: &str, post_id: &str) {
        let mut state = self.state();
        push_unique(&mut state.topic_posts, topic_id, post_id);
        state.reaction_writes += 1;
    }

    pub fn assign_post_to_issue(&self, issue_id: &str, post_id: &str) {
        push_unique(&mut self.state().issue_posts, issue_id, post_id);
    }

    /// Record a reaction. A user reacting again to the same post switches the
    /// score of the live reaction and keeps its original snapshot.
    pub fn react(&self, post_id: &str, user_id: &str, score: u8, attrs: AttributeSnapshot) {
        let mut state = self.state();
        state.reaction_writes += 1;
        match state
            .reactions
            .iter_mut()
            .find(|r| r.post_id == post_id && r.user_id == user_id)
        {
            Some(existing) => existing.score = score,
            None => state.reactions.push(reaction(post_id, user_id, score, attrs)),
        }
    }

    /// Insert fully-formed reactions, replacing any live reaction of the same
    /// user on the same post.
    pub fn insert_reactions(&self, rows: impl IntoIterator<Item = Reaction>) {
        let mut state = self.state();
        state.reaction_writes += 1;
        for row in rows {
            state
                .reactions
                .retain(|r| !(r.post_id == row.post_id && r.user_id == row.user_id));
            state.reactions.push(row);
        }
    }

    pub fn add_issue_opinion(&self, issue_id: &str, opinion: OpinionRecord) {
        self.state()
            .issue_opinions
            .entry(issue_id.to_string())
            .or_default()
            .push(opinion);
    }

    pub fn follow(&self, user_id: &str, followee: AttributeSnapshot) {
        self.state()
            .follows
            .entry(user_id.to_string())
            .or_default()
            .push(followee);
    }

    // --- Failure injection ---

    pub fn fail_with(&self, err: StoreError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Number of read calls served or refused so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn stance_event_count(&self) -> usize {
        self.state().stance_events.len()
    }
}

fn push_unique(map: &mut HashMap<String, Vec<String>>, group: &str, post_id: &str) {
    let posts = map.entry(group.to_string()).or_default();
    if !posts.iter().any(|p| p == post_id) {
        posts.push(post_id.to_string());
    }
}

impl IReactionStore for InMemoryStore {
    fn fetch_reactions(&self, scope: ReactionScope<'_>) -> Result<Vec<Reaction>, StoreError> {
        let state = self.read()?;
        let posts: Vec<String> = match scope {
            ReactionScope::Post(id) => vec![id.to_string()],
            ReactionScope::Topic(id) => state.topic_posts.get(id).cloned().unwrap_or_default(),
            ReactionScope::Issue(id) => state.issue_posts.get(id).cloned().unwrap_or_default(),
        };
        Ok(state
            .reactions
            .iter()
            .filter(|r| posts.contains(&r.post_id))
            .cloned()
            .collect())
    }

    fn topic_watermark(&self, _topic_id: &str) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.state().reaction_writes)
    }

    fn fetch_issue_opinions(&self, issue_id: &str) -> Result<Vec<OpinionRecord>, StoreError> {
        let state = self.read()?;
        Ok(state.issue_opinions.get(issue_id).cloned().unwrap_or_default())
    }

    fn fetch_followed_attribute_snapshots(
        &self,
        user_id: &str,
    ) -> Result<Vec<AttributeSnapshot>, StoreError> {
        let state = self.read()?;
        Ok(state.follows.get(user_id).cloned().unwrap_or_default())
    }

    fn fetch_stance_records(&self, user_id: &str) -> Result<Vec<StanceRecord>, StoreError> {
        let state = self.read()?;
        let mut records: Vec<StanceRecord> = state
            .stance_records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.issue_id.cmp(&b.issue_id));
        Ok(records)
    }

    fn fetch_stance_events(
        &self,
        user_id: &str,
        issue_id: &str,
    ) -> Result<Vec<StanceEvent>, StoreError> {
        let state = self.read()?;
        let mut events: Vec<StanceEvent> = state
            .stance_events
            .iter()
            .filter(|e| e.user_id == user_id && e.issue_id == issue_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.created_at);
        Ok(events)
    }

    fn append_stance_event(&self, event: &StanceEvent) -> Result<StanceRecord, StoreError> {
        self.check()?;
        let mut state = self.state();
        state.stance_events.push(event.clone());

        let key = (event.user_id.clone(), event.issue_id.clone());
        let record = next_record(state.stance_records.get(&key), event);
        state.stance_records.insert(key, record.clone());
        Ok(record)
    }
}
