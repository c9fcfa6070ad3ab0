//! Test fixtures for the Agora workspace.
//!
//! - [`load_fixture`] and friends: typed loading of the JSON scenarios in `data/`
//! - [`builders`]: terse constructors for snapshots, reactions and stance events
//! - [`InMemoryStore`]: an `IReactionStore` with failure injection

pub mod builders;
pub mod memory_store;

use std::path::PathBuf;

use serde::de::DeserializeOwned;

pub use builders::{reaction, snapshot, stance_event, ReactionFactory};
pub use memory_store::InMemoryStore;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A topic scenario: posts with their reactions, as stored.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicScenario {
    pub topic_id: String,
    pub posts: Vec<ScenarioPost>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPost {
    pub post_id: String,
    pub reactions: Vec<ScenarioReaction>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReaction {
    pub user_id: String,
    pub score: u8,
    #[serde(default)]
    pub attribute_snapshot: agora_core::AttributeSnapshot,
}

impl TopicScenario {
    /// Load a scenario into a fresh store.
    pub fn into_store(self) -> InMemoryStore {
        let store = InMemoryStore::new();
        for post in self.posts {
            store.assign_post_to_topic(&self.topic_id, &post.post_id);
            for r in post.reactions {
                store.react(&post.post_id, &r.user_id, r.score, r.attribute_snapshot);
            }
        }
        store
    }
}
