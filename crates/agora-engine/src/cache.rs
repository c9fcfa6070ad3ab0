//! Topic-level result cache.
//!
//! Uses `moka::sync::Cache` with a cache-wide TTL, so a cached result is never
//! older than `ttl_secs`. Keyed by `(topic_id, attribute_key)`: consensus is
//! stored under `None`, each spectrum under its attribute.
//!
//! Every entry is stamped with the store's topic watermark at the time the
//! rows were read. A lookup under a different watermark is a miss and drops
//! the entry, so new reactions are visible on the next call. Hit/miss
//! accounting lives in `EngineMetrics`.

use std::time::Duration;

use agora_core::config::CacheConfig;
use agora_core::models::{Spectrum, TopicConsensus};
use agora_core::AttributeKey;
use moka::sync::Cache;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub topic_id: String,
    pub attribute_key: Option<AttributeKey>,
}

impl CacheKey {
    pub fn consensus(topic_id: &str) -> Self {
        Self {
            topic_id: topic_id.to_string(),
            attribute_key: None,
        }
    }

    pub fn spectrum(topic_id: &str, key: AttributeKey) -> Self {
        Self {
            topic_id: topic_id.to_string(),
            attribute_key: Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CachedAnalysis {
    Consensus(TopicConsensus),
    Spectrum(Spectrum),
}

#[derive(Debug, Clone)]
struct Stamped {
    watermark: u64,
    analysis: CachedAnalysis,
}

/// TTL cache whose entries are only valid for the watermark they were read at.
pub struct AnalysisCache {
    cache: Cache<CacheKey, Stamped>,
}

impl AnalysisCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// `None` when caching is disabled.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(Duration::from_secs(config.ttl_secs), config.max_entries))
    }

    /// The cached result for `key` if it was stored under `watermark`.
    pub fn get(&self, key: &CacheKey, watermark: u64) -> Option<CachedAnalysis> {
        let entry = self.cache.get(key)?;
        if entry.watermark == watermark {
            return Some(entry.analysis);
        }
        self.cache.invalidate(key);
        None
    }

    pub fn insert(&self, key: CacheKey, watermark: u64, analysis: CachedAnalysis) {
        self.cache.insert(
            key,
            Stamped {
                watermark,
                analysis,
            },
        );
    }

    /// Drop the consensus and every spectrum cached for `topic_id`.
    pub fn invalidate_topic(&self, topic_id: &str) {
        self.cache.invalidate(&CacheKey::consensus(topic_id));
        for &key in AttributeKey::ALL.iter() {
            self.cache.invalidate(&CacheKey::spectrum(topic_id, key));
        }
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Entries currently held, after pending maintenance has run.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl std::fmt::Debug for AnalysisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisCache")
            .field("entries", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}
