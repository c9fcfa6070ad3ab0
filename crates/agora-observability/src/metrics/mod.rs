//! Engine counters.
//!
//! [`EngineMetrics`] is shared by reference across request threads, so every
//! counter is an atomic. [`EngineMetrics::snapshot`] freezes them into a
//! serializable [`MetricsSnapshot`].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::tracing_setup::spans::names;

/// Public engine operations, one request counter each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    PostAnalysis,
    TopicConsensus,
    IssueConsensus,
    EchoChamber,
    Spectrum,
    StanceDrift,
    RecordStance,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::PostAnalysis,
        Operation::TopicConsensus,
        Operation::IssueConsensus,
        Operation::EchoChamber,
        Operation::Spectrum,
        Operation::StanceDrift,
        Operation::RecordStance,
    ];

    /// The span name the operation runs under.
    pub fn span_name(self) -> &'static str {
        match self {
            Self::PostAnalysis => names::POST_ANALYSIS,
            Self::TopicConsensus => names::TOPIC_CONSENSUS,
            Self::IssueConsensus => names::ISSUE_CONSENSUS,
            Self::EchoChamber => names::ECHO_CHAMBER,
            Self::Spectrum => names::SPECTRUM,
            Self::StanceDrift => names::STANCE_DRIFT,
            Self::RecordStance => names::RECORD_STANCE,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default)]
pub struct EngineMetrics {
    requests: [AtomicU64; 7],
    insufficient_samples: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    store_failures: AtomicU64,
    rate_limited: AtomicU64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, op: Operation) {
        self.requests[op.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// A post analysis answered with `available = false`.
    pub fn record_insufficient_sample(&self) {
        self.insufficient_samples.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rate_limited(&self) {
        self.rate_limited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self, op: Operation) -> u64 {
        self.requests[op.index()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let cache_hits = self.cache_hits.load(Ordering::Relaxed);
        let cache_misses = self.cache_misses.load(Ordering::Relaxed);
        let lookups = cache_hits + cache_misses;
        MetricsSnapshot {
            requests: Operation::ALL
                .iter()
                .map(|&op| (op.span_name().to_string(), self.requests(op)))
                .collect(),
            insufficient_samples: self.insufficient_samples.load(Ordering::Relaxed),
            cache_hits,
            cache_misses,
            cache_hit_rate: if lookups == 0 {
                0.0
            } else {
                cache_hits as f64 / lookups as f64
            },
            store_failures: self.store_failures.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in self.requests.iter().chain([
            &self.insufficient_samples,
            &self.cache_hits,
            &self.cache_misses,
            &self.store_failures,
            &self.rate_limited,
        ]) {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of [`EngineMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Request count keyed by span name.
    pub requests: BTreeMap<String, u64>,
    pub insufficient_samples: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Hits over lookups, 0.0 before the first lookup.
    pub cache_hit_rate: f64,
    pub store_failures: u64,
    pub rate_limited: u64,
}

impl MetricsSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_index_their_own_counter() {
        let metrics = EngineMetrics::new();
        metrics.record_request(Operation::Spectrum);
        metrics.record_request(Operation::Spectrum);
        metrics.record_request(Operation::RecordStance);
        assert_eq!(metrics.requests(Operation::Spectrum), 2);
        assert_eq!(metrics.requests(Operation::RecordStance), 1);
        assert_eq!(metrics.requests(Operation::PostAnalysis), 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let metrics = EngineMetrics::new();
        metrics.record_request(Operation::EchoChamber);
        metrics.record_cache_hit();
        metrics.record_rate_limited();
        metrics.reset();
        let snap = metrics.snapshot();
        assert!(snap.requests.values().all(|&n| n == 0));
        assert_eq!(snap.cache_hits, 0);
        assert_eq!(snap.rate_limited, 0);
    }
}
