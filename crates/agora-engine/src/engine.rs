//! [`AnalyticsEngine`]: the facade over the store and the analytics crates.

use std::sync::Arc;

use agora_consensus::stats::rounded_mean_score;
use agora_consensus::{build_histogram, consensus_score, good_bad_ratio, DivergenceAnalyzer};
use agora_core::errors::{AgoraError, AgoraResult, StoreError};
use agora_core::models::{
    EchoChamberIndex, OpinionRecord, PostAnalysis, Spectrum, StanceDriftReport, TopicConsensus,
};
use agora_core::traits::{IRateLimiter, IReactionStore, RateDecision, ReactionScope};
use agora_core::{AgoraConfig, AttributeKey, Scored, StanceEvent, StanceRecord};
use agora_diversity::DiversityIndexCalculator;
use agora_observability::{
    echo_chamber_span, issue_consensus_span, post_analysis_span, record_stance_span,
    spectrum_span, stance_drift_span, topic_consensus_span, EngineMetrics, Operation,
};
use agora_privacy::{
    attribute_counts, attribute_distribution, cross_tabulate, PrivacyGate, SampleCheck,
};
use agora_spectrum::SpectrumProjector;
use agora_temporal::{validate_stance_event, StanceDriftTracker};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::cache::{AnalysisCache, CacheKey, CachedAnalysis};
use crate::rate_limit::FixedWindowRateLimiter;

/// Composes the analytics components over an [`IReactionStore`].
///
/// Independent store queries within one operation run in parallel on the
/// rayon pool; the transforms themselves run sequentially on the results.
pub struct AnalyticsEngine<S: IReactionStore> {
    store: S,
    config: AgoraConfig,
    gate: PrivacyGate,
    divergence: DivergenceAnalyzer,
    diversity: DiversityIndexCalculator,
    drift: StanceDriftTracker,
    cache: Option<AnalysisCache>,
    rate_limiter: Arc<dyn IRateLimiter>,
    metrics: EngineMetrics,
}

impl<S: IReactionStore> AnalyticsEngine<S> {
    /// Build an engine from a validated config. The rate limiter defaults to
    /// a [`FixedWindowRateLimiter`] owned by this engine.
    pub fn new(store: S, config: AgoraConfig) -> Self {
        let rate_limiter = Arc::new(FixedWindowRateLimiter::from_config(&config.rate_limit));
        Self {
            gate: PrivacyGate::from_config(&config.privacy),
            divergence: DivergenceAnalyzer::new(config.analysis.min_group_size),
            diversity: DiversityIndexCalculator::new(config.analysis.min_dimension_samples),
            drift: StanceDriftTracker::new(),
            cache: AnalysisCache::from_config(&config.cache),
            rate_limiter,
            metrics: EngineMetrics::new(),
            store,
            config,
        }
    }

    /// Replace the stance-write throttle.
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn IRateLimiter>) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &AgoraConfig {
        &self.config
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    pub fn cache(&self) -> Option<&AnalysisCache> {
        self.cache.as_ref()
    }

    // --- Post ---

    /// Ratio, attribute distribution and cross-tabulation for one post.
    ///
    /// Below the sample floor only the count and the remaining-count hint are
    /// returned.
    pub fn compute_post_analysis(&self, post_id: &str) -> AgoraResult<PostAnalysis> {
        let _span = post_analysis_span!(post_id).entered();
        self.metrics.record_request(Operation::PostAnalysis);

        let reactions = self.fetched(self.store.fetch_reactions(ReactionScope::Post(post_id)))?;
        let total = reactions.len();

        if let SampleCheck::Insufficient { remaining } = self.gate.check_sample(total) {
            self.metrics.record_insufficient_sample();
            debug!(total, remaining, "post below sample floor");
            return Ok(PostAnalysis::unavailable(total, remaining));
        }

        let scores: Vec<u8> = reactions.iter().map(|r| r.score).collect();
        let distribution = attribute_distribution(&self.gate, &reactions);
        let cross_tabulation =
            cross_tabulate(&self.gate, &reactions, &self.config.analysis.cross_tab_pairs);
        debug!(
            total,
            attributes = distribution.len(),
            tables = cross_tabulation.len(),
            "post analysis ready"
        );

        Ok(PostAnalysis {
            available: true,
            total_reactions: total,
            remaining_for_analysis: None,
            good_bad_ratio: good_bad_ratio(&scores),
            attribute_distribution: Some(distribution),
            cross_tabulation: Some(cross_tabulation),
        })
    }

    // --- Consensus ---

    pub fn compute_topic_consensus(&self, topic_id: &str) -> AgoraResult<TopicConsensus> {
        let _span = topic_consensus_span!(topic_id).entered();
        self.metrics.record_request(Operation::TopicConsensus);

        let key = CacheKey::consensus(topic_id);
        let watermark = self.watermark(topic_id)?;
        if let Some(CachedAnalysis::Consensus(hit)) = self.cached(&key, watermark) {
            return Ok(hit);
        }

        let reactions = self.fetched(self.store.fetch_reactions(ReactionScope::Topic(topic_id)))?;
        let consensus = self.consensus_over(&reactions);
        self.remember(key, watermark, CachedAnalysis::Consensus(consensus.clone()));
        Ok(consensus)
    }

    /// Topic-consensus shape over an issue's reactions plus its external opinions.
    pub fn compute_issue_consensus(&self, issue_id: &str) -> AgoraResult<TopicConsensus> {
        let _span = issue_consensus_span!(issue_id).entered();
        self.metrics.record_request(Operation::IssueConsensus);

        let (reactions, opinions) = rayon::join(
            || self.store.fetch_reactions(ReactionScope::Issue(issue_id)),
            || self.store.fetch_issue_opinions(issue_id),
        );
        let reactions = self.fetched(reactions)?;
        let opinions = self.fetched(opinions)?;

        let combined: Vec<OpinionRecord> = reactions
            .into_iter()
            .map(OpinionRecord::from)
            .chain(opinions)
            .collect();
        Ok(self.consensus_over(&combined))
    }

    /// The attribute breakdown is withheld below the sample floor; the
    /// unkeyed aggregates are always returned.
    fn consensus_over<T: Scored>(&self, opinions: &[T]) -> TopicConsensus {
        let scores: Vec<u8> = opinions.iter().map(|o| o.score()).collect();
        let attribute_breakdown = if self.gate.check_sample(scores.len()).is_sufficient() {
            self.divergence.analyze(opinions)
        } else {
            Vec::new()
        };
        TopicConsensus {
            score: consensus_score(&scores),
            total_reactions: scores.len(),
            average_score: rounded_mean_score(&scores),
            distribution: build_histogram(scores.iter().copied()),
            attribute_breakdown,
        }
    }

    // --- Echo chamber ---

    pub fn compute_echo_chamber_index(&self, user_id: &str) -> AgoraResult<EchoChamberIndex> {
        let _span = echo_chamber_span!(user_id).entered();
        self.metrics.record_request(Operation::EchoChamber);

        let followees = self.fetched(self.store.fetch_followed_attribute_snapshots(user_id))?;
        let outcome = self.diversity.compute(&followees);
        let distribution = if self.gate.check_sample(followees.len()).is_sufficient() {
            attribute_counts(&self.gate, &followees)
        } else {
            Vec::new()
        };
        debug!(
            following = followees.len(),
            dimensions = outcome.dimensions.len(),
            "echo chamber index ready"
        );

        Ok(EchoChamberIndex {
            score: outcome.score,
            dimensions: outcome.dimensions,
            distribution,
            following_count: followees.len(),
        })
    }

    // --- Spectrum ---

    /// Place a topic's posts on the axis of `attribute_key`.
    ///
    /// Unknown keys fail before the store is touched. Nominal values and
    /// points with fewer supporting reactors than the cell floor are left out.
    pub fn compute_spectrum(&self, topic_id: &str, attribute_key: &str) -> AgoraResult<Spectrum> {
        let _span = spectrum_span!(topic_id, attribute_key).entered();
        self.metrics.record_request(Operation::Spectrum);

        let key: AttributeKey = attribute_key.parse()?;
        let cache_key = CacheKey::spectrum(topic_id, key);
        let watermark = self.watermark(topic_id)?;
        if let Some(CachedAnalysis::Spectrum(hit)) = self.cached(&cache_key, watermark) {
            return Ok(hit);
        }

        let reactions = self.fetched(self.store.fetch_reactions(ReactionScope::Topic(topic_id)))?;
        let cell_floor = self.gate.cell_floor();
        let projection = SpectrumProjector::new()
            .with_min_value_support(cell_floor)
            .project(key, &reactions);

        let spectrum = Spectrum {
            attribute_key: key,
            points: projection
                .points
                .into_iter()
                .filter(|p| self.gate.admits_cell(p.reactor_count))
                .collect(),
            axis_labels: projection.axis_labels,
        };
        self.remember(cache_key, watermark, CachedAnalysis::Spectrum(spectrum.clone()));
        Ok(spectrum)
    }

    // --- Stance ---

    /// Drift per issue the user holds a stance on, plus a summary.
    pub fn compute_stance_drift(&self, user_id: &str) -> AgoraResult<StanceDriftReport> {
        let _span = stance_drift_span!(user_id).entered();
        self.metrics.record_request(Operation::StanceDrift);

        let records = self.fetched(self.store.fetch_stance_records(user_id))?;
        let histories = self.fetched(
            records
                .par_iter()
                .map(|record| {
                    self.store
                        .fetch_stance_events(user_id, &record.issue_id)
                        .map(|events| (record.issue_id.as_str(), events))
                })
                .collect::<Result<Vec<_>, StoreError>>(),
        )?;

        Ok(self.drift.report(
            histories
                .iter()
                .map(|(issue_id, events)| (*issue_id, events.as_slice())),
        ))
    }

    /// Validate, throttle, then append `event` and return the updated record.
    pub fn record_stance(&self, event: StanceEvent) -> AgoraResult<StanceRecord> {
        let _span = record_stance_span!(event.user_id, event.issue_id).entered();
        self.metrics.record_request(Operation::RecordStance);

        validate_stance_event(&event)?;

        if let RateDecision::Limited { retry_after_secs } = self.rate_limiter.check(&event.user_id)
        {
            self.metrics.record_rate_limited();
            info!(retry_after_secs, "stance write throttled");
            return Err(AgoraError::RateLimited {
                user_id: event.user_id,
                retry_after_secs,
            });
        }

        let record = self.fetched(self.store.append_stance_event(&event))?;
        debug!(sample_count = record.sample_count, "stance recorded");
        Ok(record)
    }

    // --- Cache control ---

    /// Drop cached results for a topic. Entries already go stale on their own
    /// once the topic watermark moves.
    pub fn invalidate_topic(&self, topic_id: &str) {
        if let Some(cache) = &self.cache {
            cache.invalidate_topic(topic_id);
        }
    }

    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    // --- Helpers ---

    fn fetched<T>(&self, result: Result<T, StoreError>) -> AgoraResult<T> {
        result.map_err(|err| {
            self.metrics.record_store_failure();
            warn!(error = %err, "store query failed");
            AgoraError::from(err)
        })
    }

    /// Current topic watermark, or `None` when caching is off.
    fn watermark(&self, topic_id: &str) -> AgoraResult<Option<u64>> {
        if self.cache.is_none() {
            return Ok(None);
        }
        self.fetched(self.store.topic_watermark(topic_id)).map(Some)
    }

    fn cached(&self, key: &CacheKey, watermark: Option<u64>) -> Option<CachedAnalysis> {
        let (cache, watermark) = (self.cache.as_ref()?, watermark?);
        let hit = cache.get(key, watermark);
        if hit.is_some() {
            self.metrics.record_cache_hit();
        } else {
            self.metrics.record_cache_miss();
        }
        hit
    }

    fn remember(&self, key: CacheKey, watermark: Option<u64>, value: CachedAnalysis) {
        if let (Some(cache), Some(watermark)) = (&self.cache, watermark) {
            cache.insert(key, watermark, value);
        }
    }
}
