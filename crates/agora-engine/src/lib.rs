//! # agora-engine
//!
//! [`AnalyticsEngine`] is the only component that talks to the store. Each
//! operation pulls raw rows, runs them past the privacy gate, and composes the
//! pure analytics crates into a response record.

pub mod cache;
pub mod engine;
pub mod rate_limit;

pub use cache::{AnalysisCache, CacheKey, CachedAnalysis};
pub use engine::AnalyticsEngine;
pub use rate_limit::{FixedWindowRateLimiter, UnlimitedRateLimiter};
