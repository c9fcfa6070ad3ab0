//! Configuration for Agora.
//! TOML-based, layered: env > `agora.toml` > compiled defaults.

pub mod agora_config;
pub mod analysis_config;
pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod privacy_config;
pub mod rate_limit_config;

pub use agora_config::AgoraConfig;
pub use analysis_config::AnalysisConfig;
pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use privacy_config::PrivacyConfig;
pub use rate_limit_config::RateLimitConfig;
