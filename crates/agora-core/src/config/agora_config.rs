//! Top-level Agora configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, AnalysisConfig, CacheConfig, ObservabilityConfig, PrivacyConfig, RateLimitConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`AGORA_*`)
/// 2. Project config (`agora.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AgoraConfig {
    pub privacy: PrivacyConfig,
    pub analysis: AnalysisConfig,
    pub cache: CacheConfig,
    pub rate_limit: RateLimitConfig,
    pub observability: ObservabilityConfig,
}

impl AgoraConfig {
    /// Load configuration from `root/agora.toml` (if present) and the environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string. No environment overrides are applied.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.privacy.cell_floor == 0 {
            return Err(invalid("privacy.cell_floor", "must be at least 1"));
        }
        if self.privacy.sample_floor < self.privacy.cell_floor {
            return Err(invalid(
                "privacy.sample_floor",
                "must not be smaller than privacy.cell_floor",
            ));
        }
        if self.analysis.min_group_size == 0 {
            return Err(invalid("analysis.min_group_size", "must be at least 1"));
        }
        if self.analysis.min_dimension_samples == 0 {
            return Err(invalid("analysis.min_dimension_samples", "must be at least 1"));
        }
        if let Some((row, _)) = self
            .analysis
            .cross_tab_pairs
            .iter()
            .find(|(row, column)| row == column)
        {
            return Err(invalid(
                "analysis.cross_tab_pairs",
                &format!("cannot cross {row} with itself"),
            ));
        }
        if self.cache.enabled && self.cache.ttl_secs == 0 {
            return Err(invalid("cache.ttl_secs", "must be greater than 0"));
        }
        if self.rate_limit.max_events == 0 {
            return Err(invalid("rate_limit.max_events", "must be greater than 0"));
        }
        if self.rate_limit.window_secs == 0 {
            return Err(invalid("rate_limit.window_secs", "must be greater than 0"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `AGORA_PRIVACY_SAMPLE_FLOOR`, `AGORA_CACHE_TTL_SECS`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse("AGORA_PRIVACY_SAMPLE_FLOOR") {
            self.privacy.sample_floor = v;
        }
        if let Some(v) = env_parse("AGORA_PRIVACY_CELL_FLOOR") {
            self.privacy.cell_floor = v;
        }
        if let Some(v) = env_parse("AGORA_CACHE_ENABLED") {
            self.cache.enabled = v;
        }
        if let Some(v) = env_parse("AGORA_CACHE_TTL_SECS") {
            self.cache.ttl_secs = v;
        }
        if let Some(v) = env_parse("AGORA_RATE_LIMIT_MAX_EVENTS") {
            self.rate_limit.max_events = v;
        }
        if let Some(v) = env_parse("AGORA_RATE_LIMIT_WINDOW_SECS") {
            self.rate_limit.window_secs = v;
        }
        if let Ok(level) = std::env::var("AGORA_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
