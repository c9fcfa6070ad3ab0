//! Error handling for Agora.
//! One error enum per subsystem, `thiserror` only, aggregated into [`AgoraError`].
//!
//! Low-data outcomes (below the sample floor, too few groups, no valid
//! diversity dimensions) are values on the response records, never errors.

pub mod config_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Top-level error for every fallible engine operation.
#[derive(Debug, thiserror::Error)]
pub enum AgoraError {
    #[error("invalid attribute key: {key}")]
    InvalidAttributeKey { key: String },

    #[error("invalid {field}: {value} is outside 0..=100")]
    InvalidScore { field: String, value: i64 },

    #[error("rate limited: user {user_id} may retry in {retry_after_secs}s")]
    RateLimited { user_id: String, retry_after_secs: u64 },

    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AgoraError {
    /// Whether the caller supplied bad input (as opposed to an infrastructure failure).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAttributeKey { .. } | Self::InvalidScore { .. }
        )
    }
}

pub type AgoraResult<T> = Result<T, AgoraError>;
