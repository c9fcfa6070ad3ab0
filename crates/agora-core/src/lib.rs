//! # agora-core
//!
//! Foundation crate for the Agora opinion-analytics engine.
//! Defines the attribute registry, models, response records, errors, config,
//! and the collaborator traits. Every other crate in the workspace depends on this.

pub mod attributes;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use attributes::{AttributeKey, AttributeScale, AttributeSnapshot, OrdinalLevel};
pub use config::AgoraConfig;
pub use errors::{AgoraError, AgoraResult};
pub use models::{OpinionRecord, Reaction, Scored, StanceEvent, StanceRecord};
