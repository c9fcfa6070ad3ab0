//! The attribute registry and the immutable per-reaction snapshot.
//!
//! Every component reads keys, orderings and labels from [`registry`] so the
//! privacy thresholds and label tables cannot drift apart.

pub mod registry;
pub mod snapshot;

pub use registry::{AttributeKey, AttributeScale, AttributeSpec, OrdinalLevel, REGISTRY};
pub use snapshot::AttributeSnapshot;
