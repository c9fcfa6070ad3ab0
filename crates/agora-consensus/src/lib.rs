//! # agora-consensus
//!
//! Pure scoring functions over 0-100 reaction scores:
//! - [`histogram`]: fixed 10-bin histogram
//! - [`consensus`]: one 0-100 agreement figure from the spread of scores
//! - [`divergence`]: per-attribute agreement between value-groups
//! - [`ratio`]: good/bad split
//!
//! Nothing here touches storage or holds state.

pub mod consensus;
pub mod divergence;
pub mod histogram;
pub mod ratio;
pub mod stats;

pub use consensus::consensus_score;
pub use divergence::DivergenceAnalyzer;
pub use histogram::build_histogram;
pub use ratio::good_bad_ratio;
