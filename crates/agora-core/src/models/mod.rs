//! Input rows consumed from the store and the response records handed to callers.

pub mod echo_chamber;
pub mod opinion;
pub mod post_analysis;
pub mod spectrum;
pub mod stance;
pub mod stance_drift;
pub mod topic_consensus;

pub use echo_chamber::{AttributeCounts, DiversityDimension, EchoChamberIndex, ValueCount};
pub use opinion::{OpinionRecord, Reaction, Scored};
pub use post_analysis::{
    AttributeDistribution, CrossTabCell, CrossTabulation, GoodBadRatio, PostAnalysis, ValueStat,
};
pub use spectrum::{Spectrum, SpectrumPoint};
pub use stance::{StanceEvent, StanceRecord, StanceSource};
pub use stance_drift::{DriftDirection, DriftSummary, IssueDrift, StanceDriftReport, StancePoint};
pub use topic_consensus::{AttributeDivergence, TopicConsensus};
