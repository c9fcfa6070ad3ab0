//! # agora-diversity
//!
//! The echo-chamber index measures how varied the disclosed attributes of the
//! accounts a user follows are. It is a filter-bubble proxy over followee
//! attributes, not a measure of content diversity.

pub mod entropy;
pub mod index;

pub use entropy::{normalized_entropy, shannon_entropy};
pub use index::{DiversityIndexCalculator, DiversityOutcome};
