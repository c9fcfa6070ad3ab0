//! # agora-temporal
//!
//! Descriptive drift over stance histories. No smoothing and no outlier
//! rejection: drift is simply the last score minus the first.

pub mod drift;
pub mod materialize;
pub mod validation;

pub use drift::StanceDriftTracker;
pub use materialize::next_record;
pub use validation::validate_stance_event;
