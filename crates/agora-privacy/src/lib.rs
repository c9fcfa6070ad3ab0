//! # agora-privacy
//!
//! Disclosure control for everything keyed by a reactor attribute.
//! [`PrivacyGate`] holds the two floors; [`distribution`] and [`cross_tab`]
//! build aggregates that have already passed the cell floor.
//!
//! Suppressed cells are removed, never zeroed or flagged, so a missing value
//! reads exactly like a value nobody disclosed.

pub mod cross_tab;
pub mod distribution;
pub mod gate;

pub use cross_tab::cross_tabulate;
pub use distribution::{attribute_counts, attribute_distribution};
pub use gate::{PrivacyGate, SampleCheck};
