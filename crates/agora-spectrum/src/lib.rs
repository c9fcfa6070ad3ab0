//! # agora-spectrum
//!
//! Places every post of a topic on a plane: x is the mean axis position of
//! the post's reactors for one attribute, y is the post's average score.

pub mod axis;
pub mod projector;

pub use axis::Axis;
pub use projector::{Projection, SpectrumProjector};
