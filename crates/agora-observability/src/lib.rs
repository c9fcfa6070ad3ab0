//! # agora-observability
//!
//! Tracing initialization, one span per engine operation, and the atomic
//! counters the engine bumps on every request.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{EngineMetrics, MetricsSnapshot, Operation};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
