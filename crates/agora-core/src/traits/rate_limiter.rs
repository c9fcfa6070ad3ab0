/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after_secs: u64 },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Injected write throttle. Each instance owns its own state, so separate
/// engines (and separate tests) never share counters.
pub trait IRateLimiter: Send + Sync {
    /// Count one attempt for `key` and decide whether it may proceed.
    fn check(&self, key: &str) -> RateDecision;

    /// Forget all recorded attempts.
    fn reset(&self);
}
