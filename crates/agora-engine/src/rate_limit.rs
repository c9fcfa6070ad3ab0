//! Stance-write throttles.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use agora_core::config::RateLimitConfig;
use agora_core::traits::{IRateLimiter, RateDecision};
use dashmap::DashMap;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// At most `max_events` attempts per key in each fixed window.
///
/// Counters live in this instance only; two limiters never share state.
/// Expired windows are swept at most once per window length, so idle keys
/// do not accumulate.
#[derive(Debug)]
pub struct FixedWindowRateLimiter {
    max_events: u32,
    window: Duration,
    windows: DashMap<String, Window>,
    last_sweep: Mutex<Instant>,
}

impl FixedWindowRateLimiter {
    pub fn new(max_events: u32, window: Duration) -> Self {
        Self {
            max_events: max_events.max(1),
            window,
            windows: DashMap::new(),
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_events, Duration::from_secs(config.window_secs))
    }

    /// [`IRateLimiter::check`] against an explicit clock reading.
    pub fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        self.sweep_expired(now);

        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        let window = entry.value_mut();

        let elapsed = now.saturating_duration_since(window.started);
        if elapsed >= self.window {
            window.started = now;
            window.count = 0;
        }

        if window.count < self.max_events {
            window.count += 1;
            return RateDecision::Allowed;
        }

        let remaining = self.window.saturating_sub(elapsed);
        let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        RateDecision::Limited {
            retry_after_secs: secs.max(1),
        }
    }

    /// Drop every window that has run out. Must not be called while an
    /// entry guard on `windows` is held.
    fn sweep_expired(&self, now: Instant) {
        {
            let mut last = self.last_sweep.lock().unwrap_or_else(PoisonError::into_inner);
            if now.saturating_duration_since(*last) < self.window {
                return;
            }
            *last = now;
        }
        let window = self.window;
        self.windows.retain(|_, w| now.saturating_duration_since(w.started) < window);
    }

    /// Number of keys currently holding a window.
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}

impl IRateLimiter for FixedWindowRateLimiter {
    fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    fn reset(&self) {
        self.windows.clear();
    }
}

/// Never throttles. For hosts that rate-limit upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlimitedRateLimiter;

impl IRateLimiter for UnlimitedRateLimiter {
    fn check(&self, _key: &str) -> RateDecision {
        RateDecision::Allowed
    }

    fn reset(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_within_window_then_reopens() {
        let limiter = FixedWindowRateLimiter::new(2, Duration::from_secs(60));
        let t0 = Instant::now();
        assert!(limiter.check_at("u1", t0).is_allowed());
        assert!(limiter.check_at("u1", t0 + Duration::from_secs(1)).is_allowed());
        assert_eq!(
            limiter.check_at("u1", t0 + Duration::from_secs(10)),
            RateDecision::Limited {
                retry_after_secs: 50
            }
        );
        assert!(limiter.check_at("u1", t0 + Duration::from_secs(60)).is_allowed());
    }

    #[test]
    fn keys_are_independent() {
        let limiter = FixedWindowRateLimiter::new(1, Duration::from_secs(60));
        let t0 = Instant::now();
        assert!(limiter.check_at("u1", t0).is_allowed());
        assert!(!limiter.check_at("u1", t0).is_allowed());
        assert!(limiter.check_at("u2", t0).is_allowed());
        assert_eq!(limiter.tracked_keys(), 2);
    }

    #[test]
    fn retry_hint_rounds_up_to_a_whole_second() {
        let limiter = FixedWindowRateLimiter::new(1, Duration::from_secs(60));
        let t0 = Instant::now();
        limiter.check_at("u1", t0);
        assert_eq!(
            limiter.check_at("u1", t0 + Duration::from_millis(59_500)),
            RateDecision::Limited {
                retry_after_secs: 1
            }
        );
    }

    #[test]
    fn expired_windows_are_evicted() {
        let limiter = FixedWindowRateLimiter::new(1, Duration::from_secs(60));
        let t0 = Instant::now();
        for n in 0..10_000 {
            limiter.check_at(&format!("u{n}"), t0);
        }
        assert_eq!(limiter.tracked_keys(), 10_000);

        assert!(limiter.check_at("late", t0 + Duration::from_secs(3600)).is_allowed());
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn live_windows_survive_a_sweep() {
        let limiter = FixedWindowRateLimiter::new(1, Duration::from_secs(60));
        let t0 = Instant::now();
        limiter.check_at("old", t0);
        limiter.check_at("recent", t0 + Duration::from_secs(50));

        let t1 = t0 + Duration::from_secs(70);
        limiter.check_at("new", t1);
        assert_eq!(limiter.tracked_keys(), 2);
        assert!(!limiter.check_at("recent", t1).is_allowed());
    }

    #[test]
    fn reset_clears_state() {
        let limiter = FixedWindowRateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.check("u1").is_allowed());
        assert!(!limiter.check("u1").is_allowed());
        limiter.reset();
        assert!(limiter.check("u1").is_allowed());
    }
}
