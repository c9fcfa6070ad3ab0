pub mod rate_limiter;
pub mod store;

pub use rate_limiter::{IRateLimiter, RateDecision};
pub use store::{IReactionStore, ReactionScope};
