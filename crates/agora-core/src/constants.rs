/// Agora engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inclusive bounds of every reaction and stance score.
pub const SCORE_MIN: u8 = 0;
pub const SCORE_MAX: u8 = 100;

/// Number of bins in a score histogram. Bin 9 also absorbs a score of 100.
pub const HISTOGRAM_BINS: usize = 10;

/// Width of a single histogram bin.
pub const HISTOGRAM_BIN_WIDTH: u8 = 10;

/// Largest variance two group means pinned at 0 and 100 can reach.
pub const MAX_MEAN_VARIANCE: f64 = 2500.0;

/// Each standard deviation point costs this many consensus points.
pub const CONSENSUS_SIGMA_WEIGHT: f64 = 3.0;

/// Scores at or above this value count as "good" in a good/bad ratio.
pub const GOOD_SCORE_THRESHOLD: u8 = 50;
