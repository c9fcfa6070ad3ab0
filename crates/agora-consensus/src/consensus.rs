use agora_core::constants::CONSENSUS_SIGMA_WEIGHT;

use crate::stats::population_std_dev;

/// Agreement among `scores` on a 0-100 scale.
///
/// `round(max(0, 100 - 3σ))` with σ the population standard deviation. Identical
/// scores give 100; a spread of σ ≈ 33.3 already gives 0. Empty input gives 0.
pub fn consensus_score(scores: &[u8]) -> u32 {
    let values: Vec<f64> = scores.iter().map(|&s| f64::from(s)).collect();
    match population_std_dev(&values) {
        Some(sigma) => (100.0 - CONSENSUS_SIGMA_WEIGHT * sigma).max(0.0).round() as u32,
        None => 0,
    }
}
