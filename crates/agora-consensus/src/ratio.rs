use agora_core::constants::GOOD_SCORE_THRESHOLD;
use agora_core::models::GoodBadRatio;

/// Split scores at [`GOOD_SCORE_THRESHOLD`] into integer percentages.
/// `None` for empty input.
pub fn good_bad_ratio(scores: &[u8]) -> Option<GoodBadRatio> {
    if scores.is_empty() {
        return None;
    }
    let good_count = scores.iter().filter(|&&s| s >= GOOD_SCORE_THRESHOLD).count();
    let good = (good_count as f64 * 100.0 / scores.len() as f64).round() as u32;
    Some(GoodBadRatio {
        good,
        bad: 100 - good,
    })
}
