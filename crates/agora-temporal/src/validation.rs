use agora_core::constants::SCORE_MAX;
use agora_core::errors::{AgoraError, AgoraResult};
use agora_core::StanceEvent;

/// Reject events whose score or confidence fall outside 0..=100.
pub fn validate_stance_event(event: &StanceEvent) -> AgoraResult<()> {
    if event.score > SCORE_MAX {
        return Err(AgoraError::InvalidScore {
            field: "score".to_string(),
            value: i64::from(event.score),
        });
    }
    if let Some(confidence) = event.confidence.filter(|&c| c > SCORE_MAX) {
        return Err(AgoraError::InvalidScore {
            field: "confidence".to_string(),
            value: i64::from(confidence),
        });
    }
    Ok(())
}
