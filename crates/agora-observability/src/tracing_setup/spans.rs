//! Span definitions per engine operation.
//!
//! Ids are recorded as display fields; attribute payloads never are.

/// Create a post-analysis span.
#[macro_export]
macro_rules! post_analysis_span {
    ($post_id:expr) => {
        tracing::info_span!("agora.post_analysis", post_id = %$post_id)
    };
}

/// Create a topic-consensus span.
#[macro_export]
macro_rules! topic_consensus_span {
    ($topic_id:expr) => {
        tracing::info_span!("agora.topic_consensus", topic_id = %$topic_id)
    };
}

/// Create an issue-consensus span.
#[macro_export]
macro_rules! issue_consensus_span {
    ($issue_id:expr) => {
        tracing::info_span!("agora.issue_consensus", issue_id = %$issue_id)
    };
}

/// Create an echo-chamber span.
#[macro_export]
macro_rules! echo_chamber_span {
    ($user_id:expr) => {
        tracing::info_span!("agora.echo_chamber", user_id = %$user_id)
    };
}

/// Create a spectrum span.
#[macro_export]
macro_rules! spectrum_span {
    ($topic_id:expr, $attribute_key:expr) => {
        tracing::info_span!(
            "agora.spectrum",
            topic_id = %$topic_id,
            attribute_key = %$attribute_key
        )
    };
}

/// Create a stance-drift span.
#[macro_export]
macro_rules! stance_drift_span {
    ($user_id:expr) => {
        tracing::info_span!("agora.stance_drift", user_id = %$user_id)
    };
}

/// Create a record-stance span.
#[macro_export]
macro_rules! record_stance_span {
    ($user_id:expr, $issue_id:expr) => {
        tracing::info_span!("agora.record_stance", user_id = %$user_id, issue_id = %$issue_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const POST_ANALYSIS: &str = "agora.post_analysis";
    pub const TOPIC_CONSENSUS: &str = "agora.topic_consensus";
    pub const ISSUE_CONSENSUS: &str = "agora.issue_consensus";
    pub const ECHO_CHAMBER: &str = "agora.echo_chamber";
    pub const SPECTRUM: &str = "agora.spectrum";
    pub const STANCE_DRIFT: &str = "agora.stance_drift";
    pub const RECORD_STANCE: &str = "agora.record_stance";
}
