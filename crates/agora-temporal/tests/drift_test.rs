use agora_core::models::{DriftDirection, StanceSource};
use agora_core::AgoraError;
use agora_temporal::{validate_stance_event, StanceDriftTracker};
use test_fixtures::stance_event;

#[test]
fn single_event_is_stable() {
    let events = vec![stance_event("u1", "i1", 64, 0)];
    let drift = StanceDriftTracker::new().issue_drift("i1", &events).unwrap();
    assert_eq!(drift.drift, 0);
    assert_eq!(drift.direction, DriftDirection::Stable);
    assert_eq!(drift.samples, 1);
}

#[test]
fn rising_scores_are_more_supportive() {
    let events = vec![
        stance_event("u1", "i1", 20, 0),
        stance_event("u1", "i1", 90, 10),
        stance_event("u1", "i1", 55, 20),
    ];
    let drift = StanceDriftTracker::new().issue_drift("i1", &events).unwrap();
    assert_eq!((drift.first_score, drift.last_score), (20, 55));
    assert_eq!(drift.drift, 35);
    assert_eq!(drift.direction, DriftDirection::MoreSupportive);
    assert_eq!(drift.series.len(), 3);
}

#[test]
fn out_of_order_input_is_ordered_by_time() {
    let events = vec![stance_event("u1", "i1", 10, 30), stance_event("u1", "i1", 80, 0)];
    let drift = StanceDriftTracker::new().issue_drift("i1", &events).unwrap();
    assert_eq!(drift.drift, -70);
    assert_eq!(drift.direction, DriftDirection::MoreCritical);
    assert_eq!(drift.series[0].score, 80);
}

#[test]
fn no_smoothing_of_intermediate_spikes() {
    let events = vec![
        stance_event("u1", "i1", 50, 0),
        stance_event("u1", "i1", 0, 1),
        stance_event("u1", "i1", 100, 2),
        stance_event("u1", "i1", 50, 3),
    ];
    let drift = StanceDriftTracker::new().issue_drift("i1", &events).unwrap();
    assert_eq!(drift.drift, 0);
    assert_eq!(drift.direction, DriftDirection::Stable);
}

#[test]
fn empty_history_yields_nothing() {
    assert!(StanceDriftTracker::new().issue_drift("i1", &[]).is_none());
}

#[test]
fn summary_averages_absolute_drift_to_one_decimal() {
    let a = vec![stance_event("u1", "a", 10, 0), stance_event("u1", "a", 20, 1)];
    let b = vec![stance_event("u1", "b", 60, 0), stance_event("u1", "b", 35, 1)];
    let c = vec![stance_event("u1", "c", 40, 0)];
    let empty: Vec<agora_core::StanceEvent> = Vec::new();

    let report = StanceDriftTracker::new().report([
        ("a", a.as_slice()),
        ("b", b.as_slice()),
        ("c", c.as_slice()),
        ("d", empty.as_slice()),
    ]);
    assert_eq!(report.summary.issue_count, 3);
    assert_eq!(report.summary.total_samples, 5);
    // (10 + 25 + 0) / 3 = 11.666…
    assert_eq!(report.summary.average_absolute_drift, 11.7);
    assert_eq!(report.per_issue.len(), 3);
}

#[test]
fn empty_report_has_zero_summary() {
    let report = StanceDriftTracker::new().report(std::iter::empty());
    assert_eq!(report.summary.issue_count, 0);
    assert_eq!(report.summary.average_absolute_drift, 0.0);
}

#[test]
fn validation_rejects_out_of_range_values() {
    let mut event = stance_event("u1", "i1", 101, 0);
    assert!(matches!(
        validate_stance_event(&event),
        Err(AgoraError::InvalidScore { ref field, value: 101 }) if field == "score"
    ));

    event.score = 100;
    event.confidence = Some(150);
    assert!(matches!(
        validate_stance_event(&event),
        Err(AgoraError::InvalidScore { ref field, .. }) if field == "confidence"
    ));

    event.confidence = Some(100);
    event.source_type = StanceSource::Questionnaire;
    assert!(validate_stance_event(&event).is_ok());
}
