use agora_core::models::*;
use agora_core::{AttributeKey, AttributeSnapshot};
use chrono::{TimeZone, Utc};

#[test]
fn unavailable_post_analysis_omits_derived_fields() {
    let json = serde_json::to_value(PostAnalysis::unavailable(19, 1)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "available": false,
            "totalReactions": 19,
            "remainingForAnalysis": 1,
        })
    );
}

#[test]
fn reaction_deserializes_from_camel_case_row() {
    let reaction: Reaction = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "postId": "p1",
        "userId": "u1",
        "score": 70,
        "attributeSnapshot": { "gender": "female", "political_stance": null },
        "createdAt": "2026-03-01T12:00:00Z",
    }))
    .unwrap();
    assert_eq!(reaction.score(), 70);
    assert_eq!(reaction.attributes().get(AttributeKey::Gender), Some("female"));
    assert_eq!(reaction.attributes().get(AttributeKey::PoliticalStance), None);
}

#[test]
fn drift_direction_serializes_snake_case() {
    let json = serde_json::to_string(&DriftDirection::MoreSupportive).unwrap();
    assert_eq!(json, "\"more_supportive\"");
    assert_eq!(DriftDirection::from_drift(-3), DriftDirection::MoreCritical);
    assert_eq!(DriftDirection::from_drift(0), DriftDirection::Stable);
}

#[test]
fn opinion_record_keeps_reaction_snapshot() {
    let snapshot = AttributeSnapshot::new().with(AttributeKey::Education, "master");
    let reaction = Reaction {
        id: "r1".to_string(),
        post_id: "p1".to_string(),
        user_id: "u1".to_string(),
        score: 12,
        attribute_snapshot: snapshot.clone(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    };
    let record = OpinionRecord::from(reaction);
    assert_eq!(record.score, 12);
    assert_eq!(record.attribute_snapshot, snapshot);
}
