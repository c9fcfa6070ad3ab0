//! Consensus, histogram and divergence behavior over realistic inputs.

use agora_consensus::{build_histogram, consensus_score, good_bad_ratio, DivergenceAnalyzer};
use agora_core::AttributeKey;
use test_fixtures::{load_fixture, snapshot, ReactionFactory, TopicScenario};

// ── Consensus ────────────────────────────────────────────────────────────

#[test]
fn two_camps_at_the_edges_score_zero() {
    assert_eq!(consensus_score(&[10, 10, 10, 90, 90, 90]), 0);
}

#[test]
fn narrow_cluster_scores_high() {
    let score = consensus_score(&[48, 50, 52]);
    assert!(score >= 95, "expected ≈100, got {score}");
}

#[test]
fn half_and_half_extremes_score_zero() {
    let mut scores = vec![0u8; 25];
    scores.extend(std::iter::repeat(100).take(25));
    assert_eq!(consensus_score(&scores), 0);
}

// ── Histogram ────────────────────────────────────────────────────────────

#[test]
fn histogram_counts_every_score_once() {
    let scores: Vec<u8> = (0..=100).collect();
    let bins = build_histogram(scores.iter().copied());
    assert_eq!(bins.iter().sum::<usize>(), 101);
    assert_eq!(bins[0], 10);
    assert_eq!(bins[9], 11, "bin 9 holds 90..=100");
}

// ── Divergence ───────────────────────────────────────────────────────────

#[test]
fn gender_split_matches_exact_arithmetic() {
    // male avg 20 (n=10), female avg 80 (n=10): variance of means 900 → 64.
    let scenario: TopicScenario = load_fixture("scenarios/gender_split.json");
    let opinions: Vec<_> = scenario
        .posts
        .iter()
        .flat_map(|p| p.reactions.iter())
        .map(|r| agora_core::OpinionRecord {
            score: r.score,
            attribute_snapshot: r.attribute_snapshot.clone(),
        })
        .collect();

    let breakdown = DivergenceAnalyzer::default().analyze(&opinions);
    let gender = breakdown
        .iter()
        .find(|d| d.attribute_key == AttributeKey::Gender)
        .expect("gender must be emitted");
    assert_eq!(gender.score, 64);
    assert_eq!(gender.label, "Gender");
}

#[test]
fn equal_group_means_score_hundred() {
    let factory = ReactionFactory::new();
    let mut reactions = Vec::new();
    for party in ["green", "labour", "liberal"] {
        let attrs = snapshot(&[(AttributeKey::PoliticalParty, party)]);
        reactions.push(factory.make("p", 30, attrs.clone()));
        reactions.push(factory.make("p", 50, attrs.clone()));
        reactions.push(factory.make("p", 70, attrs));
    }
    let analyzer = DivergenceAnalyzer::default();
    assert_eq!(
        analyzer.score_for(AttributeKey::PoliticalParty, &reactions),
        Some(100)
    );
}

#[test]
fn breakdown_follows_registry_order_and_skips_unstructured_keys() {
    let factory = ReactionFactory::new();
    let mut reactions = Vec::new();
    for (stance, gender, score) in [("left", "male", 80), ("right", "female", 20)] {
        let attrs = snapshot(&[
            (AttributeKey::PoliticalStance, stance),
            (AttributeKey::Gender, gender),
            (AttributeKey::Occupation, "teacher"),
        ]);
        reactions.extend(factory.many("p", 4, score, &attrs));
    }
    let keys: Vec<_> = DivergenceAnalyzer::default()
        .analyze(&reactions)
        .into_iter()
        .map(|d| d.attribute_key)
        .collect();
    assert_eq!(keys, vec![AttributeKey::Gender, AttributeKey::PoliticalStance]);
}

#[test]
fn larger_min_group_size_drops_groups() {
    let factory = ReactionFactory::new();
    let mut reactions = factory.many("p", 4, 10, &snapshot(&[(AttributeKey::Gender, "male")]));
    reactions.extend(factory.many("p", 6, 90, &snapshot(&[(AttributeKey::Gender, "female")])));

    assert!(DivergenceAnalyzer::new(4)
        .score_for(AttributeKey::Gender, &reactions)
        .is_some());
    assert!(DivergenceAnalyzer::new(5)
        .score_for(AttributeKey::Gender, &reactions)
        .is_none());
}

// ── Good/bad ratio ───────────────────────────────────────────────────────

#[test]
fn good_bad_ratio_over_twenty() {
    let mut scores = vec![20u8; 19];
    scores.push(80);
    let ratio = good_bad_ratio(&scores).unwrap();
    assert_eq!(ratio.good, 5);
    assert_eq!(ratio.bad, 95);
}
