use agora_consensus::histogram::bin_index;
use agora_consensus::{build_histogram, consensus_score, DivergenceAnalyzer};
use agora_core::{AttributeKey, AttributeSnapshot, OpinionRecord};
use proptest::prelude::*;

fn opinion_strategy() -> impl Strategy<Value = OpinionRecord> {
    (
        0u8..=100,
        prop::option::of(prop::sample::select(vec!["male", "female", "nonbinary"])),
    )
        .prop_map(|(score, gender)| {
            let attribute_snapshot = match gender {
                Some(g) => AttributeSnapshot::new().with(AttributeKey::Gender, g),
                None => AttributeSnapshot::new(),
            };
            OpinionRecord {
                score,
                attribute_snapshot,
            }
        })
}

proptest! {
    #[test]
    fn consensus_stays_in_range(scores in prop::collection::vec(0u8..=100, 0..200)) {
        prop_assert!(consensus_score(&scores) <= 100);
    }

    #[test]
    fn constant_scores_are_unanimous(score in 0u8..=100, n in 1usize..100) {
        prop_assert_eq!(consensus_score(&vec![score; n]), 100);
    }

    #[test]
    fn histogram_sum_equals_len(scores in prop::collection::vec(0u8..=100, 0..500)) {
        let bins = build_histogram(scores.iter().copied());
        prop_assert_eq!(bins.iter().sum::<usize>(), scores.len());
    }

    #[test]
    fn bin_covers_its_decade(score in 0u8..100) {
        let bin = bin_index(score);
        prop_assert!(usize::from(score) >= bin * 10 && usize::from(score) < bin * 10 + 10);
    }

    #[test]
    fn divergence_in_range_with_two_or_more_groups(
        opinions in prop::collection::vec(opinion_strategy(), 0..120)
    ) {
        let analyzer = DivergenceAnalyzer::default();
        for d in analyzer.analyze(&opinions) {
            prop_assert!(d.score <= 100);
            let mut counts = std::collections::HashMap::new();
            for o in &opinions {
                if let Some(v) = o.attribute_snapshot.get(d.attribute_key) {
                    *counts.entry(v).or_insert(0usize) += 1;
                }
            }
            let qualifying = counts.values().filter(|&&c| c >= 3).count();
            prop_assert!(qualifying >= 2);
        }
    }
}

#[test]
fn extremes_land_in_first_and_last_bins() {
    let bins = build_histogram([0, 100]);
    assert_eq!(bins[0], 1);
    assert_eq!(bins[9], 1);
}
