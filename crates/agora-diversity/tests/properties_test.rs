use agora_core::{AttributeKey, AttributeSnapshot};
use agora_diversity::DiversityIndexCalculator;
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_in_range(values in prop::collection::vec(prop::option::of(0usize..6), 0..80)) {
        let followees: Vec<AttributeSnapshot> = values
            .iter()
            .map(|v| match v {
                Some(i) => {
                    AttributeSnapshot::new().with(AttributeKey::Occupation, format!("job-{i}"))
                }
                None => AttributeSnapshot::new(),
            })
            .collect();
        let outcome = DiversityIndexCalculator::default().compute(&followees);
        if let Some(score) = outcome.score {
            prop_assert!(score <= 100);
        }
        prop_assert_eq!(outcome.score.is_some(), !outcome.dimensions.is_empty());
    }

    #[test]
    fn uniform_k_categories_score_hundred(k in 2usize..8, per in 3usize..6) {
        let mut followees = Vec::new();
        for i in 0..k {
            for _ in 0..per {
                let followee = AttributeSnapshot::new().with(AttributeKey::Gender, format!("g{i}"));
                followees.push(followee);
            }
        }
        prop_assert_eq!(DiversityIndexCalculator::default().compute(&followees).score, Some(100));
    }
}
