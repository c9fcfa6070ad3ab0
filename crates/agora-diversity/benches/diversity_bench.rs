use agora_core::AttributeKey;
use agora_diversity::DiversityIndexCalculator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::snapshot;

fn bench_index(c: &mut Criterion) {
    let genders = ["male", "female", "nonbinary"];
    let ages = ["20s", "30s", "40s", "50s", "60s"];
    let parties = ["green", "liberal", "labour", "centrist", "conservative", "independent"];
    let followees: Vec<_> = (0..5_000)
        .map(|i| {
            snapshot(&[
                (AttributeKey::Gender, genders[i % genders.len()]),
                (AttributeKey::AgeRange, ages[i % ages.len()]),
                (AttributeKey::PoliticalParty, parties[i % parties.len()]),
            ])
        })
        .collect();

    let calculator = DiversityIndexCalculator::default();
    c.bench_function("echo_chamber_5k_followees", |b| {
        b.iter(|| calculator.compute(black_box(&followees)))
    });
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
