use agora_core::models::SpectrumPoint;
use agora_core::traits::{IReactionStore, ReactionScope};
use agora_core::{AttributeKey, Reaction};
use agora_spectrum::SpectrumProjector;
use test_fixtures::{load_fixture, snapshot, ReactionFactory, TopicScenario};

fn spectrum_reactions() -> Vec<Reaction> {
    let scenario: TopicScenario = load_fixture("scenarios/stance_spectrum.json");
    let topic_id = scenario.topic_id.clone();
    let store = scenario.into_store();
    store.fetch_reactions(ReactionScope::Topic(&topic_id)).unwrap()
}

fn point<'a>(points: &'a [SpectrumPoint], post: &str) -> Option<&'a SpectrumPoint> {
    points.iter().find(|p| p.post_id == post)
}

#[test]
fn ordinal_axis_places_posts_on_fixed_scale() {
    let projection = SpectrumProjector::new()
        .project(AttributeKey::PoliticalStance, &spectrum_reactions());

    assert_eq!(
        projection.axis_labels,
        vec!["Left", "Center-left", "Center", "Center-right", "Right"]
    );

    let a = point(&projection.points, "post-a").unwrap();
    assert_eq!((a.x, a.y, a.reactor_count), (0.0, 90, 6));
    let b = point(&projection.points, "post-b").unwrap();
    assert_eq!((b.x, b.y), (4.0, 20));
    let c = point(&projection.points, "post-c").unwrap();
    assert_eq!((c.x, c.y), (2.0, 52));
}

#[test]
fn post_without_attribute_carrying_reactors_is_absent() {
    let projection = SpectrumProjector::new()
        .project(AttributeKey::PoliticalStance, &spectrum_reactions());
    assert_eq!(projection.points.len(), 3);
    assert!(point(&projection.points, "post-d").is_none());
}

#[test]
fn nominal_axis_indexes_sorted_distinct_values() {
    let projection = SpectrumProjector::new()
        .project(AttributeKey::PoliticalParty, &spectrum_reactions());
    assert_eq!(projection.axis_labels, vec!["centrist", "green", "liberal"]);
    assert_eq!(point(&projection.points, "post-a").unwrap().x, 1.0);
    assert_eq!(point(&projection.points, "post-b").unwrap().x, 2.0);
    assert_eq!(point(&projection.points, "post-c").unwrap().x, 0.0);
}

#[test]
fn x_is_rounded_to_two_decimals() {
    let factory = ReactionFactory::new();
    let reactions = vec![
        factory.make("p", 10, snapshot(&[(AttributeKey::PoliticalStance, "left")])),
        factory.make("p", 20, snapshot(&[(AttributeKey::PoliticalStance, "left")])),
        factory.make("p", 30, snapshot(&[(AttributeKey::PoliticalStance, "center_left")])),
    ];
    let projection = SpectrumProjector::new().project(AttributeKey::PoliticalStance, &reactions);
    assert_eq!(projection.points[0].x, 0.33);
    assert_eq!(projection.points[0].y, 20);
}

#[test]
fn y_uses_every_reaction_on_the_post() {
    let factory = ReactionFactory::new();
    let reactions = vec![
        factory.make("p", 100, snapshot(&[(AttributeKey::PoliticalStance, "right")])),
        factory.make("p", 0, snapshot(&[])),
    ];
    let projection = SpectrumProjector::new().project(AttributeKey::PoliticalStance, &reactions);
    assert_eq!(projection.points[0].y, 50);
    assert_eq!(projection.points[0].reactor_count, 1);
}

#[test]
fn unknown_ordinal_values_are_skipped() {
    let factory = ReactionFactory::new();
    let reactions = vec![factory.make("p", 70, snapshot(&[(AttributeKey::AgeRange, "ancient")]))];
    let projection = SpectrumProjector::new().project(AttributeKey::AgeRange, &reactions);
    assert!(projection.points.is_empty());
    assert_eq!(projection.axis_labels.len(), 7);
}

#[test]
fn rare_nominal_values_stay_off_the_axis() {
    let factory = ReactionFactory::new();
    let nurse = snapshot(&[(AttributeKey::Occupation, "nurse")]);
    let mut reactions = factory.many("p1", 5, 40, &nurse);
    reactions.push(factory.make("p2", 90, snapshot(&[(AttributeKey::Occupation, "astronaut")])));

    let projection = SpectrumProjector::new()
        .with_min_value_support(5)
        .project(AttributeKey::Occupation, &reactions);
    assert_eq!(projection.axis_labels, vec!["nurse"]);
    assert_eq!(projection.points.len(), 1);
    assert_eq!(projection.points[0].post_id, "p1");
}

#[test]
fn empty_topic_has_axis_but_no_points() {
    let projection = SpectrumProjector::new().project(AttributeKey::Gender, &[]);
    assert!(projection.points.is_empty());
    assert!(projection.axis_labels.is_empty());
}
