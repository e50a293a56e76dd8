//! Group and multi-topic scoring.

use repa_engine::prelude::*;

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

fn scorer(triples: &[Triple], specific: &[&str]) -> ImpactScorer {
    ImpactScorer::new(triples, topics(specific), EngineConfig::default()).unwrap()
}

fn field() -> Vec<Triple> {
    vec![
        Triple::new("computer science", "skos:narrower", "artificial intelligence"),
        Triple::new("computer science", "skos:narrower", "databases"),
        Triple::new("artificial intelligence", "skos:narrower", "machine learning"),
        Triple::new("artificial intelligence", "skos:narrower", "planning"),
        Triple::new("machine learning", "skos:narrower", "neural network"),
        Triple::new("databases", "skos:narrower", "query optimization"),
    ]
}

#[test]
fn disjoint_topics_are_incoherent_and_disjoint() {
    let triples = vec![
        Triple::new("a", "skos:narrower", "a child"),
        Triple::new("b", "skos:narrower", "b child"),
    ];
    let mut scorer = scorer(&triples, &[]);
    let group = GroupImpactScorer::new(&mut scorer);

    assert_eq!(group.semantic_coherence(&topics(&["a", "b"])), 0.0);
    assert_eq!(group.topic_overlap(&topics(&["a", "b"])), 0.0);
}

#[test]
fn isolated_topics_outside_the_hierarchy() {
    let mut scorer = scorer(&field(), &[]);
    let group = GroupImpactScorer::new(&mut scorer);

    assert_eq!(group.semantic_coherence(&topics(&["x", "y"])), 0.0);
    assert_eq!(group.topic_overlap(&topics(&["x", "y"])), 0.0);
    assert_eq!(group.topic_overlap(&topics(&["x", "x"])), 1.0);
}

#[test]
fn overlap_conventions() {
    let mut scorer = scorer(&field(), &[]);
    let group = GroupImpactScorer::new(&mut scorer);

    assert_eq!(group.topic_overlap(&topics(&["machine learning"])), 0.0);
    assert_eq!(
        group.topic_overlap(&topics(&["machine learning", "machine learning"])),
        1.0
    );
    assert_eq!(group.topic_overlap(&[]), 0.0);
}

#[test]
fn singleton_is_fully_coherent() {
    let mut scorer = scorer(&field(), &[]);
    let group = GroupImpactScorer::new(&mut scorer);

    assert_eq!(group.semantic_coherence(&topics(&["planning"])), 1.0);
    assert_eq!(group.semantic_coherence(&[]), 1.0);
}

#[test]
fn empty_multi_topic_impact_is_zero() {
    let mut scorer = scorer(&field(), &[]);
    let mut group = GroupImpactScorer::new(&mut scorer);

    let result = group.multi_topic_impact(&[], None);
    assert_eq!(result, MultiTopicImpact::default());
    assert_eq!(result.final_impact, 0.0);
}

#[test]
fn multi_topic_weights_can_be_overridden() {
    let mut scorer = scorer(&field(), &["neural network"]);
    let mut group = GroupImpactScorer::new(&mut scorer);
    let set = topics(&["neural network", "query optimization"]);

    let coverage_only = MultiTopicWeights {
        individual: 0.0,
        overlap: 0.0,
        coherence: 0.0,
        coverage: 1.0,
    };
    let result = group.multi_topic_impact(&set, Some(coverage_only));

    // neural network, machine learning, ai, cs, query optimization, databases
    assert!((result.coverage - 6.0 / 7.0).abs() < 1e-12);
    assert!((result.final_impact - result.coverage).abs() < 1e-12);
}

#[test]
fn heavy_overlap_penalty_clamps_to_zero() {
    let mut scorer = scorer(&field(), &[]);
    let mut group = GroupImpactScorer::new(&mut scorer);

    let penalty_only = MultiTopicWeights {
        individual: 0.0,
        overlap: 1.0,
        coherence: 0.0,
        coverage: 0.0,
    };
    let result = group.multi_topic_impact(&topics(&["planning", "planning"]), Some(penalty_only));
    assert_eq!(result.overlap, 1.0);
    assert_eq!(result.final_impact, 0.0);
}

#[test]
fn group_impact_of_unknown_topics_fails() {
    let mut scorer = scorer(&field(), &[]);
    let mut group = GroupImpactScorer::new(&mut scorer);

    let err = group.group_impact(&topics(&["x", "y"])).unwrap_err();
    assert_eq!(err, RepaError::Topic(TopicError::EmptyGroup));
    assert!(group.group_impact(&[]).is_err());
}

#[test]
fn group_impact_stays_in_unit_range() {
    let mut scorer = scorer(&field(), &["neural network", "planning"]);
    let mut group = GroupImpactScorer::new(&mut scorer);

    let result = group
        .group_impact(&topics(&["neural network", "planning", "databases"]))
        .unwrap();
    let GroupImpact::Group(record) = &result else {
        panic!("expected a group record");
    };
    assert_eq!(record.group_topics.len(), 3);
    assert!(record.depth_score > 0.0);
    assert!(result.impact_factor() > 0.0);
}
