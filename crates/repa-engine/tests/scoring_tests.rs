//! End-to-end scoring over small hierarchies.

use repa_engine::prelude::*;

fn chain() -> Vec<Triple> {
    vec![
        Triple::new("ai", "skos:narrower", "machine learning"),
        Triple::new("machine learning", "skos:narrower", "neural network"),
    ]
}

fn specific(topics: &[&str]) -> Vec<String> {
    topics.iter().map(|t| t.to_string()).collect()
}

fn field() -> Vec<Triple> {
    vec![
        Triple::new("computer science", "skos:narrower", "artificial intelligence"),
        Triple::new("computer science", "skos:narrower", "databases"),
        Triple::new("artificial intelligence", "skos:narrower", "machine learning"),
        Triple::new("artificial intelligence", "skos:narrower", "planning"),
        Triple::new("machine learning", "skos:narrower", "neural network"),
        Triple::new("machine learning", "skos:narrower", "support vector machine"),
        Triple::new("support vector machine", "cso#relatedEquivalent", "svm"),
        Triple::new("statistics", "cso#contributesTo", "machine learning"),
        Triple::new("databases", "skos:narrower", "query optimization"),
        Triple::new("planning", "cso#contributesTo", "robotics"),
    ]
}

#[test]
fn chain_depths_follow_hierarchy() {
    let mut scorer =
        ImpactScorer::new(&chain(), specific(&["neural network"]), EngineConfig::default())
            .unwrap();

    assert_eq!(scorer.depth("ai"), 0);
    assert_eq!(scorer.depth("machine learning"), 1);
    assert_eq!(scorer.depth("neural network"), 2);
    assert_eq!(scorer.max_depth(), 2);
}

#[test]
fn specific_bonus_raises_impact() {
    let references = specific(&["ai"]);

    let mut with_bonus =
        ImpactScorer::new(&chain(), specific(&["neural network"]), EngineConfig::default())
            .unwrap();
    let boosted = with_bonus
        .impact_factor("neural network", &references)
        .unwrap();

    let plain_config = EngineConfig {
        specific_bonus: 1.0,
        ..EngineConfig::default()
    };
    let mut without_bonus =
        ImpactScorer::new(&chain(), specific(&["neural network"]), plain_config).unwrap();
    let plain = without_bonus
        .impact_factor("neural network", &references)
        .unwrap();

    assert!(boosted.is_specific_topic);
    assert!(plain.impact_factor > 0.0);
    assert!(boosted.impact_factor > plain.impact_factor);
    assert!((boosted.impact_factor - plain.impact_factor * 1.1).abs() < 1e-12);
}

#[test]
fn unknown_topic_is_reported_not_raised() {
    let mut scorer = ImpactScorer::new(&chain(), specific(&[]), EngineConfig::default()).unwrap();
    let err = scorer.impact_factor("quantum computing", &[]).unwrap_err();
    assert!(err.is_not_a_member());
    assert_eq!(err.to_string(), "Topic error: Topic quantum computing not found");
}

#[test]
fn depth_terminates_on_three_cycle() {
    let triples = vec![
        Triple::new("a", "skos:narrower", "b"),
        Triple::new("b", "skos:narrower", "c"),
        Triple::new("c", "skos:narrower", "a"),
    ];
    let mut scorer = ImpactScorer::new(&triples, specific(&[]), EngineConfig::default()).unwrap();

    for topic in ["a", "b", "c"] {
        assert!(scorer.depth(topic) <= 3);
    }
    let record = scorer.impact_factor("a", &[]).unwrap();
    assert!(record.impact_factor.is_finite());
}

#[test]
fn lin_similarity_identity_symmetry_and_equivalence() {
    let mut scorer = ImpactScorer::new(&field(), specific(&[]), EngineConfig::default()).unwrap();
    let topics: Vec<String> = scorer
        .graph()
        .nodes()
        .map(|idx| scorer.graph().topic(idx).to_string())
        .collect();

    let mut similarity = scorer.similarity();
    for a in &topics {
        assert_eq!(similarity.lin_similarity(a, a), 1.0);
        for b in &topics {
            let ab = similarity.lin_similarity(a, b);
            let ba = similarity.lin_similarity(b, a);
            assert_eq!(ab, ba, "similarity of {a} and {b} is not symmetric");
            assert!(ab >= 0.0);
        }
    }

    assert_eq!(similarity.lin_similarity("support vector machine", "svm"), 0.9);
    assert_eq!(similarity.lin_similarity("svm", "support vector machine"), 0.9);
}

#[test]
fn scores_are_normalized_once_maxima_are_known() {
    let mut scorer =
        ImpactScorer::new(&field(), specific(&["neural network", "planning"]), EngineConfig::default())
            .unwrap();
    let ranking = scorer.rank_topics_by_impact(None, usize::MAX, false);

    assert_eq!(ranking.entries.len(), scorer.graph().node_count());
    assert!(ranking.skipped.is_empty());
    for record in &ranking.entries {
        assert!((0.0..=1.0).contains(&record.depth_score), "{}", record.topic_id);
        assert!((0.0..=1.0).contains(&record.influence_score), "{}", record.topic_id);
        assert!(record.semantic_score >= 0.0, "{}", record.topic_id);
    }
}

#[test]
fn ranking_is_deterministic_and_sorted() {
    let config = EngineConfig::default();
    let run = || {
        let mut scorer =
            ImpactScorer::new(&field(), specific(&["neural network", "planning", "svm"]), config.clone())
                .unwrap();
        scorer.rank_topics_by_impact(None, 5, false)
    };

    let first = run();
    let second = run();
    assert_eq!(first.entries, second.entries);
    assert_eq!(first.entries.len(), 5);
    for pair in first.entries.windows(2) {
        assert!(pair[0].impact_factor >= pair[1].impact_factor);
    }
}

#[test]
fn specific_only_ranking_uses_member_specific_topics() {
    let mut scorer = ImpactScorer::new(
        &field(),
        specific(&["neural network", "planning", "not in the ontology"]),
        EngineConfig::default(),
    )
    .unwrap();
    let ranking = scorer.rank_topics_by_impact(None, 10, true);

    let mut ranked: Vec<&str> = ranking.entries.iter().map(|r| r.topic_id.as_str()).collect();
    ranked.sort_unstable();
    assert_eq!(ranked, vec!["neural network", "planning"]);
    assert!(ranking.entries.iter().all(|r| r.is_specific_topic));
}

#[test]
fn side_relations_feed_record_counts() {
    let mut scorer = ImpactScorer::new(&field(), specific(&[]), EngineConfig::default()).unwrap();

    let svm = scorer.impact_factor("svm", &[]).unwrap();
    assert_eq!(svm.equivalents_count, 1);
    assert_eq!(svm.topic_label, "Svm");

    let statistics = scorer.impact_factor("statistics", &[]).unwrap();
    assert_eq!(statistics.contributions_count, 1);
    assert_eq!(statistics.depth, 0);

    let summary = scorer.summary();
    assert_eq!(summary.equivalence_pairs, 1);
    assert_eq!(summary.contribution_links, 2);
}

#[test]
fn loaded_snapshot_scores_like_in_memory_triples() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ontology.tsv");
    std::fs::write(
        &path,
        "ai\tskos:narrower\tmachine learning\nmachine learning\tskos:narrower\tneural network\n",
    )
    .unwrap();

    let triples = read_triples(&path).unwrap();
    assert_eq!(triples, chain());

    let mut scorer = ImpactScorer::new(&triples, specific(&["neural network"]), EngineConfig::default())
        .unwrap();
    let ranking = scorer.rank_topics_by_impact(None, 1, true);
    let csv = records_to_csv(&ranking.entries);
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().starts_with("neural network,Neural Network,2,"));
}
