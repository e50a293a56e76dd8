//! Composite impact factor for single topics, and ranking.
//!
//! `impact = α·depth_score + β·influence_score + γ·semantic_score`,
//! multiplied by the specific-topic bonus when the topic is in the
//! specific set. The scorer owns the hierarchy and every cache; the
//! graph is built once in [`ImpactScorer::new`] and never mutated.

use crate::hierarchy::OntologyGraph;
use crate::metrics::MetricsEngine;
use crate::similarity::SimilarityEngine;
use petgraph::graph::NodeIndex;
use repa_core::config::EngineConfig;
use repa_core::error::{RepaError, Result};
use repa_core::types::{
    topic_label, CentralityBreakdown, GraphSummary, ImpactRecord, Ranking, Triple,
};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Scores topics of one ontology snapshot.
#[derive(Debug, Clone)]
pub struct ImpactScorer {
    graph: OntologyGraph,
    metrics: MetricsEngine,
    specific_topics: BTreeSet<String>,
    influence_cache: HashMap<NodeIndex, f64>,
    config: EngineConfig,
}

impl ImpactScorer {
    /// Build the hierarchy and eager metrics from a triple snapshot.
    pub fn new<'a>(
        triples: impl IntoIterator<Item = &'a Triple>,
        specific_topics: impl IntoIterator<Item = String>,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        let graph = OntologyGraph::from_triples(triples);
        Self::from_graph(graph, specific_topics, config)
    }

    /// Wrap an already-built hierarchy.
    pub fn from_graph(
        graph: OntologyGraph,
        specific_topics: impl IntoIterator<Item = String>,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        let build = graph.build_summary();
        if build.triples_dropped > 0 {
            debug!(
                dropped = build.triples_dropped,
                "triples with an empty topic were dropped"
            );
        }
        let metrics = MetricsEngine::new(&graph, &config);
        let specific_topics: BTreeSet<String> = specific_topics.into_iter().collect();
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            specific = specific_topics.len(),
            "impact scorer ready"
        );
        Ok(Self {
            graph,
            metrics,
            specific_topics,
            influence_cache: HashMap::new(),
            config,
        })
    }

    pub fn graph(&self) -> &OntologyGraph {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn specific_topics(&self) -> &BTreeSet<String> {
        &self.specific_topics
    }

    pub fn is_specific(&self, topic: &str) -> bool {
        self.specific_topics.contains(topic)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.graph.contains(topic)
    }

    /// Similarity view over this scorer's graph and caches.
    pub fn similarity(&mut self) -> SimilarityEngine<'_> {
        SimilarityEngine::new(&self.graph, &mut self.metrics, &self.config)
    }

    pub fn frequency(&self, topic: &str) -> usize {
        self.graph
            .index_of(topic)
            .map_or(0, |idx| self.metrics.frequency(idx))
    }

    pub fn centrality(&self, topic: &str) -> f64 {
        self.graph
            .index_of(topic)
            .map_or(0.0, |idx| self.metrics.centrality(idx))
    }

    pub fn centrality_breakdown(&self, topic: &str) -> Option<CentralityBreakdown> {
        self.graph
            .index_of(topic)
            .map(|idx| self.metrics.centrality_breakdown(idx))
    }

    /// The `limit` most central topics.
    pub fn top_by_centrality(&self, limit: usize) -> Vec<&str> {
        self.metrics
            .top_by_centrality(limit)
            .into_iter()
            .map(|idx| self.graph.topic(idx))
            .collect()
    }

    /// Depth of a topic; 0 for roots and for unknown topics.
    pub fn depth(&mut self, topic: &str) -> usize {
        match self.graph.index_of(topic) {
            Some(idx) => self.metrics.depth(&self.graph, idx),
            None => 0,
        }
    }

    pub fn max_depth(&mut self) -> usize {
        self.metrics.max_depth(&self.graph)
    }

    pub(crate) fn depth_at(&mut self, idx: NodeIndex) -> usize {
        self.metrics.depth(&self.graph, idx)
    }

    pub(crate) fn max_cached_depth(&self) -> Option<usize> {
        self.metrics.max_cached_depth()
    }

    /// `0.6·centrality + 0.4·ln(1 + connectivity)` with
    /// `connectivity = out + 0.5·in + 0.3·|equivalents| + 0.2·|contributions|`.
    ///
    /// Cached per topic; unknown topics score 0.0 and are not cached.
    pub fn influence(&mut self, topic: &str) -> f64 {
        match self.graph.index_of(topic) {
            Some(idx) => self.influence_at(idx),
            None => 0.0,
        }
    }

    pub(crate) fn influence_at(&mut self, idx: NodeIndex) -> f64 {
        if let Some(&cached) = self.influence_cache.get(&idx) {
            return cached;
        }
        let mix = self.config.influence;
        let connectivity = mix.children * self.graph.out_degree(idx) as f64
            + mix.parents * self.graph.in_degree(idx) as f64
            + mix.equivalents * self.graph.equivalents_count(idx) as f64
            + mix.contributions * self.graph.contributions_count(idx) as f64;
        let influence = mix.centrality_weight * self.metrics.centrality(idx)
            + mix.connectivity_weight * (1.0 + connectivity).ln();
        self.influence_cache.insert(idx, influence);
        influence
    }

    /// Compute influence for every node so later normalizations share
    /// one denominator.
    pub fn warm_influence(&mut self) {
        let nodes: Vec<NodeIndex> = self.graph.nodes().collect();
        for idx in nodes {
            self.influence_at(idx);
        }
    }

    /// Maximum over the influences computed so far.
    pub fn max_cached_influence(&self) -> Option<f64> {
        self.influence_cache
            .values()
            .copied()
            .fold(None, |max, v| Some(max.map_or(v, |m: f64| m.max(v))))
    }

    /// Member specific topics in sorted order, at most `limit`.
    pub(crate) fn specific_members(&self, limit: usize) -> Vec<NodeIndex> {
        self.specific_topics
            .iter()
            .filter_map(|topic| self.graph.index_of(topic))
            .take(limit)
            .collect()
    }

    /// Reference set used when none is supplied: member specific topics
    /// (capped), else the most central topics.
    pub(crate) fn default_references(&self) -> Vec<NodeIndex> {
        let cap = self.config.reference_cap;
        let specific = self.specific_members(cap);
        if !specific.is_empty() {
            return specific;
        }
        debug!("no specific topic in the hierarchy, using most central topics as references");
        self.metrics.top_by_centrality(cap)
    }

    /// Topic names of [`Self::default_references`].
    pub fn default_reference_topics(&self) -> Vec<&str> {
        self.default_references()
            .into_iter()
            .map(|idx| self.graph.topic(idx))
            .collect()
    }

    /// Mean Lin similarity to the member references other than the topic itself.
    pub fn semantic_score(&mut self, topic: &str, references: &[String]) -> f64 {
        let Some(idx) = self.graph.index_of(topic) else {
            return 0.0;
        };
        let references = self.resolve_references(references);
        self.semantic_score_at(idx, &references)
    }

    fn resolve_references(&self, references: &[String]) -> Vec<NodeIndex> {
        if references.is_empty() {
            self.default_references()
        } else {
            references
                .iter()
                .filter_map(|r| self.graph.index_of(r))
                .collect()
        }
    }

    fn semantic_score_at(&mut self, idx: NodeIndex, references: &[NodeIndex]) -> f64 {
        let mut similarity = self.similarity();
        let mut total = 0.0;
        let mut count = 0usize;
        for &reference in references {
            if reference == idx {
                continue;
            }
            total += similarity.lin_similarity_at(idx, reference);
            count += 1;
        }
        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }

    /// Impact factor of one topic against a reference set.
    ///
    /// An empty reference list falls back to [`Self::default_references`].
    /// Fails with `NotAMember` for topics outside the hierarchy.
    pub fn impact_factor(&mut self, topic: &str, references: &[String]) -> Result<ImpactRecord> {
        let idx = self
            .graph
            .index_of(topic)
            .ok_or_else(|| RepaError::not_a_member(topic))?;
        let references = self.resolve_references(references);
        Ok(self.impact_at(idx, &references))
    }

    pub(crate) fn impact_at(&mut self, idx: NodeIndex, references: &[NodeIndex]) -> ImpactRecord {
        let depth = self.depth_at(idx);
        let max_depth = self.max_depth();
        let depth_score = if max_depth > 0 {
            depth as f64 / max_depth as f64
        } else {
            0.0
        };

        let influence = self.influence_at(idx);
        let influence_score = match self.max_cached_influence() {
            Some(max) if max > 0.0 => influence / max,
            _ => 0.0,
        };

        let semantic_score = self.semantic_score_at(idx, references);

        let weights = self.config.impact;
        let mut impact_factor = weights.alpha * depth_score
            + weights.beta * influence_score
            + weights.gamma * semantic_score;

        let topic = self.graph.topic(idx).to_string();
        let is_specific_topic = self.specific_topics.contains(&topic);
        if is_specific_topic {
            impact_factor *= self.config.specific_bonus;
        }

        ImpactRecord {
            topic_label: topic_label(&topic),
            topic_id: topic,
            depth,
            depth_score,
            influence_score,
            semantic_score,
            impact_factor,
            frequency: self.metrics.frequency(idx),
            centrality: self.metrics.centrality(idx),
            is_specific_topic,
            equivalents_count: self.graph.equivalents_count(idx),
            contributions_count: self.graph.contributions_count(idx),
        }
    }

    /// Score candidates against one shared reference set and keep the top `top_k`.
    ///
    /// Candidates default to the member specific topics (`specific_only`)
    /// or to every node, in node order. Unknown candidates are reported
    /// in [`Ranking::skipped`] instead of aborting the batch.
    pub fn rank_topics_by_impact(
        &mut self,
        topic_ids: Option<&[String]>,
        top_k: usize,
        specific_only: bool,
    ) -> Ranking {
        let candidates: Vec<String> = match topic_ids {
            Some(ids) => ids.to_vec(),
            None if specific_only => self
                .graph
                .nodes()
                .map(|idx| self.graph.topic(idx))
                .filter(|topic| self.specific_topics.contains(*topic))
                .map(str::to_string)
                .collect(),
            None => self
                .graph
                .nodes()
                .map(|idx| self.graph.topic(idx).to_string())
                .collect(),
        };

        info!(candidates = candidates.len(), "ranking topics by impact");
        self.warm_influence();
        self.max_depth();
        let references = self.default_references();

        let mut ranking = Ranking::default();
        for (i, topic) in candidates.iter().enumerate() {
            if i % 100 == 0 {
                debug!(progress = i, total = candidates.len(), "ranking progress");
            }
            match self.graph.index_of(topic) {
                Some(idx) => ranking.entries.push(self.impact_at(idx, &references)),
                None => {
                    debug!(topic = topic.as_str(), "skipping topic outside the hierarchy");
                    ranking.skipped.push(topic.clone());
                }
            }
        }

        // Stable sort keeps candidate order among equal scores.
        ranking.entries.sort_by(|a, b| {
            b.impact_factor
                .partial_cmp(&a.impact_factor)
                .unwrap_or(Ordering::Equal)
        });
        ranking.entries.truncate(top_k);
        info!(
            ranked = ranking.entries.len(),
            skipped = ranking.skipped.len(),
            "ranking done"
        );
        ranking
    }

    /// Structural overview of the loaded hierarchy.
    pub fn summary(&mut self) -> GraphSummary {
        GraphSummary {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            equivalence_pairs: self.graph.equivalence_pairs(),
            contribution_links: self.graph.contribution_links(),
            specific_topics: self.specific_topics.len(),
            specific_in_graph: self.specific_members(usize::MAX).len(),
            max_depth: self.max_depth(),
            roots: self.graph.roots().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repa_core::config::ImpactWeights;
    use repa_core::error::TopicError;

    fn chain_scorer(specific: &[&str]) -> ImpactScorer {
        let triples = vec![
            Triple::new("ai", "skos:narrower", "machine learning"),
            Triple::new("machine learning", "skos:narrower", "neural network"),
        ];
        ImpactScorer::new(
            &triples,
            specific.iter().map(|s| s.to_string()),
            EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_topic_is_not_a_member() {
        let mut scorer = chain_scorer(&[]);
        let err = scorer.impact_factor("quantum", &[]).unwrap_err();
        assert_eq!(
            err,
            RepaError::Topic(TopicError::NotAMember("quantum".to_string()))
        );
        assert_eq!(scorer.influence("quantum"), 0.0);
        assert!(scorer.max_cached_influence().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            specific_bonus: 0.5,
            ..EngineConfig::default()
        };
        let result = ImpactScorer::new(&Vec::<Triple>::new(), Vec::<String>::new(), config);
        assert!(result.is_err());
    }

    #[test]
    fn prebuilt_graph_is_validated_too() {
        let graph = OntologyGraph::from_triples(&[
            Triple::new("ai", "skos:narrower", "machine learning"),
            Triple::new("machine learning", "skos:narrower", "neural network"),
        ]);
        let config = EngineConfig {
            impact: ImpactWeights {
                alpha: 1.0,
                beta: 1.0,
                gamma: 1.0,
            },
            ..EngineConfig::default()
        };

        let err = ImpactScorer::from_graph(graph.clone(), Vec::<String>::new(), config).unwrap_err();
        assert!(matches!(err, RepaError::Config(_)));
        assert!(ImpactScorer::from_graph(graph, Vec::<String>::new(), EngineConfig::default()).is_ok());
    }

    #[test]
    fn scorer_keeps_dropped_triple_count() {
        let triples = vec![
            Triple::new("", "skos:narrower", "orphan"),
            Triple::new("ai", "skos:narrower", "planning"),
        ];
        let scorer =
            ImpactScorer::new(&triples, Vec::<String>::new(), EngineConfig::default()).unwrap();
        assert_eq!(scorer.graph().build_summary().triples_dropped, 1);
        assert_eq!(scorer.graph().node_count(), 2);
    }

    #[test]
    fn influence_combines_centrality_and_connectivity() {
        let mut scorer = chain_scorer(&[]);
        let centrality = scorer.centrality("machine learning");
        let expected = 0.6 * centrality + 0.4 * (1.0f64 + 1.0 + 0.5).ln();
        assert!((scorer.influence("machine learning") - expected).abs() < 1e-12);
    }

    #[test]
    fn record_fields_are_filled() {
        let mut scorer = chain_scorer(&["neural network"]);
        let record = scorer
            .impact_factor("neural network", &["ai".to_string()])
            .unwrap();

        assert_eq!(record.topic_id, "neural network");
        assert_eq!(record.topic_label, "Neural Network");
        assert_eq!(record.depth, 2);
        assert_eq!(record.depth_score, 1.0);
        assert_eq!(record.frequency, 1);
        assert!(record.is_specific_topic);
        assert_eq!(record.equivalents_count, 0);
    }

    #[test]
    fn self_reference_is_ignored() {
        let mut scorer = chain_scorer(&[]);
        let record = scorer.impact_factor("ai", &["ai".to_string()]).unwrap();
        assert_eq!(record.semantic_score, 0.0);
    }

    #[test]
    fn empty_references_fall_back_to_central_topics() {
        let mut scorer = chain_scorer(&[]);
        let central = scorer.default_references();
        assert_eq!(central.len(), 3);
        let record = scorer.impact_factor("neural network", &[]).unwrap();
        assert!(record.semantic_score > 0.0);
    }

    #[test]
    fn ranking_reports_skipped_topics() {
        let mut scorer = chain_scorer(&["neural network"]);
        let ids = vec![
            "ai".to_string(),
            "missing".to_string(),
            "neural network".to_string(),
        ];
        let ranking = scorer.rank_topics_by_impact(Some(&ids), 10, false);

        assert_eq!(ranking.skipped, vec!["missing".to_string()]);
        assert_eq!(ranking.entries.len(), 2);
        assert!(ranking.entries[0].impact_factor >= ranking.entries[1].impact_factor);
    }

    #[test]
    fn summary_counts_structure() {
        let mut scorer = chain_scorer(&["neural network", "not in graph"]);
        let summary = scorer.summary();
        assert_eq!(summary.node_count, 3);
        assert_eq!(summary.edge_count, 2);
        assert_eq!(summary.specific_topics, 2);
        assert_eq!(summary.specific_in_graph, 1);
        assert_eq!(summary.max_depth, 2);
        assert_eq!(summary.roots, 1);
    }
}
