//! Information content and Lin similarity between topics.
//!
//! Information content is derived from structural frequency:
//! `IC(t) = -ln(freq(t) / Σ freq + ε)`, so rarer topics carry more
//! information. Lin similarity compares two topics through the deepest
//! topic both descend from:
//!
//! `sim(a, b) = 2 · IC(lca) / (IC(a) + IC(b))`

use crate::hierarchy::OntologyGraph;
use crate::metrics::MetricsEngine;
use petgraph::graph::NodeIndex;
use repa_core::config::EngineConfig;

/// Borrowed view pairing a hierarchy with its metrics caches.
pub struct SimilarityEngine<'a> {
    graph: &'a OntologyGraph,
    metrics: &'a mut MetricsEngine,
    config: &'a EngineConfig,
}

impl<'a> SimilarityEngine<'a> {
    pub fn new(
        graph: &'a OntologyGraph,
        metrics: &'a mut MetricsEngine,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            graph,
            metrics,
            config,
        }
    }

    /// Information content of a topic, 0.0 for unknown topics.
    pub fn information_content(&self, topic: &str) -> f64 {
        match self.graph.index_of(topic) {
            Some(idx) => self.information_content_at(idx),
            None => 0.0,
        }
    }

    pub(crate) fn information_content_at(&self, idx: NodeIndex) -> f64 {
        let total = self.metrics.total_frequency();
        if total == 0 {
            return 0.0;
        }
        let p = self.metrics.frequency(idx) as f64 / total as f64;
        -(p + self.config.ic_epsilon).ln()
    }

    /// Deepest topic in the intersection of both ancestor closures
    /// (each closure includes the topic itself).
    pub fn lowest_common_ancestor(&mut self, a: &str, b: &str) -> Option<&'a str> {
        let a = self.graph.index_of(a)?;
        let b = self.graph.index_of(b)?;
        let lca = self.lowest_common_ancestor_at(a, b)?;
        let graph = self.graph;
        Some(graph.topic(lca))
    }

    pub(crate) fn lowest_common_ancestor_at(&mut self, a: NodeIndex, b: NodeIndex) -> Option<NodeIndex> {
        let ancestors_a = self.graph.ancestors(a);
        let ancestors_b = self.graph.ancestors(b);
        let mut common: Vec<NodeIndex> = ancestors_a.intersection(&ancestors_b).copied().collect();
        // First maximal element in node order wins ties.
        common.sort_unstable();

        let mut best: Option<(NodeIndex, usize)> = None;
        for idx in common {
            let depth = self.metrics.depth(self.graph, idx);
            if best.map_or(true, |(_, d)| depth > d) {
                best = Some((idx, depth));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Lin similarity, 1.0 for a topic with itself.
    ///
    /// Registered equivalents score the configured equivalence similarity
    /// without an ancestor search. The ratio is not clamped: an ancestor
    /// rarer than both topics scores above 1.0.
    /// Topics with no common ancestor (or unknown topics) score 0.0.
    pub fn lin_similarity(&mut self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        match (self.graph.index_of(a), self.graph.index_of(b)) {
            (Some(a), Some(b)) => self.lin_similarity_at(a, b),
            _ => 0.0,
        }
    }

    pub(crate) fn lin_similarity_at(&mut self, a: NodeIndex, b: NodeIndex) -> f64 {
        if a == b {
            return 1.0;
        }
        if self.graph.is_equivalent(a, b) {
            return self.config.equivalence_similarity;
        }
        let Some(lca) = self.lowest_common_ancestor_at(a, b) else {
            return 0.0;
        };

        let ic_a = self.information_content_at(a);
        let ic_b = self.information_content_at(b);
        let denominator = ic_a + ic_b;
        if denominator == 0.0 {
            return 0.0;
        }
        2.0 * self.information_content_at(lca) / denominator
    }
}
