//! Per-topic structural metrics: frequency, centrality and depth.
//!
//! Frequency and centrality are computed for every node when the engine
//! is built. Depth is memoized on first request. The hierarchy never
//! changes after construction, so cached values are never invalidated.

use crate::centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, BetweennessMode,
    CentralityOutcome,
};
use crate::hierarchy::OntologyGraph;
use petgraph::graph::NodeIndex;
use repa_core::config::EngineConfig;
use repa_core::types::CentralityBreakdown;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Cached structural metrics for one hierarchy.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    frequency: Vec<usize>,
    total_frequency: usize,
    centrality: Vec<CentralityBreakdown>,
    depth_cache: HashMap<NodeIndex, usize>,
    max_depth: Option<usize>,
}

/// A pending node in the iterative depth walk.
struct DepthFrame {
    node: NodeIndex,
    parents: Vec<NodeIndex>,
    next: usize,
    best: usize,
}

enum DepthStep {
    Ready(usize),
    Pending(DepthFrame),
}

impl MetricsEngine {
    pub fn new(graph: &OntologyGraph, config: &EngineConfig) -> Self {
        let frequency: Vec<usize> = graph
            .nodes()
            .map(|idx| {
                let f = graph.in_degree(idx) + graph.out_degree(idx) + graph.equivalents_count(idx);
                f.max(1)
            })
            .collect();
        let total_frequency = frequency.iter().sum();
        let centrality = compute_centrality(graph, config);

        Self {
            frequency,
            total_frequency,
            centrality,
            depth_cache: HashMap::new(),
            max_depth: None,
        }
    }

    /// `max(1, in + out + |equivalents|)`.
    pub fn frequency(&self, idx: NodeIndex) -> usize {
        self.frequency.get(idx.index()).copied().unwrap_or(0)
    }

    pub fn total_frequency(&self) -> usize {
        self.total_frequency
    }

    /// Combined centrality in [0, 1].
    pub fn centrality(&self, idx: NodeIndex) -> f64 {
        self.centrality.get(idx.index()).map_or(0.0, |c| c.combined)
    }

    pub fn centrality_breakdown(&self, idx: NodeIndex) -> CentralityBreakdown {
        self.centrality.get(idx.index()).copied().unwrap_or_default()
    }

    /// The `limit` most central nodes, ties kept in node order.
    pub fn top_by_centrality(&self, limit: usize) -> Vec<NodeIndex> {
        let mut ranked: Vec<(usize, f64)> = self
            .centrality
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.combined))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
            .into_iter()
            .take(limit)
            .map(|(i, _)| NodeIndex::new(i))
            .collect()
    }

    /// Longest ancestor chain above `idx`.
    ///
    /// Walks parents with an explicit stack. The frames on the stack are
    /// exactly the current path, so `on_path` gains a node on push and
    /// loses it on pop. A shared ancestor is explored from every path
    /// while a node already on the current path counts as 0 for that
    /// branch. Terminates on any cycle.
    pub fn depth(&mut self, graph: &OntologyGraph, idx: NodeIndex) -> usize {
        let mut on_path: HashSet<NodeIndex> = HashSet::new();
        let mut stack = match self.enter(graph, idx, &mut on_path) {
            DepthStep::Ready(depth) => return depth,
            DepthStep::Pending(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            if frame.next < frame.parents.len() {
                let parent = frame.parents[frame.next];
                frame.next += 1;
                match self.enter(graph, parent, &mut on_path) {
                    DepthStep::Ready(depth) => {
                        if let Some(frame) = stack.last_mut() {
                            frame.best = frame.best.max(depth + 1);
                        }
                    }
                    DepthStep::Pending(child) => stack.push(child),
                }
                continue;
            }

            let done = match stack.pop() {
                Some(done) => done,
                None => break,
            };
            on_path.remove(&done.node);
            self.depth_cache.insert(done.node, done.best);
            match stack.last_mut() {
                Some(parent_frame) => parent_frame.best = parent_frame.best.max(done.best + 1),
                None => return done.best,
            }
        }
        0
    }

    fn enter(
        &mut self,
        graph: &OntologyGraph,
        node: NodeIndex,
        on_path: &mut HashSet<NodeIndex>,
    ) -> DepthStep {
        if let Some(&depth) = self.depth_cache.get(&node) {
            return DepthStep::Ready(depth);
        }
        if on_path.contains(&node) {
            return DepthStep::Ready(0);
        }
        let parents = graph.parents(node);
        if parents.is_empty() {
            self.depth_cache.insert(node, 0);
            return DepthStep::Ready(0);
        }
        on_path.insert(node);
        DepthStep::Pending(DepthFrame {
            node,
            parents,
            next: 0,
            best: 0,
        })
    }

    /// Maximum depth over every node; fills the depth cache on first call.
    pub fn max_depth(&mut self, graph: &OntologyGraph) -> usize {
        if let Some(max) = self.max_depth {
            return max;
        }
        let mut max = 0;
        for idx in graph.nodes() {
            max = max.max(self.depth(graph, idx));
        }
        self.max_depth = Some(max);
        max
    }

    /// Maximum over depths computed so far, `None` if nothing is cached.
    pub fn max_cached_depth(&self) -> Option<usize> {
        self.depth_cache.values().copied().max()
    }
}

fn compute_centrality(graph: &OntologyGraph, config: &EngineConfig) -> Vec<CentralityBreakdown> {
    let n = graph.node_count();
    let mode = BetweennessMode::for_graph(
        n,
        config.exact_betweenness_limit,
        config.betweenness_sample_size,
    );

    let degree = resolve("degree", degree_centrality(graph), n);
    let closeness = resolve("closeness", closeness_centrality(graph), n);
    let betweenness = resolve("betweenness", betweenness_centrality(graph, mode), n);

    let weights = config.centrality;
    (0..n)
        .map(|i| CentralityBreakdown {
            degree: degree[i],
            closeness: closeness[i],
            betweenness: betweenness[i],
            combined: weights.degree * degree[i]
                + weights.closeness * closeness[i]
                + weights.betweenness * betweenness[i],
        })
        .collect()
}

fn resolve(measure: &str, outcome: CentralityOutcome, n: usize) -> Vec<f64> {
    if let CentralityOutcome::Fallback { reason } = &outcome {
        if n > 0 {
            warn!(measure, reason = reason.as_str(), "centrality fell back to zero");
        }
    }
    outcome.values_or_zero(n)
}
