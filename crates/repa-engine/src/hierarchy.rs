//! Hierarchy graph built from ontology triples.
//!
//! Uses petgraph's directed `Graph` as the backing store with a
//! `HashMap` index for O(1) lookup by topic. Every triple contributes a
//! `super -> sub` edge whatever its predicate, so equivalence and
//! contribution triples also shape depth and centrality. Two side maps
//! keep the equivalence (symmetric) and contribution (forward) relations.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use repa_core::types::{Relation, Triple};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use tracing::debug;

/// Immutable topic hierarchy plus its equivalence and contribution maps.
#[derive(Debug, Clone, Default)]
pub struct OntologyGraph {
    graph: DiGraph<String, ()>,
    /// Map from topic to petgraph's internal index.
    node_index: HashMap<String, NodeIndex>,
    /// sub -> supers, one entry per ingested triple (repeats kept).
    reverse: HashMap<NodeIndex, Vec<NodeIndex>>,
    equivalents: HashMap<NodeIndex, BTreeSet<NodeIndex>>,
    contributions: HashMap<NodeIndex, BTreeSet<NodeIndex>>,
    build: BuildSummary,
}

/// Counters collected while ingesting triples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub triples_seen: usize,
    pub triples_dropped: usize,
    pub equivalence_triples: usize,
    pub contribution_triples: usize,
}

/// Accumulates triples into an [`OntologyGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: OntologyGraph,
    summary: BuildSummary,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one triple. Triples with an empty topic on either side are
    /// dropped without error.
    pub fn add_triple(&mut self, triple: &Triple) -> &mut Self {
        self.summary.triples_seen += 1;

        let super_topic = triple.super_topic.as_str();
        let sub_topic = triple.sub_topic.as_str();
        if super_topic.is_empty() || sub_topic.is_empty() {
            self.summary.triples_dropped += 1;
            return self;
        }

        let from = self.graph.intern(super_topic);
        let to = self.graph.intern(sub_topic);

        if self.graph.graph.find_edge(from, to).is_none() {
            self.graph.graph.add_edge(from, to, ());
        }
        self.graph.reverse.entry(to).or_default().push(from);

        match triple.relation() {
            Relation::Equivalent => {
                self.summary.equivalence_triples += 1;
                self.graph.equivalents.entry(from).or_default().insert(to);
                self.graph.equivalents.entry(to).or_default().insert(from);
            }
            Relation::ContributesTo => {
                self.summary.contribution_triples += 1;
                self.graph.contributions.entry(from).or_default().insert(to);
            }
            Relation::Hierarchy => {}
        }
        self
    }

    pub fn add_triples<'a>(&mut self, triples: impl IntoIterator<Item = &'a Triple>) -> &mut Self {
        for triple in triples {
            self.add_triple(triple);
        }
        self
    }

    pub fn summary(&self) -> BuildSummary {
        self.summary
    }

    /// Finish ingestion. The counters travel with the graph.
    pub fn build(mut self) -> OntologyGraph {
        debug!(
            triples = self.summary.triples_seen,
            dropped = self.summary.triples_dropped,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "hierarchy built"
        );
        self.graph.build = self.summary;
        self.graph
    }
}

impl OntologyGraph {
    /// Build a graph from a sequence of triples.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> Self {
        let mut builder = GraphBuilder::new();
        builder.add_triples(triples);
        builder.build()
    }

    fn intern(&mut self, topic: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(topic) {
            return idx;
        }
        let idx = self.graph.add_node(topic.to_string());
        self.node_index.insert(topic.to_string(), idx);
        idx
    }

    pub fn index_of(&self, topic: &str) -> Option<NodeIndex> {
        self.node_index.get(topic).copied()
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.node_index.contains_key(topic)
    }

    pub fn topic(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Ingestion counters of the builder that produced this graph.
    pub fn build_summary(&self) -> BuildSummary {
        self.build
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Direct supers of a node (distinct).
    pub fn parents(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect()
    }

    /// Direct subs of a node (distinct).
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect()
    }

    /// Raw reverse adjacency: every super recorded for this sub.
    pub fn reverse_parents(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.reverse.get(&idx).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of incoming edges (a self-loop counts once here and once out).
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.find_edge(from, to).is_some()
    }

    pub fn equivalents_count(&self, idx: NodeIndex) -> usize {
        self.equivalents.get(&idx).map_or(0, |s| s.len())
    }

    pub fn contributions_count(&self, idx: NodeIndex) -> usize {
        self.contributions.get(&idx).map_or(0, |s| s.len())
    }

    pub fn is_equivalent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.equivalents.get(&a).map_or(false, |s| s.contains(&b))
    }

    /// True if `from` is recorded as contributing to `to`.
    pub fn contributes_to(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.contributions.get(&from).map_or(false, |s| s.contains(&to))
    }

    /// Number of distinct equivalence pairs.
    pub fn equivalence_pairs(&self) -> usize {
        let mut pairs = HashSet::new();
        for (&a, others) in &self.equivalents {
            for &b in others {
                pairs.insert(if a <= b { (a, b) } else { (b, a) });
            }
        }
        pairs.len()
    }

    pub fn contribution_links(&self) -> usize {
        self.contributions.values().map(|s| s.len()).sum()
    }

    /// Ancestor closure, including the node itself.
    pub fn ancestors(&self, idx: NodeIndex) -> HashSet<NodeIndex> {
        self.closure(idx, Direction::Incoming)
    }

    /// Descendant closure, including the node itself.
    pub fn descendants(&self, idx: NodeIndex) -> HashSet<NodeIndex> {
        self.closure(idx, Direction::Outgoing)
    }

    fn closure(&self, start: NodeIndex, direction: Direction) -> HashSet<NodeIndex> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors_directed(current, direction) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        visited
    }

    /// Shortest path length ignoring edge direction, or `None` if unreachable.
    pub fn undirected_distance(&self, from: NodeIndex, to: NodeIndex) -> Option<usize> {
        if from == to {
            return Some(0);
        }
        let mut dist: HashMap<NodeIndex, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(from, 0);
        queue.push_back(from);
        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            for next in self.graph.neighbors_undirected(current) {
                if dist.contains_key(&next) {
                    continue;
                }
                if next == to {
                    return Some(d + 1);
                }
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
        None
    }

    /// Nodes without any super.
    pub fn roots(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(|&idx| self.in_degree(idx) == 0)
    }
}
