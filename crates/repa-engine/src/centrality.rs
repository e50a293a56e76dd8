//! Graph-wide centrality measures over the directed hierarchy.
//!
//! Three components, each normalized to [0, 1]:
//!
//! - **Degree**: `(in + out) / (n - 1)`
//! - **Closeness**: inverse mean distance from the nodes that can reach
//!   a node, scaled by the reachable fraction (Wasserman–Faust)
//! - **Betweenness**: Brandes' algorithm, exact or over sampled sources
//!
//! Each function returns a [`CentralityOutcome`] instead of failing, so
//! the caller decides what a fallback means.

use crate::hierarchy::OntologyGraph;
use std::collections::VecDeque;

/// Value-or-fallback result of a centrality computation.
#[derive(Debug, Clone, PartialEq)]
pub enum CentralityOutcome {
    /// One value per node, indexed by `NodeIndex::index()`.
    Computed(Vec<f64>),
    /// The measure is undefined for this graph.
    Fallback { reason: String },
}

impl CentralityOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CentralityOutcome::Fallback { .. })
    }

    /// Unwrap computed values, or zeros for every node on fallback.
    pub fn values_or_zero(self, node_count: usize) -> Vec<f64> {
        match self {
            CentralityOutcome::Computed(values) => values,
            CentralityOutcome::Fallback { .. } => vec![0.0; node_count],
        }
    }

    fn checked(values: Vec<f64>, measure: &str) -> Self {
        if values.iter().all(|v| v.is_finite()) {
            CentralityOutcome::Computed(values)
        } else {
            CentralityOutcome::Fallback {
                reason: format!("{measure} produced non-finite values"),
            }
        }
    }
}

/// How betweenness picks its BFS sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetweennessMode {
    /// Every node is a source.
    Exact,
    /// `k` distinct pseudo-randomly chosen sources, rescaled by `n / k`.
    Sampled { k: usize },
}

impl BetweennessMode {
    /// Exact below `exact_limit` nodes, sampled with `min(sample_size, n)` otherwise.
    pub fn for_graph(node_count: usize, exact_limit: usize, sample_size: usize) -> Self {
        if node_count < exact_limit {
            BetweennessMode::Exact
        } else {
            BetweennessMode::Sampled {
                k: sample_size.min(node_count),
            }
        }
    }
}

fn out_adjacency(graph: &OntologyGraph) -> Vec<Vec<usize>> {
    graph
        .nodes()
        .map(|idx| graph.children(idx).into_iter().map(|c| c.index()).collect())
        .collect()
}

fn in_adjacency(graph: &OntologyGraph) -> Vec<Vec<usize>> {
    graph
        .nodes()
        .map(|idx| graph.parents(idx).into_iter().map(|p| p.index()).collect())
        .collect()
}

/// Normalized total degree.
pub fn degree_centrality(graph: &OntologyGraph) -> CentralityOutcome {
    let n = graph.node_count();
    if n == 0 {
        return CentralityOutcome::Fallback {
            reason: "empty graph".to_string(),
        };
    }
    if n == 1 {
        return CentralityOutcome::Computed(vec![1.0]);
    }
    let scale = 1.0 / (n - 1) as f64;
    let values = graph
        .nodes()
        .map(|idx| {
            let degree = graph.in_degree(idx) + graph.out_degree(idx);
            (degree as f64 * scale).min(1.0)
        })
        .collect();
    CentralityOutcome::checked(values, "degree centrality")
}

/// Closeness over incoming distances, scaled by the share of nodes that
/// reach the target so disconnected graphs stay comparable.
pub fn closeness_centrality(graph: &OntologyGraph) -> CentralityOutcome {
    let n = graph.node_count();
    if n == 0 {
        return CentralityOutcome::Fallback {
            reason: "empty graph".to_string(),
        };
    }
    let incoming = in_adjacency(graph);
    let mut values = vec![0.0; n];
    let mut dist = vec![usize::MAX; n];
    let mut queue = VecDeque::new();

    for target in 0..n {
        dist.iter_mut().for_each(|d| *d = usize::MAX);
        dist[target] = 0;
        queue.push_back(target);
        let mut reachable = 0usize;
        let mut total = 0usize;

        while let Some(v) = queue.pop_front() {
            for &u in &incoming[v] {
                if dist[u] == usize::MAX {
                    dist[u] = dist[v] + 1;
                    reachable += 1;
                    total += dist[u];
                    queue.push_back(u);
                }
            }
        }

        if total > 0 && n > 1 {
            let r = reachable as f64;
            values[target] = (r / total as f64) * (r / (n - 1) as f64);
        }
    }
    CentralityOutcome::checked(values, "closeness centrality")
}

/// Brandes betweenness, normalized by `1 / ((n - 1)(n - 2))`.
pub fn betweenness_centrality(graph: &OntologyGraph, mode: BetweennessMode) -> CentralityOutcome {
    let n = graph.node_count();
    if n == 0 {
        return CentralityOutcome::Fallback {
            reason: "empty graph".to_string(),
        };
    }
    let sources: Vec<usize> = match mode {
        BetweennessMode::Exact => (0..n).collect(),
        BetweennessMode::Sampled { k } => sample_sources(n, k),
    };
    if sources.is_empty() {
        return CentralityOutcome::Fallback {
            reason: "no betweenness sources".to_string(),
        };
    }

    let outgoing = out_adjacency(graph);
    let mut values = vec![0.0; n];

    let mut stack = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![usize::MAX; n];
    let mut delta = vec![0.0f64; n];
    let mut queue = VecDeque::new();

    for &s in &sources {
        stack.clear();
        preds.iter_mut().for_each(|p| p.clear());
        sigma.iter_mut().for_each(|x| *x = 0.0);
        dist.iter_mut().for_each(|d| *d = usize::MAX);
        delta.iter_mut().for_each(|x| *x = 0.0);

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in &outgoing[v] {
                if dist[w] == usize::MAX {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            for &v in &preds[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                values[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let mut scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        if let BetweennessMode::Sampled { .. } = mode {
            scale *= n as f64 / sources.len() as f64;
        }
        for v in values.iter_mut() {
            *v = (*v * scale).min(1.0);
        }
    }
    CentralityOutcome::checked(values, "betweenness centrality")
}

/// Pick `k` distinct node indices with a seeded LCG (partial Fisher-Yates),
/// so repeated runs on the same graph agree.
fn sample_sources(n: usize, k: usize) -> Vec<usize> {
    let k = k.min(n);
    let mut order: Vec<usize> = (0..n).collect();
    let mut seed: u64 = 42;
    for i in 0..k {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = i + (seed >> 33) as usize % (n - i);
        order.swap(i, j);
    }
    order.truncate(k);
    order
}
