//! Scoring of topic groups.
//!
//! Two aggregate views over an explicit list of topics:
//!
//! - **Group impact**: mean normalized depth and influence of the member
//!   topics plus their internal semantic cohesion
//! - **Multi-topic impact**: mean individual impact, rewarded for
//!   coherence and ancestor coverage, penalized for descendant overlap

use crate::impact::ImpactScorer;
use petgraph::graph::NodeIndex;
use repa_core::config::MultiTopicWeights;
use repa_core::error::{RepaError, Result};
use repa_core::types::{GroupImpact, GroupImpactRecord, MultiTopicImpact};
use std::collections::HashSet;

/// Group-level scoring on top of an [`ImpactScorer`] and its caches.
pub struct GroupImpactScorer<'a> {
    scorer: &'a mut ImpactScorer,
}

impl<'a> GroupImpactScorer<'a> {
    pub fn new(scorer: &'a mut ImpactScorer) -> Self {
        Self { scorer }
    }

    fn members(&self, topics: &[String]) -> Vec<NodeIndex> {
        topics
            .iter()
            .filter_map(|t| self.scorer.graph().index_of(t))
            .collect()
    }

    /// Mean pairwise Lin similarity over the member topics of the group.
    pub fn internal_cohesion(&mut self, topics: &[String]) -> f64 {
        let members = self.members(topics);
        self.cohesion_of(&members)
    }

    fn cohesion_of(&mut self, members: &[NodeIndex]) -> f64 {
        if members.len() < 2 {
            return 0.0;
        }
        let mut similarity = self.scorer.similarity();
        let mut total = 0.0;
        let mut count = 0usize;
        for (i, &a) in members.iter().enumerate() {
            for &b in &members[i + 1..] {
                total += similarity.lin_similarity_at(a, b);
                count += 1;
            }
        }
        total / count as f64
    }

    /// Impact of a group of topics.
    ///
    /// Unknown topics are ignored. A single member is scored as a lone
    /// topic against every member specific topic; two or more members
    /// combine mean normalized depth, mean normalized influence and
    /// internal cohesion with the impact weights.
    pub fn group_impact(&mut self, topics: &[String]) -> Result<GroupImpact> {
        let members = self.members(topics);

        match members.as_slice() {
            [] => Err(RepaError::empty_group()),
            [single] => {
                let mut references = self.scorer.specific_members(self.scorer.graph().node_count());
                if references.is_empty() {
                    references = self.scorer.default_references();
                }
                Ok(GroupImpact::Single(self.scorer.impact_at(*single, &references)))
            }
            _ => Ok(GroupImpact::Group(self.group_record(&members))),
        }
    }

    fn group_record(&mut self, members: &[NodeIndex]) -> GroupImpactRecord {
        let depths: Vec<usize> = members.iter().map(|&idx| self.scorer.depth_at(idx)).collect();
        let depth_score = match self.scorer.max_cached_depth() {
            Some(max) if max > 0 => mean(depths.iter().map(|&d| d as f64 / max as f64)),
            _ => 0.0,
        };

        let influences: Vec<f64> = members
            .iter()
            .map(|&idx| self.scorer.influence_at(idx))
            .collect();
        let influence_score = match self.scorer.max_cached_influence() {
            Some(max) if max > 0.0 => mean(influences.iter().map(|&i| i / max)),
            _ => 0.0,
        };

        let semantic_cohesion = self.cohesion_of(members);

        let weights = self.scorer.config().impact;
        let impact_factor = weights.alpha * depth_score
            + weights.beta * influence_score
            + weights.gamma * semantic_cohesion;

        let graph = self.scorer.graph();
        GroupImpactRecord {
            group_topics: members.iter().map(|&idx| graph.topic(idx).to_string()).collect(),
            depth_score,
            influence_score,
            semantic_cohesion,
            impact_factor,
        }
    }

    /// Jaccard index of the topics' descendant closures (self-inclusive).
    ///
    /// A topic outside the hierarchy contributes a closure holding only itself.
    pub fn topic_overlap(&self, topics: &[String]) -> f64 {
        if topics.len() <= 1 {
            return 0.0;
        }
        let graph = self.scorer.graph();
        let closures: Vec<HashSet<&str>> = topics
            .iter()
            .map(|topic| match graph.index_of(topic) {
                Some(idx) => graph
                    .descendants(idx)
                    .into_iter()
                    .map(|d| graph.topic(d))
                    .collect(),
                None => HashSet::from([topic.as_str()]),
            })
            .collect();

        let mut union: HashSet<&str> = HashSet::new();
        for closure in &closures {
            union.extend(closure.iter().copied());
        }
        let intersection = closures[0]
            .iter()
            .filter(|t| closures[1..].iter().all(|c| c.contains(*t)))
            .count();

        if union.is_empty() {
            0.0
        } else {
            intersection as f64 / union.len() as f64
        }
    }

    /// Mean pairwise relatedness: the strongest of a direct edge (1.0),
    /// an equivalence (1.0), a contribution (0.5) and `1 / (1 + d)` for
    /// the undirected shortest path length `d`. A group of at most one
    /// topic is fully coherent.
    pub fn semantic_coherence(&self, topics: &[String]) -> f64 {
        if topics.len() <= 1 {
            return 1.0;
        }
        let mut total = 0.0;
        let mut count = 0usize;
        for (i, a) in topics.iter().enumerate() {
            for b in &topics[i + 1..] {
                total += self.pair_coherence(a, b);
                count += 1;
            }
        }
        total / count as f64
    }

    fn pair_coherence(&self, a: &str, b: &str) -> f64 {
        let graph = self.scorer.graph();
        let (Some(a), Some(b)) = (graph.index_of(a), graph.index_of(b)) else {
            return 0.0;
        };

        let direct: f64 = if graph.has_edge(a, b) || graph.has_edge(b, a) { 1.0 } else { 0.0 };
        let equivalent = if graph.is_equivalent(a, b) { 1.0 } else { 0.0 };
        let contribution = if graph.contributes_to(a, b) || graph.contributes_to(b, a) {
            0.5
        } else {
            0.0
        };
        let path = graph
            .undirected_distance(a, b)
            .map_or(0.0, |d| 1.0 / (1.0 + d as f64));

        direct.max(equivalent).max(contribution).max(path)
    }

    /// Share of the hierarchy lying above (or at) the group's topics,
    /// capped at 1.0.
    pub fn coverage_breadth(&self, topics: &[String]) -> f64 {
        let graph = self.scorer.graph();
        let total = graph.node_count();
        if total == 0 {
            return 0.0;
        }

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<NodeIndex> = Vec::new();
        for idx in self.members(topics) {
            if visited.insert(idx) {
                stack.push(idx);
            }
        }
        while let Some(current) = stack.pop() {
            for &parent in graph.reverse_parents(current) {
                if visited.insert(parent) {
                    stack.push(parent);
                }
            }
        }

        (visited.len() as f64 / total as f64).min(1.0)
    }

    /// Composite impact of a topic set, clamped to [0, 1].
    ///
    /// `base·w_individual + coherence·w_coherence + coverage·w_coverage − overlap·w_overlap`,
    /// where `base` is the mean impact factor of the member topics
    /// against the default reference set. An empty set scores 0.0.
    pub fn multi_topic_impact(
        &mut self,
        topics: &[String],
        weights: Option<MultiTopicWeights>,
    ) -> MultiTopicImpact {
        if topics.is_empty() {
            return MultiTopicImpact::default();
        }
        let weights = weights.unwrap_or(self.scorer.config().multi_topic);

        let references = self.scorer.default_references();
        let members = self.members(topics);
        let mut impacts = Vec::with_capacity(members.len());
        for idx in members {
            impacts.push(self.scorer.impact_at(idx, &references).impact_factor);
        }
        let base_impact = mean(impacts.into_iter());

        let overlap = self.topic_overlap(topics);
        let coherence = self.semantic_coherence(topics);
        let coverage = self.coverage_breadth(topics);

        let final_impact = (base_impact * weights.individual + coherence * weights.coherence
            + coverage * weights.coverage
            - overlap * weights.overlap)
            .clamp(0.0, 1.0);

        MultiTopicImpact {
            topics: topics.to_vec(),
            base_impact,
            overlap,
            coherence,
            coverage,
            final_impact,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
