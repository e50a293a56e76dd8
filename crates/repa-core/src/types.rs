//! Shared types used across the engine and its front ends.

use serde::{Deserialize, Serialize};

/// Predicate marker for symmetric "same concept" pairings.
pub const RELATED_EQUIVALENT: &str = "relatedEquivalent";

/// Predicate marker for directed "contributes to" links.
pub const CONTRIBUTES_TO: &str = "contributesTo";

/// A normalized ontology triple `(super_topic, predicate, sub_topic)`.
///
/// Topics are expected to be already normalized upstream; the engine
/// never case-folds or rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub super_topic: String,
    pub predicate: String,
    pub sub_topic: String,
}

impl Triple {
    pub fn new(
        super_topic: impl Into<String>,
        predicate: impl Into<String>,
        sub_topic: impl Into<String>,
    ) -> Self {
        Self {
            super_topic: super_topic.into(),
            predicate: predicate.into(),
            sub_topic: sub_topic.into(),
        }
    }

    /// Classify the predicate by substring membership.
    pub fn relation(&self) -> Relation {
        Relation::classify(&self.predicate)
    }
}

/// The side relation a triple contributes, beyond its hierarchy edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Plain super/sub relation (e.g. `skos:narrower`, `superTopicOf`).
    Hierarchy,
    /// `relatedEquivalent`: recorded in both directions.
    Equivalent,
    /// `contributesTo`: recorded forward only.
    ContributesTo,
}

impl Relation {
    pub fn classify(predicate: &str) -> Self {
        if predicate.contains(RELATED_EQUIVALENT) {
            Relation::Equivalent
        } else if predicate.contains(CONTRIBUTES_TO) {
            Relation::ContributesTo
        } else {
            Relation::Hierarchy
        }
    }
}

/// Impact breakdown for a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactRecord {
    pub topic_id: String,
    pub topic_label: String,
    pub depth: usize,
    pub depth_score: f64,
    pub influence_score: f64,
    pub semantic_score: f64,
    pub impact_factor: f64,
    pub frequency: usize,
    pub centrality: f64,
    pub is_specific_topic: bool,
    pub equivalents_count: usize,
    pub contributions_count: usize,
}

/// Outcome of ranking a batch of topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ranking {
    /// Scored topics, highest impact first, truncated to the requested count.
    pub entries: Vec<ImpactRecord>,
    /// Candidates that are not members of the hierarchy, in encounter order.
    pub skipped: Vec<String>,
}

/// Aggregate score for a group of two or more member topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupImpactRecord {
    pub group_topics: Vec<String>,
    pub depth_score: f64,
    pub influence_score: f64,
    pub semantic_cohesion: f64,
    pub impact_factor: f64,
}

/// Result of `group_impact`: a lone member is scored as a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupImpact {
    Single(ImpactRecord),
    Group(GroupImpactRecord),
}

impl GroupImpact {
    pub fn impact_factor(&self) -> f64 {
        match self {
            GroupImpact::Single(record) => record.impact_factor,
            GroupImpact::Group(record) => record.impact_factor,
        }
    }
}

/// Composite score combining individual impact with overlap, coherence
/// and coverage of a topic set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiTopicImpact {
    pub topics: Vec<String>,
    pub base_impact: f64,
    pub overlap: f64,
    pub coherence: f64,
    pub coverage: f64,
    pub final_impact: f64,
}

/// Per-component centrality values for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CentralityBreakdown {
    pub degree: f64,
    pub closeness: f64,
    pub betweenness: f64,
    pub combined: f64,
}

/// Structural overview of a built hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub equivalence_pairs: usize,
    pub contribution_links: usize,
    pub specific_topics: usize,
    pub specific_in_graph: usize,
    pub max_depth: usize,
    pub roots: usize,
}

/// Display label for a topic id: underscores become spaces and each
/// word is title-cased.
pub fn topic_label(topic: &str) -> String {
    let mut label = String::with_capacity(topic.len());
    let mut prev_is_alpha = false;
    for c in topic.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_alpha {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            label.push(c);
            prev_is_alpha = false;
        }
    }
    label
}
