//! # Repa
//!
//! Semantic impact scoring for topics of a scientific-field ontology.
//!
//! Repa reads a snapshot of ontology triples (`super_topic`, `predicate`,
//! `sub_topic`), builds a directed topic hierarchy and scores every topic
//! by three signals:
//!
//! | Signal | Source | Meaning |
//! |--------|--------|---------|
//! | Depth | longest ancestor chain | how specialized a topic is |
//! | Influence | centrality and connectivity | how much of the field it touches |
//! | Semantic | Lin similarity to reference topics | how close it is to what matters |
//!
//! The impact factor mixes them with configurable weights and rewards
//! topics from the specific-topic set.
//!
//! ## Quick Start
//!
//! ```rust
//! use repa::prelude::*;
//!
//! let triples = vec![
//!     Triple::new("ai", "skos:narrower", "machine learning"),
//!     Triple::new("machine learning", "skos:narrower", "neural network"),
//!     Triple::new("ai", "skos:narrower", "planning"),
//! ];
//! let specific = ["neural network".to_string(), "planning".to_string()];
//! let mut scorer = ImpactScorer::new(&triples, specific, EngineConfig::default()).unwrap();
//!
//! // Rank the specific topics against each other
//! let ranking = scorer.rank_topics_by_impact(None, 10, true);
//! for record in &ranking.entries {
//!     println!("{} (impact: {:.3})", record.topic_label, record.impact_factor);
//! }
//!
//! // Score a topic set as a whole
//! let mut group = GroupImpactScorer::new(&mut scorer);
//! let multi = group.multi_topic_impact(
//!     &["neural network".to_string(), "planning".to_string()],
//!     None,
//! );
//! assert!((0.0..=1.0).contains(&multi.final_impact));
//! ```
//!
//! ## Architecture
//!
//! - [`repa_core`] - Triples, score records, weight sets and errors
//! - [`repa_engine`] - Hierarchy, metrics, similarity and the scorers

pub use repa_core as core;
pub use repa_engine as engine;

/// Prelude module for convenient imports.
///
/// ```rust
/// use repa::prelude::*;
/// ```
pub mod prelude {
    pub use repa_engine::prelude::*;
}
