//! # Repa Engine
//!
//! Semantic-impact scoring over a topic hierarchy.
//!
//! The engine turns a snapshot of ontology triples into a directed
//! hierarchy, computes structural metrics once, and scores topics by how
//! deep, how influential and how semantically close to a reference set
//! they are. Components, bottom up:
//!
//! - [`hierarchy`]: `GraphBuilder` and the immutable `OntologyGraph`
//! - [`centrality`]: degree, closeness and betweenness with explicit fallbacks
//! - [`metrics`]: frequency, combined centrality and cycle-safe depth, cached
//! - [`similarity`]: information content, lowest common ancestor, Lin similarity
//! - [`impact`]: the composite impact factor and ranking
//! - [`group`]: group impact, overlap, coherence, coverage
//! - [`corpus`] and [`export`]: file adapters
//!
//! ```rust
//! use repa_engine::prelude::*;
//!
//! let triples = vec![
//!     Triple::new("ai", "skos:narrower", "machine learning"),
//!     Triple::new("machine learning", "skos:narrower", "neural network"),
//! ];
//! let mut scorer =
//!     ImpactScorer::new(&triples, ["neural network".to_string()], EngineConfig::default())
//!         .unwrap();
//!
//! let record = scorer.impact_factor("neural network", &[]).unwrap();
//! assert_eq!(record.depth, 2);
//! assert!(record.is_specific_topic);
//! ```

pub mod centrality;
pub mod corpus;
pub mod export;
pub mod group;
pub mod hierarchy;
pub mod impact;
pub mod metrics;
pub mod prelude;
pub mod similarity;
