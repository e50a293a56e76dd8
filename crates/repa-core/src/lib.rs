//! # Repa Core
//!
//! Shared types for scoring topics of a scientific-field ontology.
//!
//! The engine itself lives in `repa-engine`; this crate holds what every
//! front end needs to talk to it:
//!
//! - **Triples** — normalized `(super_topic, predicate, sub_topic)` input rows
//! - **Records** — serializable impact, ranking and group results
//! - **Config** — impact, centrality and multi-topic weight sets
//! - **Errors** — structured failures (unknown topic, empty group, bad config)
//!
//! ## Quick Start
//!
//! ```rust
//! use repa_core::prelude::*;
//!
//! let triple = Triple::new("ai", "skos:narrower", "machine learning");
//! assert_eq!(triple.relation(), Relation::Hierarchy);
//!
//! let weights = ImpactWeights::new(0.4, 0.35, 0.25).unwrap();
//! assert_eq!(weights, ImpactWeights::default());
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
