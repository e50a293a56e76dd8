//! Repa Engine Prelude: the scorers plus the shared core types.
//!
//! ```rust
//! use repa_engine::prelude::*;
//! ```

pub use repa_core::prelude::*;

pub use crate::centrality::{BetweennessMode, CentralityOutcome};
pub use crate::corpus::{read_specific_topics, read_triples};
pub use crate::export::{records_to_csv, records_to_json, write_records, ExportFormat};
pub use crate::group::GroupImpactScorer;
pub use crate::hierarchy::{BuildSummary, GraphBuilder, OntologyGraph};
pub use crate::impact::ImpactScorer;
pub use crate::metrics::MetricsEngine;
pub use crate::similarity::SimilarityEngine;
