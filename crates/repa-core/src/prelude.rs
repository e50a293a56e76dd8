//! Repa Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use repa_core::prelude::*;
//! ```

pub use crate::config::{
    CentralityWeights, EngineConfig, ImpactWeights, InfluenceConfig, MultiTopicWeights,
};
pub use crate::error::{ConfigError, LoadError, RepaError, Result, TopicError};
pub use crate::types::{
    topic_label, CentralityBreakdown, GraphSummary, GroupImpact, GroupImpactRecord, ImpactRecord,
    MultiTopicImpact, Ranking, Relation, Triple, CONTRIBUTES_TO, RELATED_EQUIVALENT,
};
