//! Tunable constants for the scoring engine.
//!
//! Every weight set that forms a convex combination is validated to sum
//! to one; `EngineConfig::validate` reports the first violation.

use crate::error::{RepaError, Result};
use serde::{Deserialize, Serialize};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weights of the single-topic impact formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactWeights {
    /// Weight of the normalized depth score.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Weight of the normalized influence score.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Weight of the semantic score.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

/// Weights of the multi-topic composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiTopicWeights {
    #[serde(default = "default_individual")]
    pub individual: f64,
    /// Subtracted, scaled by descendant overlap.
    #[serde(default = "default_overlap")]
    pub overlap: f64,
    #[serde(default = "default_coherence")]
    pub coherence: f64,
    #[serde(default = "default_coverage")]
    pub coverage: f64,
}

/// Mix of the three centrality components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralityWeights {
    #[serde(default = "default_degree")]
    pub degree: f64,
    #[serde(default = "default_closeness")]
    pub closeness: f64,
    #[serde(default = "default_betweenness")]
    pub betweenness: f64,
}

/// Influence = `centrality * centrality_weight + ln(1 + connectivity) * connectivity_weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceConfig {
    #[serde(default = "default_centrality_weight")]
    pub centrality_weight: f64,
    #[serde(default = "default_connectivity_weight")]
    pub connectivity_weight: f64,
    #[serde(default = "default_children_coef")]
    pub children: f64,
    #[serde(default = "default_parents_coef")]
    pub parents: f64,
    #[serde(default = "default_equivalents_coef")]
    pub equivalents: f64,
    #[serde(default = "default_contributions_coef")]
    pub contributions: f64,
}

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Multiplier applied to the impact of specific topics.
    #[serde(default = "default_specific_bonus")]
    pub specific_bonus: f64,
    /// Similarity assigned to registered equivalents.
    #[serde(default = "default_equivalence_similarity")]
    pub equivalence_similarity: f64,
    /// Maximum size of a substituted reference set.
    #[serde(default = "default_reference_cap")]
    pub reference_cap: usize,
    /// Added to the relative frequency before taking its logarithm.
    #[serde(default = "default_ic_epsilon")]
    pub ic_epsilon: f64,
    /// Graphs with at least this many nodes use sampled betweenness.
    #[serde(default = "default_exact_betweenness_limit")]
    pub exact_betweenness_limit: usize,
    /// Number of sampled sources for approximate betweenness.
    #[serde(default = "default_betweenness_sample_size")]
    pub betweenness_sample_size: usize,
    #[serde(default)]
    pub impact: ImpactWeights,
    #[serde(default)]
    pub multi_topic: MultiTopicWeights,
    #[serde(default)]
    pub centrality: CentralityWeights,
    #[serde(default)]
    pub influence: InfluenceConfig,
}

// Default value functions
fn default_alpha() -> f64 { 0.4 }
fn default_beta() -> f64 { 0.35 }
fn default_gamma() -> f64 { 0.25 }
fn default_individual() -> f64 { 0.5 }
fn default_overlap() -> f64 { 0.2 }
fn default_coherence() -> f64 { 0.2 }
fn default_coverage() -> f64 { 0.1 }
fn default_degree() -> f64 { 0.4 }
fn default_closeness() -> f64 { 0.3 }
fn default_betweenness() -> f64 { 0.3 }
fn default_centrality_weight() -> f64 { 0.6 }
fn default_connectivity_weight() -> f64 { 0.4 }
fn default_children_coef() -> f64 { 1.0 }
fn default_parents_coef() -> f64 { 0.5 }
fn default_equivalents_coef() -> f64 { 0.3 }
fn default_contributions_coef() -> f64 { 0.2 }
fn default_specific_bonus() -> f64 { 1.1 }
fn default_equivalence_similarity() -> f64 { 0.9 }
fn default_reference_cap() -> usize { 20 }
fn default_ic_epsilon() -> f64 { 1e-10 }
fn default_exact_betweenness_limit() -> usize { 1000 }
fn default_betweenness_sample_size() -> usize { 100 }

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
            gamma: default_gamma(),
        }
    }
}

impl Default for MultiTopicWeights {
    fn default() -> Self {
        Self {
            individual: default_individual(),
            overlap: default_overlap(),
            coherence: default_coherence(),
            coverage: default_coverage(),
        }
    }
}

impl Default for CentralityWeights {
    fn default() -> Self {
        Self {
            degree: default_degree(),
            closeness: default_closeness(),
            betweenness: default_betweenness(),
        }
    }
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            centrality_weight: default_centrality_weight(),
            connectivity_weight: default_connectivity_weight(),
            children: default_children_coef(),
            parents: default_parents_coef(),
            equivalents: default_equivalents_coef(),
            contributions: default_contributions_coef(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            specific_bonus: default_specific_bonus(),
            equivalence_similarity: default_equivalence_similarity(),
            reference_cap: default_reference_cap(),
            ic_epsilon: default_ic_epsilon(),
            exact_betweenness_limit: default_exact_betweenness_limit(),
            betweenness_sample_size: default_betweenness_sample_size(),
            impact: ImpactWeights::default(),
            multi_topic: MultiTopicWeights::default(),
            centrality: CentralityWeights::default(),
            influence: InfluenceConfig::default(),
        }
    }
}

impl ImpactWeights {
    /// Build a weight set, rejecting sets that do not sum to one.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        let weights = Self { alpha, beta, gamma };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit("impact.alpha", self.alpha)?;
        check_unit("impact.beta", self.beta)?;
        check_unit("impact.gamma", self.gamma)?;
        check_sum("impact", self.alpha + self.beta + self.gamma)
    }
}

impl MultiTopicWeights {
    /// Each weight must lie in [0, 1]; the overlap term is a penalty,
    /// so the set is not required to sum to one.
    pub fn validate(&self) -> Result<()> {
        check_unit("multi_topic.individual", self.individual)?;
        check_unit("multi_topic.overlap", self.overlap)?;
        check_unit("multi_topic.coherence", self.coherence)?;
        check_unit("multi_topic.coverage", self.coverage)
    }
}

impl CentralityWeights {
    pub fn validate(&self) -> Result<()> {
        check_unit("centrality.degree", self.degree)?;
        check_unit("centrality.closeness", self.closeness)?;
        check_unit("centrality.betweenness", self.betweenness)?;
        check_sum("centrality", self.degree + self.closeness + self.betweenness)
    }
}

impl EngineConfig {
    /// Check every weight set and scalar for consistency.
    pub fn validate(&self) -> Result<()> {
        self.impact.validate()?;
        self.multi_topic.validate()?;
        self.centrality.validate()?;
        if self.specific_bonus < 1.0 {
            return Err(RepaError::out_of_range(
                "specific_bonus",
                1.0,
                f64::INFINITY,
                self.specific_bonus,
            ));
        }
        check_unit("equivalence_similarity", self.equivalence_similarity)?;
        if !(self.ic_epsilon > 0.0 && self.ic_epsilon < 1.0) {
            return Err(RepaError::out_of_range("ic_epsilon", 0.0, 1.0, self.ic_epsilon));
        }
        if self.betweenness_sample_size == 0 {
            return Err(RepaError::out_of_range(
                "betweenness_sample_size",
                1.0,
                f64::INFINITY,
                0.0,
            ));
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RepaError::out_of_range(field, 0.0, 1.0, value))
    }
}

fn check_sum(name: &str, sum: f64) -> Result<()> {
    if (sum - 1.0).abs() <= WEIGHT_TOLERANCE {
        Ok(())
    } else {
        Err(RepaError::weight_sum(name, sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn impact_weights_must_sum_to_one() {
        assert!(ImpactWeights::new(0.5, 0.3, 0.2).is_ok());
        let err = ImpactWeights::new(0.5, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, RepaError::Config(ConfigError::WeightSum { .. })));
    }

    #[test]
    fn negative_weight_is_out_of_range() {
        let err = ImpactWeights::new(1.2, -0.1, -0.1).unwrap_err();
        assert!(matches!(err, RepaError::Config(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn bonus_below_one_rejected() {
        let config = EngineConfig {
            specific_bonus: 0.9,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"impact": {"alpha": 0.5, "beta": 0.25}, "reference_cap": 5}"#)
                .unwrap();
        assert_eq!(config.impact.alpha, 0.5);
        assert_eq!(config.impact.gamma, 0.25);
        assert_eq!(config.reference_cap, 5);
        assert_eq!(config.betweenness_sample_size, 100);
    }
}
