//! Error types for topic impact scoring.
//!
//! Scoring never panics on bad input: a missing topic or an empty group
//! comes back as a structured error so batch callers can skip it.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, RepaError>;

/// Errors that can occur while building or scoring a hierarchy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepaError {
    /// Topic-related errors.
    #[error("Topic error: {0}")]
    Topic(#[from] TopicError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Input loading errors.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for RepaError {
    fn from(e: std::io::Error) -> Self {
        RepaError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RepaError {
    fn from(e: serde_json::Error) -> Self {
        RepaError::Serialization(e.to_string())
    }
}

/// Topic-related errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopicError {
    /// The topic is not a node of the hierarchy graph.
    #[error("Topic {0} not found")]
    NotAMember(String),
    /// None of the topics in a group is a node of the hierarchy graph.
    #[error("No valid topic in the group")]
    EmptyGroup,
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A weight set does not sum to one.
    #[error("{name} weights must sum to 1.0 (got {sum})")]
    WeightSum { name: String, sum: f64 },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Input loading errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// A line could not be parsed as a triple.
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    /// The file extension is not a known triple format.
    #[error("Unsupported triple format: {0}")]
    UnsupportedFormat(String),
}

// Convenience constructors
impl RepaError {
    pub fn not_a_member(topic: impl Into<String>) -> Self {
        RepaError::Topic(TopicError::NotAMember(topic.into()))
    }

    pub fn empty_group() -> Self {
        RepaError::Topic(TopicError::EmptyGroup)
    }

    pub fn weight_sum(name: impl Into<String>, sum: f64) -> Self {
        RepaError::Config(ConfigError::WeightSum {
            name: name.into(),
            sum,
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        RepaError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn malformed_line(line: usize, reason: impl Into<String>) -> Self {
        RepaError::Load(LoadError::MalformedLine {
            line,
            reason: reason.into(),
        })
    }

    /// Check if this error means the topic is absent from the hierarchy.
    pub fn is_not_a_member(&self) -> bool {
        matches!(self, RepaError::Topic(TopicError::NotAMember(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RepaError::not_a_member("quantum biology");
        assert_eq!(
            err.to_string(),
            "Topic error: Topic quantum biology not found"
        );

        let err = RepaError::malformed_line(7, "expected 3 columns");
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_is_not_a_member() {
        assert!(RepaError::not_a_member("x").is_not_a_member());
        assert!(!RepaError::empty_group().is_not_a_member());
    }
}
