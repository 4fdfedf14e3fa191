//! Error types for noise construction

use std::fmt;

/// Errors that can occur while building a noise generator
///
/// Evaluating noise never fails; only configuration and custom
/// permutation tables are validated.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// A caller-supplied permutation is not a bijection on 0..=255
    InvalidPermutation(String),
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            NoiseError::InvalidPermutation(msg) => write!(f, "invalid permutation: {}", msg),
        }
    }
}

impl std::error::Error for NoiseError {}

/// Result type alias for noise construction
pub type Result<T> = std::result::Result<T, NoiseError>;
