//! Unified error types for Strata

use thiserror::Error;

/// Unified error type for all Strata operations
///
/// Expected irregularities (unknown type tags, missing entries) never surface
/// here; they are rendered as placeholders. Only contract violations and
/// I/O around the pipeline do.
#[derive(Error, Debug)]
pub enum StrataError {
    // Dispatch errors
    #[error("Contract violation in '{tag}' producer at {path}: {reason}")]
    ContractViolation {
        tag: String,
        path: String,
        reason: String,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Terminal errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StrataError {
    /// Build a contract violation for a producer that received a value of the wrong shape
    pub fn contract(tag: &str, path: &str, reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            tag: tag.to_string(),
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using StrataError
pub type Result<T> = std::result::Result<T, StrataError>;
