//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the knowledge graph search engine, providing
//! structured error types shared by every index structure and the outer layers.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from index structures, configuration, and I/O
//! - **Output**: Structured error types with context for logging and callers
//! - **Error Categories**: Capacity, Input, Configuration, I/O
//!
//! ## Key Features
//! - Explicit capacity-exceeded results instead of silent truncation
//! - Absent keywords are modeled as `Option`/empty results, never as errors
//! - No error is fatal to the host process

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error types for the knowledge graph search engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A fixed-capacity structure refused an insertion
    #[error("capacity exceeded in {structure}: limit is {capacity}")]
    CapacityExceeded {
        structure: &'static str,
        capacity: usize,
    },

    /// Keyword contains characters outside the accepted alphabet or violates
    /// the length bounds
    #[error("invalid keyword '{keyword}': {reason}")]
    InvalidKeyword { keyword: String, reason: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Generic I/O errors (document ingestion, config loading)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Check if the error is a non-fatal skip condition. Ingestion treats
    /// these as "drop this item and keep going".
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            EngineError::CapacityExceeded { .. } | EngineError::InvalidKeyword { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            EngineError::CapacityExceeded { .. } => "capacity",
            EngineError::InvalidKeyword { .. } => "input",
            EngineError::Config { .. } | EngineError::ValidationFailed { .. } => "configuration",
            EngineError::Io(_) => "io",
            EngineError::Toml(_) | EngineError::Json(_) => "serialization",
        }
    }
}
