//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the knowledge graph search engine,
//! supporting TOML files and environment variable overrides with validation and
//! type-safe access to every capacity limit in the system.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Range checking on every capacity and window setting
//!
//! ## Key Features
//! - Every fixed capacity from the index structures is configurable here
//! - Missing configuration file falls back to reference defaults
//! - Environment overrides under the `KG_SEARCH_` prefix
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables
//! 2. Configuration files
//! 3. Default values

use crate::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document ingestion settings
    pub ingestion: IngestionConfig,
    /// Tokenizer configuration
    pub tokenizer: TokenizerConfig,
    /// Prefix trie configuration
    pub trie: TrieConfig,
    /// Inverted index configuration
    pub index: IndexConfig,
    /// Co-occurrence graph configuration
    pub graph: GraphConfig,
    /// Query history and undo/redo configuration
    pub history: HistoryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Document ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Directory scanned for documents
    pub documents_dir: PathBuf,
    /// File extension accepted during directory scans
    pub document_extension: String,
}

/// Tokenizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Minimum token length kept after normalization
    pub min_token_length: usize,
    /// Maximum keyword length accepted by the indexes
    pub max_token_length: usize,
    /// Enable Unicode NFC normalization before case folding
    pub enable_unicode_normalization: bool,
}

/// Prefix trie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Maximum completions returned per prefix query
    pub suggestion_limit: usize,
}

/// Inverted index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Number of hash buckets
    pub bucket_count: usize,
    /// Maximum distinct documents tracked per keyword
    pub max_documents_per_keyword: usize,
}

/// Co-occurrence graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum keyword nodes in the graph
    pub max_nodes: usize,
    /// Maximum neighbors per node
    pub max_neighbors_per_node: usize,
    /// Maximum related keywords returned per query
    pub related_limit: usize,
    /// Sliding window of subsequent tokens linked during ingestion
    pub cooccurrence_window: usize,
}

/// Query history and undo/redo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Recent-query ring buffer capacity
    pub history_capacity: usize,
    /// Undo and redo stack capacity
    pub undo_capacity: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| EngineError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("KG_SEARCH_DOCUMENTS_DIR") {
            self.ingestion.documents_dir = PathBuf::from(dir);
        }
        if let Ok(level) = std::env::var("KG_SEARCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(window) = std::env::var("KG_SEARCH_COOCCURRENCE_WINDOW") {
            self.graph.cooccurrence_window =
                window.parse().map_err(|_| EngineError::Config {
                    message: "Invalid value in KG_SEARCH_COOCCURRENCE_WINDOW".to_string(),
                })?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.min_token_length < 2 {
            return Err(EngineError::ValidationFailed {
                field: "tokenizer.min_token_length".to_string(),
                reason: "Tokens shorter than 2 characters are never indexed".to_string(),
            });
        }

        if self.tokenizer.max_token_length < self.tokenizer.min_token_length {
            return Err(EngineError::ValidationFailed {
                field: "tokenizer.max_token_length".to_string(),
                reason: "Maximum token length cannot be below the minimum".to_string(),
            });
        }

        if self.index.bucket_count == 0 {
            return Err(EngineError::ValidationFailed {
                field: "index.bucket_count".to_string(),
                reason: "At least one hash bucket is required".to_string(),
            });
        }

        if self.graph.cooccurrence_window == 0 {
            return Err(EngineError::ValidationFailed {
                field: "graph.cooccurrence_window".to_string(),
                reason: "Window must link each token to at least one successor".to_string(),
            });
        }

        let capacities = [
            ("trie.suggestion_limit", self.trie.suggestion_limit),
            (
                "index.max_documents_per_keyword",
                self.index.max_documents_per_keyword,
            ),
            ("graph.max_nodes", self.graph.max_nodes),
            (
                "graph.max_neighbors_per_node",
                self.graph.max_neighbors_per_node,
            ),
            ("graph.related_limit", self.graph.related_limit),
            ("history.history_capacity", self.history.history_capacity),
            ("history.undo_capacity", self.history.undo_capacity),
        ];
        for (field, value) in capacities {
            if value == 0 {
                return Err(EngineError::ValidationFailed {
                    field: field.to_string(),
                    reason: "Capacity must be greater than zero".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingestion: IngestionConfig {
                documents_dir: PathBuf::from("./documents"),
                document_extension: "txt".to_string(),
            },
            tokenizer: TokenizerConfig {
                min_token_length: 2,
                max_token_length: 49,
                enable_unicode_normalization: true,
            },
            trie: TrieConfig {
                suggestion_limit: 10,
            },
            index: IndexConfig {
                bucket_count: 1000,
                max_documents_per_keyword: 100,
            },
            graph: GraphConfig {
                max_nodes: 1000,
                max_neighbors_per_node: 20,
                related_limit: 20,
                cooccurrence_window: 3,
            },
            history: HistoryConfig {
                history_capacity: 5,
                undo_capacity: 10,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json_format: false,
            },
        }
    }
}
