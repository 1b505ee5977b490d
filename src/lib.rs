//! # Knowledge Graph Keyword Search Engine
//!
//! ## Overview
//! This library implements an in-memory keyword indexing and
//! relationship-discovery engine for a small document corpus. Tokenized
//! documents feed three coupled indexes: a prefix trie for autocomplete, an
//! inverted index for document/frequency lookup, and an undirected
//! co-occurrence graph answering relatedness and shortest-path queries,
//! alongside bounded query-history and undo/redo structures.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `text_processing`: Tokenization and keyword normalization
//! - `trie`: Prefix tree for exact membership and autocomplete
//! - `index`: Inverted index mapping keywords to document frequencies
//! - `graph`: Co-occurrence graph with BFS relatedness and path queries
//! - `history`: Bounded query history and undo/redo stacks
//! - `search`: Engine context wiring the structures together
//! - `ingestion`: Directory walker feeding documents into the engine
//! - `config`: Configuration management and capacity limits
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Plain-text documents, query keywords, keyword pairs
//! - **Output**: Suggestions, document hits with frequencies, related
//!   keywords, classified shortest paths
//! - **Discipline**: Single-threaded; ingestion completes before queries
//!
//! ## Usage
//! ```rust
//! use knowledge_graph_search::{Config, SearchEngine};
//!
//! fn main() -> knowledge_graph_search::Result<()> {
//!     let mut engine = SearchEngine::new(Config::default())?;
//!     let tokens: Vec<String> =
//!         ["alpha", "beta", "gamma"].iter().map(|t| t.to_string()).collect();
//!     engine.ingest("doc1.txt", &tokens);
//!     let response = engine.query("alpha")?;
//!     println!("{} related keywords", response.related.len());
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod errors;
pub mod graph;
pub mod history;
pub mod index;
pub mod ingestion;
pub mod search;
pub mod text_processing;
pub mod trie;

// Re-exports for convenience
pub use config::Config;
pub use errors::{EngineError, Result};
pub use index::{DocumentHit, IndexEntry};
pub use search::{PathDegree, PathResponse, QueryResponse, SearchEngine};
