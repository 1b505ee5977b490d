//! # Search Engine Module
//!
//! ## Purpose
//! Main engine wiring the four index structures behind one owning context
//! object: the prefix trie for autocomplete, the inverted index for document
//! hits, the relation graph for relatedness and path queries, and the bounded
//! history/undo structures.
//!
//! ## Input/Output Specification
//! - **Input**: Tokenized documents, query keywords, keyword pairs
//! - **Output**: Combined query responses (suggestions, document hits,
//!   related keywords, history), classified path responses
//! - **Discipline**: Single logical caller; ingestion completes before
//!   queries begin
//!
//! ## Key Features
//! - Single construction point for every index structure
//! - Windowed co-occurrence edge building during ingestion
//! - Capacity overflows logged and skipped, never fatal
//! - Queries never mutate the indexes, so undo tracks terms only

use crate::config::Config;
use crate::errors::Result;
use crate::graph::RelationGraph;
use crate::history::{BoundedStack, HistoryLog};
use crate::index::{DocumentHit, InvertedIndex};
use crate::text_processing::Tokenizer;
use crate::trie::PrefixIndex;
use serde::Serialize;
use tracing::{debug, info, trace};

/// Owning context for the whole index set. Construct once at startup and
/// pass explicitly to ingestion and query call sites.
pub struct SearchEngine {
    config: Config,
    tokenizer: Tokenizer,
    prefix_index: PrefixIndex,
    inverted_index: InvertedIndex,
    relation_graph: RelationGraph,
    history: HistoryLog,
    undo_stack: BoundedStack,
    redo_stack: BoundedStack,
}

/// Combined response for a keyword query
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    /// Normalized form of the queried keyword
    pub keyword: String,
    /// Autocomplete suggestions, lexicographic, truncated
    pub suggestions: Vec<String>,
    /// Documents containing the keyword, insertion-ordered
    pub documents: Vec<DocumentHit>,
    /// Related keywords in breadth-first visitation order
    pub related: Vec<String>,
    /// Recent query terms, oldest to newest
    pub history: Vec<String>,
}

/// Response for a path query between two keywords
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    /// Ordered path from the first keyword to the second
    pub path: Vec<String>,
    /// Number of edges along the path
    pub hops: usize,
    /// Relationship classification derived from the hop count
    pub degree: PathDegree,
}

/// Relationship strength classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathDegree {
    /// The keywords appear together (path length 2)
    Direct,
    /// Connected through one intermediate keyword (path length 3)
    SecondDegree,
    /// Connected through `hops` edges
    Degree(usize),
}

impl PathDegree {
    fn from_hops(hops: usize) -> Self {
        match hops {
            1 => PathDegree::Direct,
            2 => PathDegree::SecondDegree,
            n => PathDegree::Degree(n),
        }
    }
}

impl SearchEngine {
    /// Create the engine with every structure sized from configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(config.tokenizer.clone())?;

        info!(
            "Initializing knowledge graph search engine (graph capacity: {} nodes, window: {})",
            config.graph.max_nodes, config.graph.cooccurrence_window
        );

        Ok(Self {
            tokenizer,
            prefix_index: PrefixIndex::new(config.trie.suggestion_limit),
            inverted_index: InvertedIndex::new(
                config.index.bucket_count,
                config.index.max_documents_per_keyword,
            ),
            relation_graph: RelationGraph::new(
                config.graph.max_nodes,
                config.graph.max_neighbors_per_node,
            ),
            history: HistoryLog::new(config.history.history_capacity),
            undo_stack: BoundedStack::new(config.history.undo_capacity, "undo stack"),
            redo_stack: BoundedStack::new(config.history.undo_capacity, "redo stack"),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Ingest one document's ordered token sequence. Each valid token is
    /// inserted into the trie and the inverted index, and linked to each of
    /// the next `cooccurrence_window` tokens in the relation graph. Capacity
    /// overflows are logged and skipped.
    pub fn ingest(&mut self, document: &str, tokens: &[String]) -> usize {
        let window = self.config.graph.cooccurrence_window;
        let mut indexed = 0;

        for (i, token) in tokens.iter().enumerate() {
            let keyword = match self.tokenizer.normalize_keyword(token) {
                Ok(keyword) => keyword,
                Err(err) => {
                    trace!("Skipping token in {}: {}", document, err);
                    continue;
                }
            };

            self.prefix_index.insert(&keyword);
            if let Err(err) = self.inverted_index.record(&keyword, document, 1) {
                debug!("Inverted index skipped ({}): {}", err.category(), err);
            }

            for successor in tokens.iter().skip(i + 1).take(window) {
                let Ok(other) = self.tokenizer.normalize_keyword(successor) else {
                    continue;
                };
                if let Err(err) = self.relation_graph.add_edge(&keyword, &other) {
                    debug!("Relation graph skipped ({}): {}", err.category(), err);
                }
            }
            indexed += 1;
        }

        debug!("Ingested {} of {} tokens from {}", indexed, tokens.len(), document);
        indexed
    }

    /// Run a keyword query against all three indexes and record the term in
    /// the history structures. Absent keywords produce empty sections, never
    /// an error.
    pub fn query(&mut self, keyword: &str) -> Result<QueryResponse> {
        let keyword = self.tokenizer.normalize_keyword(keyword)?;
        debug!("Query: {}", keyword);

        if let Err(err) = self.undo_stack.push(&keyword) {
            debug!("Undo stack skipped ({}): {}", err.category(), err);
        }
        self.history.record(&keyword);

        let suggestions = self.prefix_index.suggest(&keyword);
        let documents = self
            .inverted_index
            .lookup(&keyword)
            .map(|entry| entry.documents.clone())
            .unwrap_or_default();
        let related = self
            .relation_graph
            .related_keywords(&keyword, self.config.graph.related_limit);

        Ok(QueryResponse {
            keyword,
            suggestions,
            documents,
            related,
            history: self.history.snapshot(),
        })
    }

    /// Shortest-path query between two keywords. `None` when either keyword
    /// is unknown or no path exists. Does not touch the history structures.
    pub fn path_query(&mut self, keyword1: &str, keyword2: &str) -> Result<Option<PathResponse>> {
        let start = self.tokenizer.normalize_keyword(keyword1)?;
        let end = self.tokenizer.normalize_keyword(keyword2)?;
        debug!("Path query: {} -> {}", start, end);

        Ok(self.relation_graph.shortest_path(&start, &end).map(|path| {
            let hops = path.len() - 1;
            PathResponse {
                path,
                hops,
                degree: PathDegree::from_hops(hops),
            }
        }))
    }

    /// Pop the most recent query term onto the redo stack. Queries never
    /// mutate the indexes, so there is no index state to roll back.
    pub fn undo(&mut self) -> Option<String> {
        let term = self.undo_stack.pop()?;
        if let Err(err) = self.redo_stack.push(&term) {
            debug!("Redo stack skipped ({}): {}", err.category(), err);
        }
        Some(term)
    }

    /// Move the most recently undone term back onto the undo stack.
    pub fn redo(&mut self) -> Option<String> {
        let term = self.redo_stack.pop()?;
        if let Err(err) = self.undo_stack.push(&term) {
            debug!("Undo stack skipped ({}): {}", err.category(), err);
        }
        Some(term)
    }

    /// Recent query terms, oldest to newest.
    pub fn history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    pub fn indexed_keyword_count(&self) -> usize {
        self.relation_graph.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SearchEngine {
        SearchEngine::new(Config::default()).unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ingest_builds_all_three_indexes() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["alpha", "beta", "gamma"]));

        let response = engine.query("alpha").unwrap();
        assert_eq!(response.suggestions, vec!["alpha"]);
        assert_eq!(response.documents.len(), 1);
        assert_eq!(response.documents[0].document, "d1.txt");
        assert_eq!(response.documents[0].frequency, 1);
        assert_eq!(response.related, vec!["beta", "gamma"]);
        assert_eq!(response.history, vec!["alpha"]);
    }

    #[test]
    fn test_prefix_query_suggests_full_keyword() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["alpha", "beta", "gamma"]));

        let response = engine.query("alp").unwrap();
        assert_eq!(response.suggestions, vec!["alpha"]);
        assert!(response.documents.is_empty());
    }

    #[test]
    fn test_reingestion_changes_only_frequencies() {
        let mut engine = engine();
        let doc_tokens = tokens(&["alpha", "beta", "gamma"]);
        engine.ingest("d1.txt", &doc_tokens);
        engine.ingest("d1.txt", &doc_tokens);

        assert_eq!(engine.indexed_keyword_count(), 3);
        let response = engine.query("alpha").unwrap();
        assert_eq!(response.documents.len(), 1);
        assert_eq!(response.documents[0].frequency, 2);
        assert_eq!(response.related, vec!["beta", "gamma"]);
    }

    #[test]
    fn test_window_links_next_three_tokens_only() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["aa", "bb", "cc", "dd", "ee", "ff"]));

        // Direct neighbors of aa are exactly bb, cc, dd; ee arrives later in
        // BFS order via multi-hop paths.
        let response = engine.query("aa").unwrap();
        assert_eq!(response.related[..3], ["bb", "cc", "dd"]);
        assert!(response.related.contains(&"ee".to_string()));

        let direct = engine.path_query("aa", "dd").unwrap().unwrap();
        assert_eq!(direct.degree, PathDegree::Direct);
        let indirect = engine.path_query("aa", "ee").unwrap().unwrap();
        assert_eq!(indirect.degree, PathDegree::SecondDegree);
    }

    #[test]
    fn test_path_query_direct_classification() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["alpha", "beta", "gamma"]));

        let response = engine.path_query("alpha", "gamma").unwrap().unwrap();
        assert_eq!(response.path, vec!["alpha", "gamma"]);
        assert_eq!(response.hops, 1);
        assert_eq!(response.degree, PathDegree::Direct);
    }

    #[test]
    fn test_path_query_unknown_keyword_is_none() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["alpha", "beta"]));
        assert!(engine.path_query("alpha", "missing").unwrap().is_none());
    }

    #[test]
    fn test_query_side_effects_feed_undo_and_history() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["alpha", "beta"]));

        engine.query("alpha").unwrap();
        engine.query("beta").unwrap();

        assert_eq!(engine.history(), vec!["alpha", "beta"]);
        assert_eq!(engine.undo().unwrap(), "beta");
        assert_eq!(engine.redo().unwrap(), "beta");
        assert_eq!(engine.undo().unwrap(), "beta");
        assert_eq!(engine.undo().unwrap(), "alpha");
        assert!(engine.undo().is_none());
    }

    #[test]
    fn test_history_keeps_only_the_latest_five() {
        let mut engine = engine();
        for term in ["aa", "bb", "cc", "dd", "ee", "ff"] {
            engine.query(term).unwrap();
        }
        assert_eq!(engine.history(), vec!["bb", "cc", "dd", "ee", "ff"]);
    }

    #[test]
    fn test_invalid_query_keyword_is_rejected() {
        let mut engine = engine();
        assert!(engine.query("123!").is_err());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_queries_are_case_insensitive() {
        let mut engine = engine();
        engine.ingest("d1.txt", &tokens(&["alpha", "beta"]));

        let response = engine.query("ALPHA").unwrap();
        assert_eq!(response.keyword, "alpha");
        assert_eq!(response.documents.len(), 1);
        assert_eq!(response.related, vec!["beta"]);
    }
}
