//! # Document Ingestion Module
//!
//! ## Purpose
//! Feeds a directory of plain-text documents through the tokenizer into the
//! search engine, one ordered token stream per file.
//!
//! ## Input/Output Specification
//! - **Input**: Directory path, per-file raw text
//! - **Output**: Populated indexes; count of documents processed
//! - **Selection**: Regular files matching the configured extension
//!
//! ## Key Features
//! - Unreadable files are logged and skipped, never fatal
//! - Document identifier is the file path, matching inverted index hits

use crate::errors::Result;
use crate::search::SearchEngine;
use std::path::Path;
use tracing::{info, warn};

/// Ingest every matching document under `dir`. Returns the number of
/// documents processed.
pub fn ingest_directory(engine: &mut SearchEngine, dir: &Path) -> Result<usize> {
    let extension = engine.config().ingestion.document_extension.clone();
    info!("Processing documents from {:?}", dir);

    let mut processed = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension.as_str()) {
            continue;
        }

        match ingest_file(engine, &path) {
            Ok(count) => {
                info!("Added {} tokens from {:?}", count, path);
                processed += 1;
            }
            Err(err) => {
                warn!("Skipping {:?} ({}): {}", path, err.category(), err);
            }
        }
    }

    info!("Processed {} documents from {:?}", processed, dir);
    Ok(processed)
}

/// Tokenize one document and ingest its token stream. Returns the number of
/// tokens indexed.
pub fn ingest_file(engine: &mut SearchEngine, path: &Path) -> Result<usize> {
    let text = std::fs::read_to_string(path)?;
    let tokens = engine.tokenizer().tokenize(&text);
    let document = path.to_string_lossy().into_owned();
    Ok(engine.ingest(&document, &tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    fn write_doc(dir: &Path, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_directory_ingestion_indexes_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "one.txt", "Alpha beta gamma.");
        write_doc(dir.path(), "two.txt", "Beta delta!");
        write_doc(dir.path(), "ignored.md", "epsilon zeta");

        let mut engine = SearchEngine::new(Config::default()).unwrap();
        let processed = ingest_directory(&mut engine, dir.path()).unwrap();
        assert_eq!(processed, 2);

        let response = engine.query("beta").unwrap();
        assert_eq!(response.documents.len(), 2);
        // Skipped extension never reaches the indexes.
        assert!(engine.query("epsilon").unwrap().documents.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let mut engine = SearchEngine::new(Config::default()).unwrap();
        assert!(ingest_directory(&mut engine, Path::new("/nonexistent/docs")).is_err());
    }

    #[test]
    fn test_file_ingestion_counts_tokens() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "doc.txt", "alpha, beta; a gamma");

        let mut engine = SearchEngine::new(Config::default()).unwrap();
        let count = ingest_file(&mut engine, &dir.path().join("doc.txt")).unwrap();
        // "a" falls below the minimum token length.
        assert_eq!(count, 3);
    }
}
