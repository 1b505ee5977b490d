//! # Inverted Index Module
//!
//! ## Purpose
//! Maps each keyword to the documents containing it, with per-document
//! frequency counts, behind a chained hash table keyed by case-folded keyword.
//!
//! ## Input/Output Specification
//! - **Input**: Normalized keywords, document identifiers, frequency deltas
//! - **Output**: Insertion-ordered document/frequency lists per keyword
//! - **Invariants**: One entry per case-insensitive keyword, one pair per
//!   (keyword, document); repeated insertion accumulates frequency
//!
//! ## Key Features
//! - Polynomial rolling hash over case-folded characters
//! - Chained buckets scanned fully on both lookup and insert
//! - Bounded document list per keyword with explicit overflow results

use crate::errors::{EngineError, Result};
use serde::Serialize;

/// A single document hit for a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHit {
    /// Document identifier (file path in the reference corpus)
    pub document: String,
    /// Accumulated occurrence count within that document
    pub frequency: u32,
}

/// One entry per distinct keyword
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub keyword: String,
    /// Insertion-ordered, capacity-bounded document list
    pub documents: Vec<DocumentHit>,
}

/// Inverted index: chained hash table from keyword to document hits
pub struct InvertedIndex {
    buckets: Vec<Vec<IndexEntry>>,
    max_documents_per_keyword: usize,
}

impl InvertedIndex {
    pub fn new(bucket_count: usize, max_documents_per_keyword: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count],
            max_documents_per_keyword,
        }
    }

    /// Polynomial rolling hash over case-folded characters, reduced modulo
    /// the bucket count. Collisions are expected; chains resolve them.
    fn bucket_of(&self, keyword: &str) -> usize {
        let mut hash: u32 = 0;
        for c in keyword.chars() {
            hash = hash
                .wrapping_mul(31)
                .wrapping_add(c.to_ascii_lowercase() as u32);
        }
        hash as usize % self.buckets.len()
    }

    /// Record `delta` occurrences of `keyword` in `document`. An existing
    /// (keyword, document) pair accumulates; a new document appends unless
    /// the per-keyword list is at capacity, which is reported without any
    /// mutation.
    pub fn record(&mut self, keyword: &str, document: &str, delta: u32) -> Result<()> {
        let bucket = self.bucket_of(keyword);
        let limit = self.max_documents_per_keyword;

        // Full chain scan: the same bucket can legitimately hold many
        // distinct keywords.
        for entry in &mut self.buckets[bucket] {
            if !entry.keyword.eq_ignore_ascii_case(keyword) {
                continue;
            }
            if let Some(hit) = entry.documents.iter_mut().find(|h| h.document == document) {
                hit.frequency += delta;
                return Ok(());
            }
            if entry.documents.len() >= limit {
                return Err(EngineError::CapacityExceeded {
                    structure: "inverted index documents per keyword",
                    capacity: limit,
                });
            }
            entry.documents.push(DocumentHit {
                document: document.to_string(),
                frequency: delta,
            });
            return Ok(());
        }

        self.buckets[bucket].push(IndexEntry {
            keyword: keyword.to_string(),
            documents: vec![DocumentHit {
                document: document.to_string(),
                frequency: delta,
            }],
        });
        Ok(())
    }

    /// Case-insensitive entry lookup.
    pub fn lookup(&self, keyword: &str) -> Option<&IndexEntry> {
        let bucket = self.bucket_of(keyword);
        self.buckets[bucket]
            .iter()
            .find(|entry| entry.keyword.eq_ignore_ascii_case(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut index = InvertedIndex::new(1000, 100);
        index.record("alpha", "doc1.txt", 1).unwrap();

        let entry = index.lookup("alpha").unwrap();
        assert_eq!(entry.documents.len(), 1);
        assert_eq!(entry.documents[0].document, "doc1.txt");
        assert_eq!(entry.documents[0].frequency, 1);
    }

    #[test]
    fn test_repeated_insertion_accumulates_frequency() {
        let mut index = InvertedIndex::new(1000, 100);
        index.record("alpha", "doc1.txt", 1).unwrap();
        index.record("alpha", "doc1.txt", 1).unwrap();

        let entry = index.lookup("alpha").unwrap();
        assert_eq!(entry.documents.len(), 1);
        assert_eq!(entry.documents[0].frequency, 2);
    }

    #[test]
    fn test_new_document_appends_in_order() {
        let mut index = InvertedIndex::new(1000, 100);
        index.record("alpha", "doc1.txt", 1).unwrap();
        index.record("alpha", "doc2.txt", 3).unwrap();

        let entry = index.lookup("alpha").unwrap();
        let docs: Vec<&str> = entry.documents.iter().map(|h| h.document.as_str()).collect();
        assert_eq!(docs, vec!["doc1.txt", "doc2.txt"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut index = InvertedIndex::new(1000, 100);
        index.record("alpha", "doc1.txt", 1).unwrap();
        assert!(index.lookup("ALPHA").is_some());
        assert!(index.lookup("beta").is_none());
    }

    #[test]
    fn test_document_capacity_rejected_without_mutation() {
        let mut index = InvertedIndex::new(1000, 2);
        index.record("alpha", "doc1.txt", 1).unwrap();
        index.record("alpha", "doc2.txt", 1).unwrap();

        let err = index.record("alpha", "doc3.txt", 1).unwrap_err();
        assert!(matches!(err, EngineError::CapacityExceeded { capacity: 2, .. }));

        let entry = index.lookup("alpha").unwrap();
        assert_eq!(entry.documents.len(), 2);

        // Existing documents still accumulate at capacity.
        index.record("alpha", "doc2.txt", 1).unwrap();
        assert_eq!(index.lookup("alpha").unwrap().documents[1].frequency, 2);
    }

    #[test]
    fn test_colliding_keywords_share_a_bucket() {
        // One bucket forces every keyword onto the same chain.
        let mut index = InvertedIndex::new(1, 100);
        index.record("alpha", "doc1.txt", 1).unwrap();
        index.record("beta", "doc1.txt", 1).unwrap();
        index.record("gamma", "doc2.txt", 1).unwrap();

        assert_eq!(index.lookup("alpha").unwrap().documents[0].document, "doc1.txt");
        assert_eq!(index.lookup("beta").unwrap().documents[0].document, "doc1.txt");
        assert_eq!(index.lookup("gamma").unwrap().documents[0].document, "doc2.txt");
    }
}
