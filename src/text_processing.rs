//! # Text Processing Module
//!
//! ## Purpose
//! Tokenization and normalization pipeline turning raw document text into the
//! normalized keyword stream consumed by the index structures.
//!
//! ## Input/Output Specification
//! - **Input**: Raw document text, query strings
//! - **Output**: Ordered, normalized keyword tokens (lowercase, alphabetic)
//! - **Filtering**: Minimum/maximum length bounds, alphabetic-only alphabet
//!
//! ## Key Features
//! - Unicode NFC normalization before case folding
//! - Alphabetic-run extraction, punctuation and digits discarded
//! - Length filtering so single letters and oversized runs never index

use crate::config::TokenizerConfig;
use crate::errors::{EngineError, Result};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Text processing pipeline
pub struct Tokenizer {
    config: TokenizerConfig,
    word_regex: Regex,
}

impl Tokenizer {
    /// Create new tokenizer
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let word_regex = Regex::new(r"[A-Za-z]+").map_err(|e| EngineError::Config {
            message: format!("Invalid token regex: {}", e),
        })?;
        Ok(Self { config, word_regex })
    }

    /// Tokenize document text into an ordered sequence of normalized keywords.
    /// Non-alphabetic characters split tokens; runs outside the configured
    /// length bounds are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.fold(text);

        self.word_regex
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .filter(|token| {
                let keep = token.len() >= self.config.min_token_length
                    && token.len() <= self.config.max_token_length;
                if !keep {
                    tracing::trace!("Dropping out-of-bounds token: {}", token);
                }
                keep
            })
            .collect()
    }

    /// Normalize a single query keyword the same way ingestion normalizes
    /// document tokens. Returns an error when nothing indexable remains.
    pub fn normalize_keyword(&self, keyword: &str) -> Result<String> {
        let folded = self.fold(keyword);
        let cleaned: String = folded.chars().filter(|c| c.is_ascii_alphabetic()).collect();

        if cleaned.len() < self.config.min_token_length {
            return Err(EngineError::InvalidKeyword {
                keyword: keyword.to_string(),
                reason: format!(
                    "fewer than {} alphabetic characters",
                    self.config.min_token_length
                ),
            });
        }
        if cleaned.len() > self.config.max_token_length {
            return Err(EngineError::InvalidKeyword {
                keyword: keyword.to_string(),
                reason: format!(
                    "longer than {} characters",
                    self.config.max_token_length
                ),
            });
        }

        Ok(cleaned)
    }

    fn fold(&self, text: &str) -> String {
        let composed: String = if self.config.enable_unicode_normalization {
            text.nfc().collect()
        } else {
            text.to_string()
        };
        composed.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(TokenizerConfig {
            min_token_length: 2,
            max_token_length: 49,
            enable_unicode_normalization: true,
        })
        .unwrap()
    }

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        let tokens = tokenizer().tokenize("Hello, World! It's fine.");
        assert_eq!(tokens, vec!["hello", "world", "it", "fine"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokens = tokenizer().tokenize("a is to be or not");
        assert_eq!(tokens, vec!["is", "to", "be", "or", "not"]);
    }

    #[test]
    fn test_digits_split_tokens() {
        let tokens = tokenizer().tokenize("c3po meets r2d2");
        assert_eq!(tokens, vec!["po", "meets"]);
    }

    #[test]
    fn test_oversized_tokens_dropped() {
        let long = "x".repeat(50);
        let tokens = tokenizer().tokenize(&format!("short {} words", long));
        assert_eq!(tokens, vec!["short", "words"]);
    }

    #[test]
    fn test_normalize_keyword_folds_case() {
        assert_eq!(tokenizer().normalize_keyword("Alpha").unwrap(), "alpha");
    }

    #[test]
    fn test_normalize_keyword_rejects_empty_residue() {
        assert!(tokenizer().normalize_keyword("42!").is_err());
    }
}
