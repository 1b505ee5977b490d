//! # Prefix Trie Module
//!
//! ## Purpose
//! Implements the prefix tree (trie) over the known keyword set, answering
//! exact-membership checks and auto-completion queries.
//!
//! ## Input/Output Specification
//! - **Input**: Normalized keywords, prefix queries
//! - **Output**: Membership results, lexicographically ordered completions
//! - **Performance**: O(m) lookup time where m = query length
//!
//! ## Key Features
//! - Fixed 26-way branching over the lowercase alphabet
//! - Iterative stack-based subtree enumeration (no recursion depth limits)
//! - Completion truncation at a configurable limit

const ALPHABET_SIZE: usize = 26;

/// Prefix trie over the indexed keyword set
pub struct PrefixIndex {
    root: TrieNode,
    suggestion_limit: usize,
}

/// Trie node: one slot per lowercase letter plus a terminal flag
#[derive(Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_end_of_word: bool,
}

/// Map a character onto its child slot. `None` for anything outside
/// `[a-zA-Z]`.
fn child_slot(c: char) -> Option<usize> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(lower as usize - 'a' as usize)
    } else {
        None
    }
}

impl PrefixIndex {
    pub fn new(suggestion_limit: usize) -> Self {
        Self {
            root: TrieNode::default(),
            suggestion_limit,
        }
    }

    /// Insert an already-normalized keyword, creating any missing path nodes.
    /// Characters outside the alphabet are skipped. Idempotent.
    pub fn insert(&mut self, keyword: &str) {
        let mut current = &mut self.root;
        for c in keyword.chars() {
            let Some(slot) = child_slot(c) else { continue };
            current = &mut **current.children[slot].get_or_insert_with(Box::default);
        }
        current.is_end_of_word = true;
    }

    /// Whether the keyword is a complete entry. Any character outside the
    /// alphabet aborts the traversal.
    pub fn contains_exact(&self, keyword: &str) -> bool {
        let mut current = &self.root;
        for c in keyword.chars() {
            let Some(slot) = child_slot(c) else {
                return false;
            };
            match current.children[slot].as_deref() {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.is_end_of_word
    }

    /// Collect up to `limit` completions of `prefix` in lexicographic order,
    /// including the prefix itself when it is a complete keyword. An absent
    /// prefix path yields an empty list. Enumeration stops the moment the
    /// limit is reached, so later-lexicographic matches beyond the cap are
    /// deliberately omitted.
    pub fn suggest_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut current = &self.root;
        let mut folded = String::with_capacity(prefix.len());
        for c in prefix.chars() {
            let Some(slot) = child_slot(c) else {
                return Vec::new();
            };
            match current.children[slot].as_deref() {
                Some(child) => {
                    current = child;
                    folded.push(c.to_ascii_lowercase());
                }
                None => return Vec::new(),
            }
        }

        let mut completions = Vec::new();
        // Children are pushed in reverse so 'a' pops first: the stack yields
        // a preorder walk in alphabet order, which is lexicographic order.
        let mut stack = vec![(current, folded)];
        while let Some((node, word)) = stack.pop() {
            if node.is_end_of_word {
                completions.push(word.clone());
                if completions.len() >= limit {
                    break;
                }
            }
            for slot in (0..ALPHABET_SIZE).rev() {
                if let Some(child) = node.children[slot].as_deref() {
                    let mut next = word.clone();
                    next.push((b'a' + slot as u8) as char);
                    stack.push((child, next));
                }
            }
        }
        completions
    }

    /// Completions truncated at the configured suggestion limit.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.suggest_completions(prefix, self.suggestion_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with(words: &[&str]) -> PrefixIndex {
        let mut index = PrefixIndex::new(10);
        for word in words {
            index.insert(word);
        }
        index
    }

    #[test]
    fn test_insert_and_contains() {
        let index = index_with(&["alpha", "beta"]);
        assert!(index.contains_exact("alpha"));
        assert!(index.contains_exact("ALPHA"));
        assert!(!index.contains_exact("alp"));
        assert!(!index.contains_exact("gamma"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let index = index_with(&["alpha", "alpha"]);
        assert_eq!(index.suggest("al"), vec!["alpha"]);
    }

    #[test]
    fn test_non_alphabetic_skipped_on_insert() {
        // "c3po" inserts as "cpo": the digit is skipped, not rejected.
        let index = index_with(&["c3po"]);
        assert!(index.contains_exact("cpo"));
        assert!(!index.contains_exact("c3po"));
    }

    #[test]
    fn test_lookup_aborts_on_invalid_character() {
        let index = index_with(&["alpha"]);
        assert!(!index.contains_exact("al-pha"));
        assert!(index.suggest("al!").is_empty());
    }

    #[test]
    fn test_completions_lexicographic() {
        let index = index_with(&["car", "cat", "cab", "dog", "ca"]);
        assert_eq!(index.suggest("ca"), vec!["ca", "cab", "car", "cat"]);
    }

    #[test]
    fn test_prefix_itself_included_when_terminal() {
        let index = index_with(&["alpha", "alphabet"]);
        assert_eq!(index.suggest("alpha"), vec!["alpha", "alphabet"]);
    }

    #[test]
    fn test_missing_prefix_yields_empty() {
        let index = index_with(&["alpha"]);
        assert!(index.suggest("be").is_empty());
    }

    #[test]
    fn test_limit_truncates_enumeration() {
        let index = index_with(&["aa", "ab", "ac", "ad", "ae"]);
        assert_eq!(index.suggest_completions("a", 3), vec!["aa", "ab", "ac"]);
    }

    #[test]
    fn test_case_insensitive_prefix() {
        let index = index_with(&["alpha"]);
        assert_eq!(index.suggest("AL"), vec!["alpha"]);
    }
}
