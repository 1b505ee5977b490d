//! # Query History Module
//!
//! Bounded structures tracking recent query terms: a FIFO ring buffer of the
//! latest queries and a LIFO undo/redo stack pair. The two differ on purpose
//! at capacity: the ring evicts its oldest entry, the stacks reject the push.

use crate::errors::{EngineError, Result};
use std::collections::VecDeque;

/// Fixed-capacity FIFO of recent query terms, oldest evicted first
pub struct HistoryLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a term, evicting the oldest entry first when at capacity.
    pub fn record(&mut self, term: &str) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(term.to_string());
    }

    /// All entries, oldest to newest.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Fixed-capacity LIFO of query terms; push on a full stack is rejected
/// without mutation
pub struct BoundedStack {
    items: Vec<String>,
    capacity: usize,
    structure: &'static str,
}

impl BoundedStack {
    pub fn new(capacity: usize, structure: &'static str) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            structure,
        }
    }

    pub fn push(&mut self, term: &str) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(EngineError::CapacityExceeded {
                structure: self.structure,
                capacity: self.capacity,
            });
        }
        self.items.push(term.to_string());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_evicts_oldest_first() {
        let mut history = HistoryLog::new(5);
        for term in ["one", "two", "three", "four", "five", "six"] {
            history.record(term);
        }
        assert_eq!(
            history.snapshot(),
            vec!["two", "three", "four", "five", "six"]
        );
    }

    #[test]
    fn test_history_snapshot_is_oldest_to_newest() {
        let mut history = HistoryLog::new(5);
        history.record("first");
        history.record("second");
        assert_eq!(history.snapshot(), vec!["first", "second"]);
    }

    #[test]
    fn test_stack_rejects_push_past_capacity() {
        let mut stack = BoundedStack::new(10, "undo stack");
        for i in 0..10 {
            stack.push(&format!("term{}", i)).unwrap();
        }

        let err = stack.push("term10").unwrap_err();
        assert!(matches!(err, EngineError::CapacityExceeded { capacity: 10, .. }));
        assert_eq!(stack.len(), 10);
        assert_eq!(stack.pop().unwrap(), "term9");
    }

    #[test]
    fn test_stack_pop_empty_is_none() {
        let mut stack = BoundedStack::new(10, "undo stack");
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }
}
