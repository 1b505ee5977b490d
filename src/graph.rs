//! # Relation Graph Module
//!
//! ## Purpose
//! Undirected co-occurrence graph over keywords, answering relatedness
//! (breadth-first neighborhood) and shortest-path queries between keywords.
//!
//! ## Input/Output Specification
//! - **Input**: Keyword pairs observed within a co-occurrence window
//! - **Output**: Related-keyword lists in visitation order, reconstructed
//!   shortest paths in start-to-end order
//! - **Invariants**: Edges undirected and deduplicated, no self-loops, node
//!   indices stable (append-only)
//!
//! ## Key Features
//! - Atomic all-or-nothing edge insertion under neighbor capacity limits
//! - Traversal state held in side arrays scoped to a single query, never in
//!   the persistent nodes
//! - Path reconstruction bounded by the node count, with dequeue-time BFS
//!   termination for correct parent assignment

use crate::errors::{EngineError, Result};

/// One node per distinct keyword
struct GraphNode {
    keyword: String,
    /// Neighbor indices in insertion order, capacity-bounded
    neighbors: Vec<usize>,
}

/// Undirected co-occurrence graph
pub struct RelationGraph {
    nodes: Vec<GraphNode>,
    max_nodes: usize,
    max_neighbors_per_node: usize,
}

impl RelationGraph {
    pub fn new(max_nodes: usize, max_neighbors_per_node: usize) -> Self {
        Self {
            nodes: Vec::new(),
            max_nodes,
            max_neighbors_per_node,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Case-insensitive linear scan for an existing node.
    fn find(&self, keyword: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.keyword.eq_ignore_ascii_case(keyword))
    }

    /// Return the index of the node for `keyword`, appending a new node when
    /// absent. A full graph is reported as a capacity error; callers treat
    /// that as a non-fatal skip.
    pub fn find_or_create(&mut self, keyword: &str) -> Result<usize> {
        if let Some(index) = self.find(keyword) {
            return Ok(index);
        }
        if self.nodes.len() >= self.max_nodes {
            return Err(EngineError::CapacityExceeded {
                structure: "relation graph nodes",
                capacity: self.max_nodes,
            });
        }
        self.nodes.push(GraphNode {
            keyword: keyword.to_string(),
            neighbors: Vec::new(),
        });
        Ok(self.nodes.len() - 1)
    }

    /// Add an undirected edge between two keywords. Identical endpoints and
    /// already-present edges are no-ops. Insertion is atomic: if either
    /// side's neighbor list is full, neither side is mutated.
    pub fn add_edge(&mut self, keyword1: &str, keyword2: &str) -> Result<()> {
        let index1 = self.find_or_create(keyword1)?;
        let index2 = self.find_or_create(keyword2)?;

        if index1 == index2 {
            return Ok(());
        }
        if self.nodes[index1].neighbors.contains(&index2) {
            return Ok(());
        }

        let limit = self.max_neighbors_per_node;
        if self.nodes[index1].neighbors.len() >= limit
            || self.nodes[index2].neighbors.len() >= limit
        {
            return Err(EngineError::CapacityExceeded {
                structure: "relation graph neighbors per node",
                capacity: limit,
            });
        }

        self.nodes[index1].neighbors.push(index2);
        self.nodes[index2].neighbors.push(index1);
        Ok(())
    }

    /// Breadth-first relatedness across the whole connected component of
    /// `keyword`, excluding the start itself, in visitation order, truncated
    /// at `limit`. An unknown keyword yields an empty list.
    pub fn related_keywords(&self, keyword: &str, limit: usize) -> Vec<String> {
        let Some(start) = self.find(keyword) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut queue = std::collections::VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        let mut related = Vec::new();
        while let Some(current) = queue.pop_front() {
            if current != start {
                related.push(self.nodes[current].keyword.clone());
                if related.len() >= limit {
                    break;
                }
            }
            for &neighbor in &self.nodes[current].neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        related
    }

    /// Breadth-first shortest path from `start_keyword` to `end_keyword`,
    /// returned in start-to-end order. `None` when either endpoint is absent
    /// or the endpoints are disconnected. Identical endpoints yield the
    /// single-keyword path.
    pub fn shortest_path(&self, start_keyword: &str, end_keyword: &str) -> Option<Vec<String>> {
        let start = self.find(start_keyword)?;
        let end = self.find(end_keyword)?;

        if start == end {
            return Some(vec![self.nodes[start].keyword.clone()]);
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut parent: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut queue = std::collections::VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            // Dequeue-time termination: every parent link on the path is
            // already final when the end node leaves the frontier.
            if current == end {
                return self.reconstruct(start, end, &parent);
            }
            for &neighbor in &self.nodes[current].neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    parent[neighbor] = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }
        None
    }

    /// Walk parent links backward from `end` to `start`, bounded by the node
    /// count, then reverse into start-to-end order.
    fn reconstruct(&self, start: usize, end: usize, parent: &[Option<usize>]) -> Option<Vec<String>> {
        let mut path = Vec::new();
        let mut current = end;
        for _ in 0..self.nodes.len() {
            path.push(self.nodes[current].keyword.clone());
            if current == start {
                path.reverse();
                return Some(path);
            }
            current = parent[current]?;
        }
        None
    }
}
