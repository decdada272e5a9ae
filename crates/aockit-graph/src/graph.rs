//! A directed, weighted graph over arbitrary hashable keys.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Sentinel distance meaning "unreachable" in shortest-path queries.
pub const UNREACHABLE: u64 = u64::MAX;

/// A directed, weighted graph over arbitrary hashable keys.
///
/// The graph owns an adjacency map and a set of every vertex seen as an
/// edge endpoint. Parallel edges between the same pair of vertices are all
/// retained and all considered by search. Edge insertion is the only
/// mutator; queries never change the stored edges or vertices.
///
/// Weights are unsigned, which is also the precondition Dijkstra's
/// algorithm needs for correctness.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    pub(crate) edges: HashMap<K, Vec<(K, u64)>>,
    pub(crate) vertices: HashSet<K>,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
            vertices: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Graph<K> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directed edge `u -> v` with the given weight.
    ///
    /// Appends without deduplicating: inserting the same pair twice keeps
    /// both edges. Both endpoints are added to the vertex set.
    pub fn add_edge(&mut self, u: K, v: K, weight: u64) {
        self.vertices.insert(u.clone());
        self.vertices.insert(v.clone());
        self.edges.entry(u).or_default().push((v, weight));
    }

    /// Whether `k` has been seen as an edge endpoint.
    pub fn contains(&self, k: &K) -> bool {
        self.vertices.contains(k)
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterate over every known vertex, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.vertices.iter()
    }
}
