//! Single-source shortest-path search (Dijkstra's algorithm).

use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::graph::{Graph, UNREACHABLE};

impl<K: Eq + Hash + Clone> Graph<K> {
    /// Shortest distance from `source` to `dest`.
    ///
    /// Returns [`UNREACHABLE`] when no path exists. The search exits as
    /// soon as `dest` is dequeued from the frontier: with non-negative
    /// weights the first dequeue of a vertex already carries its final
    /// distance.
    pub fn shortest_path(&self, source: &K, dest: &K) -> u64 {
        Search::new(self, source).run(Some(dest))
    }

    /// Shortest distances from `source` to every known vertex.
    ///
    /// The map covers the vertex set as it exists at call time, with
    /// unreachable vertices kept at [`UNREACHABLE`]. The source is always
    /// present with distance 0, even when no edge mentions it.
    pub fn shortest_path_map(&self, source: &K) -> HashMap<K, u64> {
        let mut search = Search::new(self, source);
        search.run(None);
        search
            .order
            .iter()
            .zip(&search.dist)
            .map(|(&k, &d)| (k.clone(), d))
            .collect()
    }
}

/// Frontier entry referencing an interned vertex, ordered by `dist` for use
/// in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Scratch state for one search. Vertices are interned to flat indices so
/// the frontier holds plain `(idx, dist)` pairs; relaxation never removes
/// superseded entries, which are instead skipped lazily via the visited
/// check on extraction.
struct Search<'g, K> {
    graph: &'g Graph<K>,
    order: Vec<&'g K>,
    index: HashMap<&'g K, usize>,
    dist: Vec<u64>,
    visited: Vec<bool>,
    open: BinaryHeap<NodeRef>,
}

impl<'g, K: Eq + Hash + Clone> Search<'g, K> {
    fn new(graph: &'g Graph<K>, source: &'g K) -> Self {
        // Snapshot the vertex set. A source never referenced by any edge
        // still gets a slot, keeping the degenerate query well-defined.
        let mut order: Vec<&'g K> = graph.vertices.iter().collect();
        if !graph.vertices.contains(source) {
            order.push(source);
        }
        let index: HashMap<&'g K, usize> =
            order.iter().enumerate().map(|(i, &k)| (k, i)).collect();

        let mut dist = vec![UNREACHABLE; order.len()];
        let visited = vec![false; order.len()];
        let mut open = BinaryHeap::new();
        if let Some(&si) = index.get(source) {
            dist[si] = 0;
            open.push(NodeRef { idx: si, dist: 0 });
        }

        Self {
            graph,
            order,
            index,
            dist,
            visited,
            open,
        }
    }

    /// Run the search to exhaustion, or until `dest` is dequeued.
    ///
    /// Returns the final distance to `dest`, or [`UNREACHABLE`] if no
    /// destination was given or it was never reached; the full distances
    /// stay available in `self.dist`.
    fn run(&mut self, dest: Option<&K>) -> u64 {
        let goal = dest.and_then(|d| self.index.get(d).copied());

        while let Some(NodeRef { idx, dist }) = self.open.pop() {
            if goal == Some(idx) {
                return dist;
            }
            // Skip stale frontier entries for already-finalized vertices.
            if self.visited[idx] {
                continue;
            }

            if let Some(out) = self.graph.edges.get(self.order[idx]) {
                for (target, weight) in out {
                    let Some(&ti) = self.index.get(target) else {
                        continue;
                    };
                    let tentative = self.dist[idx].saturating_add(*weight);
                    if tentative < self.dist[ti] {
                        self.dist[ti] = tentative;
                        self.open.push(NodeRef {
                            idx: ti,
                            dist: tentative,
                        });
                    }
                }
            }

            self.visited[idx] = true;
        }

        UNREACHABLE
    }
}
