//! Weighted directed graphs with single-source shortest-path search.
//!
//! A [`Graph`] is built up by repeated [`Graph::add_edge`] calls over any
//! hashable key type (lattice coordinates in practice) and queried with
//! [`Graph::shortest_path`] for a single target distance or
//! [`Graph::shortest_path_map`] for the full distance map. Unreachable
//! vertices report [`UNREACHABLE`].

mod dijkstra;
mod graph;

pub use graph::{Graph, UNREACHABLE};
