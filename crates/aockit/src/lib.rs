//! **aockit** — utilities for programming-puzzle solutions.
//!
//! This crate re-exports the whole *aockit* surface so a puzzle solution
//! only needs one dependency:
//!
//! - lattice coordinates and bounds ([`Coord`], [`AxisRange`]) and puzzle
//!   input helpers ([`input`]) from `aockit-core`;
//! - jagged-grid extent inference and neighbor enumeration from
//!   `aockit-lattice`;
//! - the weighted [`Graph`] with Dijkstra shortest paths from
//!   `aockit-graph`.
//!
//! A typical solution reads a grid with [`input::read`] and
//! [`input::to_lines`], derives moves with [`find_neighbouring_indices_2d`],
//! feeds the resulting edges into a [`Graph`], and queries
//! [`Graph::shortest_path`].

pub use aockit_core::{AxisRange, Coord, Coord2, Coord3, Coord4, input};
pub use aockit_graph::{Graph, UNREACHABLE};
pub use aockit_lattice::{
    LatticeError, find_dimensions_2d, find_dimensions_3d, find_dimensions_4d,
    find_neighbouring_indices, find_neighbouring_indices_2d, find_neighbouring_indices_3d,
    find_neighbouring_indices_4d,
};
