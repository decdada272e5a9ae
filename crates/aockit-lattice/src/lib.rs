//! Lattice utilities for grid-shaped puzzle inputs.
//!
//! This crate provides two families of pure functions over integer lattices:
//!
//! - **Extent inference** ([`find_dimensions_2d`], [`find_dimensions_3d`],
//!   [`find_dimensions_4d`]) — compute the bounding extents of a jagged
//!   nested grid, using the *maximum* length at every inner depth so the
//!   result covers every element of a ragged grid.
//! - **Neighbor enumeration** ([`find_neighbouring_indices`] and its
//!   [`find_neighbouring_indices_2d`] / `_3d` / `_4d` wrappers) — enumerate
//!   the Moore (diagonal) or von Neumann (orthogonal) neighborhood of a
//!   coordinate, optionally clipped to per-axis bounds.
//!
//! All functions are stateless and freely callable from multiple threads.

mod dimensions;
mod neighbors;

pub use dimensions::{find_dimensions_2d, find_dimensions_3d, find_dimensions_4d};
pub use neighbors::{
    LatticeError, find_neighbouring_indices, find_neighbouring_indices_2d,
    find_neighbouring_indices_3d, find_neighbouring_indices_4d,
};
