//! **aockit-core** — foundational types for puzzle utilities.
//!
//! This crate provides the value types shared across the *aockit*
//! workspace: N-dimensional lattice coordinates, per-axis bounds, and
//! small helpers for turning raw puzzle input text into usable data.

pub mod bounds;
pub mod coord;
pub mod input;

pub use bounds::AxisRange;
pub use coord::{Coord, Coord2, Coord3, Coord4};
