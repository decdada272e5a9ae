//! Neighbor enumeration on N-dimensional lattices.

use std::fmt;

use aockit_core::{AxisRange, Coord, Coord2, Coord3, Coord4};

/// Enumerate the neighbouring coordinates of `coord`.
///
/// Every non-zero offset in `{-1, 0, 1}^N` is a candidate. With
/// `include_diagonals` the full Moore neighborhood is admitted (`3^N - 1`
/// offsets); without it only offsets moving along exactly one axis are
/// admitted (the von Neumann neighborhood, `2*N` offsets).
///
/// Bounds are all-or-none: supply an [`AxisRange`] for every axis to clip
/// candidates (out-of-bounds neighbours are silently dropped), or `None`
/// for every axis to admit all candidates unconditionally — no implicit
/// clipping to non-negative values is performed. Supplying bounds for only
/// some axes fails with [`LatticeError::PartialBounds`] before any
/// enumeration.
///
/// Output order is deterministic: nested iteration axis 0 (outer) to axis
/// N−1 (inner), each axis running over −1, 0, 1.
pub fn find_neighbouring_indices<const N: usize>(
    coord: Coord<N>,
    bounds: [Option<AxisRange>; N],
    include_diagonals: bool,
) -> Result<Vec<Coord<N>>, LatticeError> {
    let given = bounds.iter().filter(|b| b.is_some()).count();
    if given != 0 && given != N {
        return Err(LatticeError::PartialBounds { given, axes: N });
    }

    let mut neighbours = Vec::with_capacity(3usize.pow(N as u32) - 1);
    for code in 0..3usize.pow(N as u32) {
        // Decode `code` as N base-3 digits with axis 0 most significant, so
        // enumeration runs axis 0 outer to axis N-1 inner over -1, 0, 1.
        let mut offset = [0i64; N];
        let mut rem = code;
        for axis in (0..N).rev() {
            offset[axis] = (rem % 3) as i64 - 1;
            rem /= 3;
        }

        let moved_axes = offset.iter().filter(|&&d| d != 0).count();
        if moved_axes == 0 {
            continue;
        }
        if !include_diagonals && moved_axes > 1 {
            continue;
        }

        let candidate = coord + Coord(offset);
        if bounds
            .iter()
            .zip(candidate.0)
            .all(|(b, v)| b.is_none_or(|r| r.contains(v)))
        {
            neighbours.push(candidate);
        }
    }
    Ok(neighbours)
}

/// 2D convenience wrapper over [`find_neighbouring_indices`].
pub fn find_neighbouring_indices_2d(
    i: i64,
    j: i64,
    bounds_i: Option<AxisRange>,
    bounds_j: Option<AxisRange>,
    include_diagonals: bool,
) -> Result<Vec<Coord2>, LatticeError> {
    find_neighbouring_indices(Coord([i, j]), [bounds_i, bounds_j], include_diagonals)
}

/// 3D convenience wrapper over [`find_neighbouring_indices`].
pub fn find_neighbouring_indices_3d(
    i: i64,
    j: i64,
    k: i64,
    bounds_i: Option<AxisRange>,
    bounds_j: Option<AxisRange>,
    bounds_k: Option<AxisRange>,
    include_diagonals: bool,
) -> Result<Vec<Coord3>, LatticeError> {
    find_neighbouring_indices(
        Coord([i, j, k]),
        [bounds_i, bounds_j, bounds_k],
        include_diagonals,
    )
}

/// 4D convenience wrapper over [`find_neighbouring_indices`].
#[allow(clippy::too_many_arguments)]
pub fn find_neighbouring_indices_4d(
    i: i64,
    j: i64,
    k: i64,
    l: i64,
    bounds_i: Option<AxisRange>,
    bounds_j: Option<AxisRange>,
    bounds_k: Option<AxisRange>,
    bounds_l: Option<AxisRange>,
    include_diagonals: bool,
) -> Result<Vec<Coord4>, LatticeError> {
    find_neighbouring_indices(
        Coord([i, j, k, l]),
        [bounds_i, bounds_j, bounds_k, bounds_l],
        include_diagonals,
    )
}

/// Errors raised by lattice operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Bounds were supplied for only some axes; they are all-or-none.
    PartialBounds { given: usize, axes: usize },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialBounds { given, axes } => write!(
                f,
                "bounds must be specified for all {axes} axes or none (got {given})"
            ),
        }
    }
}

impl std::error::Error for LatticeError {}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Candidate counts
    // -----------------------------------------------------------------------

    #[test]
    fn unbounded_candidate_counts() {
        let n2 = find_neighbouring_indices(Coord2::ZERO, [None; 2], true).unwrap();
        assert_eq!(n2.len(), 8);
        let n2 = find_neighbouring_indices(Coord2::ZERO, [None; 2], false).unwrap();
        assert_eq!(n2.len(), 4);

        let n3 = find_neighbouring_indices(Coord3::ZERO, [None; 3], true).unwrap();
        assert_eq!(n3.len(), 26);
        let n3 = find_neighbouring_indices(Coord3::ZERO, [None; 3], false).unwrap();
        assert_eq!(n3.len(), 6);

        let n4 = find_neighbouring_indices(Coord4::ZERO, [None; 4], true).unwrap();
        assert_eq!(n4.len(), 80);
        let n4 = find_neighbouring_indices(Coord4::ZERO, [None; 4], false).unwrap();
        assert_eq!(n4.len(), 8);
    }

    #[test]
    fn orthogonal_2d_neighbours_of_origin() {
        let got = find_neighbouring_indices_2d(0, 0, None, None, false).unwrap();
        // Axis 0 outer, axis 1 inner, each over -1, 0, 1.
        assert_eq!(
            got,
            vec![
                Coord([-1, 0]),
                Coord([0, -1]),
                Coord([0, 1]),
                Coord([1, 0]),
            ]
        );
    }

    #[test]
    fn moore_2d_enumeration_order() {
        let got = find_neighbouring_indices_2d(5, 5, None, None, true).unwrap();
        assert_eq!(got[0], Coord([4, 4]));
        assert_eq!(got[1], Coord([4, 5]));
        assert_eq!(got[2], Coord([4, 6]));
        assert_eq!(got[7], Coord([6, 6]));
    }

    #[test]
    fn orthogonal_neighbours_move_along_one_axis() {
        let origin = Coord3::ZERO;
        for n in find_neighbouring_indices(origin, [None; 3], false).unwrap() {
            let moved = n.0.iter().filter(|&&v| v != 0).count();
            assert_eq!(moved, 1, "neighbour {n} moves along {moved} axes");
        }
    }

    // -----------------------------------------------------------------------
    // Bounds clipping
    // -----------------------------------------------------------------------

    #[test]
    fn bounds_clip_every_axis() {
        let bounds = [Some(AxisRange::new(0, 10)), Some(AxisRange::new(0, 10))];
        let got = find_neighbouring_indices(Coord([0, 0]), bounds, true).unwrap();
        assert_eq!(got.len(), 3);
        for n in &got {
            for (axis, b) in bounds.iter().enumerate() {
                assert!(b.unwrap().contains(n.axis(axis)), "{n} escapes bounds");
            }
        }
    }

    #[test]
    fn corner_cell_orthogonal() {
        let b = Some(AxisRange::new(0, 3));
        let got = find_neighbouring_indices_2d(2, 2, b, b, false).unwrap();
        assert_eq!(got, vec![Coord([1, 2]), Coord([2, 1])]);
    }

    #[test]
    fn max_exclusive_upper_bound() {
        // Neighbour value 3 is rejected by bounds [0, 3).
        let b = Some(AxisRange::new(0, 3));
        let got = find_neighbouring_indices_2d(2, 1, b, b, false).unwrap();
        assert!(!got.contains(&Coord([3, 1])));
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn unbounded_enumeration_goes_negative() {
        let got = find_neighbouring_indices_2d(0, 0, None, None, true).unwrap();
        assert!(got.contains(&Coord([-1, -1])));
    }

    #[test]
    fn bounded_3d_interior_is_unclipped() {
        let b = Some(AxisRange::new(0, 5));
        let got = find_neighbouring_indices_3d(2, 2, 2, b, b, b, true).unwrap();
        assert_eq!(got.len(), 26);
    }

    // -----------------------------------------------------------------------
    // Partial bounds rejection
    // -----------------------------------------------------------------------

    #[test]
    fn partial_bounds_fail_for_every_dimension() {
        let b = Some(AxisRange::new(0, 4));
        assert_eq!(
            find_neighbouring_indices_2d(1, 1, b, None, false),
            Err(LatticeError::PartialBounds { given: 1, axes: 2 })
        );
        assert_eq!(
            find_neighbouring_indices_3d(1, 1, 1, b, b, None, false),
            Err(LatticeError::PartialBounds { given: 2, axes: 3 })
        );
        assert_eq!(
            find_neighbouring_indices_4d(1, 1, 1, 1, None, b, None, None, true),
            Err(LatticeError::PartialBounds { given: 1, axes: 4 })
        );
    }

    #[test]
    fn partial_bounds_error_message() {
        let err = LatticeError::PartialBounds { given: 1, axes: 2 };
        assert_eq!(
            err.to_string(),
            "bounds must be specified for all 2 axes or none (got 1)"
        );
    }
}
