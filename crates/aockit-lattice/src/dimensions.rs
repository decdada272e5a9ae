//! Extent inference for jagged nested grids.

/// Infer the extents of a (possibly ragged) 2D grid.
///
/// Axis 0 is the outer length; axis 1 is the maximum row length, so the
/// returned extents are the tightest upper bound covering every element.
/// A grid that is empty at some depth yields extent 0 there.
pub fn find_dimensions_2d<T>(grid: &[Vec<T>]) -> (usize, usize) {
    (
        grid.len(),
        grid.iter().map(Vec::len).max().unwrap_or(0),
    )
}

/// Infer the extents of a (possibly ragged) 3D grid.
///
/// See [`find_dimensions_2d`]; every inner depth reports the maximum
/// length observed across all sequences at that depth.
pub fn find_dimensions_3d<T>(grid: &[Vec<Vec<T>>]) -> (usize, usize, usize) {
    (
        grid.len(),
        grid.iter().map(Vec::len).max().unwrap_or(0),
        grid.iter().flatten().map(Vec::len).max().unwrap_or(0),
    )
}

/// Infer the extents of a (possibly ragged) 4D grid.
///
/// See [`find_dimensions_2d`]; every inner depth reports the maximum
/// length observed across all sequences at that depth.
pub fn find_dimensions_4d<T>(grid: &[Vec<Vec<Vec<T>>>]) -> (usize, usize, usize, usize) {
    (
        grid.len(),
        grid.iter().map(Vec::len).max().unwrap_or(0),
        grid.iter().flatten().map(Vec::len).max().unwrap_or(0),
        grid.iter().flatten().flatten().map(Vec::len).max().unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_2d_uses_max_row_length() {
        let grid = vec![vec![1, 2, 3], vec![4, 5]];
        assert_eq!(find_dimensions_2d(&grid), (2, 3));
    }

    #[test]
    fn rectangular_2d() {
        let grid = vec![vec![0u8; 7]; 4];
        assert_eq!(find_dimensions_2d(&grid), (4, 7));
    }

    #[test]
    fn ragged_3d_scans_every_plane() {
        // The longest row sits in the second plane.
        let grid = vec![
            vec![vec![1], vec![2, 3]],
            vec![vec![4, 5, 6, 7]],
            vec![vec![8], vec![9], vec![10]],
        ];
        assert_eq!(find_dimensions_3d(&grid), (3, 3, 4));
    }

    #[test]
    fn ragged_4d_scans_every_cell() {
        let grid = vec![
            vec![vec![vec![1, 2], vec![3]]],
            vec![vec![vec![4]], vec![vec![5, 6, 7]]],
        ];
        assert_eq!(find_dimensions_4d(&grid), (2, 2, 2, 3));
    }

    #[test]
    fn empty_levels_yield_zero_extents() {
        let grid: Vec<Vec<i32>> = Vec::new();
        assert_eq!(find_dimensions_2d(&grid), (0, 0));
        let grid = vec![Vec::<i32>::new(), Vec::new()];
        assert_eq!(find_dimensions_2d(&grid), (2, 0));
    }
}
