//! Per-axis bounds for lattice coordinates.

use std::fmt;

/// Half-open bounds \[`min`, `max`) on a single lattice axis.
///
/// `min` is inclusive and `max` is exclusive, so a grid of extent `w`
/// starting at zero is described by `AxisRange::new(0, w)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: i64,
    pub max: i64,
}

impl AxisRange {
    /// Create bounds from an inclusive minimum and exclusive maximum.
    #[inline]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `v` lies within the half-open range.
    #[inline]
    pub const fn contains(self, v: i64) -> bool {
        self.min <= v && v < self.max
    }

    /// Number of values in the range.
    #[inline]
    pub const fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max - self.min) as usize
        }
    }

    /// Whether the range contains no values.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.min >= self.max
    }
}

impl From<(i64, i64)> for AxisRange {
    #[inline]
    fn from((min, max): (i64, i64)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}
