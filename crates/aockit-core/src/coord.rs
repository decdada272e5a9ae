//! N-dimensional integer lattice coordinates.

use std::fmt;
use std::ops::{Add, Sub};

/// A point on an N-dimensional integer lattice.
///
/// Equality and hashing are structural (component-wise), so coordinates can
/// be used directly as graph keys or set members. `Coord` is `Copy` and is
/// never mutated in place; arithmetic returns new values.
///
/// The dimension count is a const parameter so that dimension-generic code
/// (neighbor enumeration in particular) is written once; [`Coord2`],
/// [`Coord3`] and [`Coord4`] are the aliases used in practice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord<const N: usize>(pub [i64; N]);

/// A 2D lattice coordinate.
pub type Coord2 = Coord<2>;
/// A 3D lattice coordinate.
pub type Coord3 = Coord<3>;
/// A 4D lattice coordinate.
pub type Coord4 = Coord<4>;

impl<const N: usize> Coord<N> {
    /// The origin.
    pub const ZERO: Self = Self([0; N]);

    /// Create a coordinate from its components.
    #[inline]
    pub const fn new(components: [i64; N]) -> Self {
        Self(components)
    }

    /// The component on the given axis.
    #[inline]
    pub const fn axis(self, axis: usize) -> i64 {
        self.0[axis]
    }

    /// Return a coordinate shifted by the given per-axis deltas.
    #[inline]
    pub fn shift(self, deltas: [i64; N]) -> Self {
        self + Self(deltas)
    }
}

// --- trait impls for Coord ---

impl<const N: usize> Default for Coord<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> fmt::Display for Coord<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> Add for Coord<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        Self(out)
    }
}

impl<const N: usize> Sub for Coord<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o -= r;
        }
        Self(out)
    }
}

impl<const N: usize> From<[i64; N]> for Coord<N> {
    #[inline]
    fn from(components: [i64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<Coord<N>> for [i64; N] {
    #[inline]
    fn from(c: Coord<N>) -> Self {
        c.0
    }
}

impl From<(i64, i64)> for Coord2 {
    #[inline]
    fn from((i, j): (i64, i64)) -> Self {
        Self([i, j])
    }
}

impl From<(i64, i64, i64)> for Coord3 {
    #[inline]
    fn from((i, j, k): (i64, i64, i64)) -> Self {
        Self([i, j, k])
    }
}

impl From<(i64, i64, i64, i64)> for Coord4 {
    #[inline]
    fn from((i, j, k, l): (i64, i64, i64, i64)) -> Self {
        Self([i, j, k, l])
    }
}

// Manual serde impls: a coordinate serializes as a fixed-length sequence of
// its components, for any const dimension count.

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Coord<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(N)?;
        for v in &self.0 {
            tup.serialize_element(v)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Coord<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CoordVisitor<const N: usize>;

        impl<'de, const N: usize> serde::de::Visitor<'de> for CoordVisitor<N> {
            type Value = Coord<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} integers")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut components = [0i64; N];
                for (i, slot) in components.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Coord(components))
            }
        }

        deserializer.deserialize_tuple(N, CoordVisitor::<N>)
    }
}
