//! # Chunk Coordinate Module
//!
//! The integer `(x, z)` pair identifying one chunk column of the world grid.
//! Coordinates are plain values with component-wise arithmetic; they key the
//! active set and index the world's chunk array.

use std::fmt;
use std::ops::{Add, Sub};

/// Identifies a chunk column in the world grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoordinate {
    /// The column's X index in chunk units.
    pub x: i32,
    /// The column's Z index in chunk units.
    pub z: i32,
}

impl ChunkCoordinate {
    /// The origin coordinate `(0, 0)`.
    pub const ZERO: ChunkCoordinate = ChunkCoordinate::of(0, 0);

    /// Creates a coordinate from its two components.
    pub const fn of(x: i32, z: i32) -> Self {
        ChunkCoordinate { x, z }
    }
}

impl fmt::Display for ChunkCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

impl Add for ChunkCoordinate {
    type Output = ChunkCoordinate;

    fn add(self, other: ChunkCoordinate) -> ChunkCoordinate {
        ChunkCoordinate::of(self.x + other.x, self.z + other.z)
    }
}

impl Sub for ChunkCoordinate {
    type Output = ChunkCoordinate;

    fn sub(self, other: ChunkCoordinate) -> ChunkCoordinate {
        ChunkCoordinate::of(self.x - other.x, self.z - other.z)
    }
}

impl Add<i32> for ChunkCoordinate {
    type Output = ChunkCoordinate;

    fn add(self, scalar: i32) -> ChunkCoordinate {
        ChunkCoordinate::of(self.x + scalar, self.z + scalar)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = ChunkCoordinate::of(50, 50);
        let b = ChunkCoordinate::of(1, -2);

        assert_eq!(a + b, ChunkCoordinate::of(51, 48));
        assert_eq!(a - b, ChunkCoordinate::of(49, 52));
        assert_eq!(a + 3, ChunkCoordinate::of(53, 53));
    }

    #[test]
    fn equality_requires_both_components() {
        assert_eq!(ChunkCoordinate::of(1, 2), ChunkCoordinate::of(1, 2));
        assert_ne!(ChunkCoordinate::of(1, 2), ChunkCoordinate::of(2, 1));
        assert_ne!(ChunkCoordinate::of(1, 2), ChunkCoordinate::of(1, 3));
    }

    #[test]
    fn coordinates_deduplicate_in_sets() {
        let mut set = HashSet::new();
        set.insert(ChunkCoordinate::of(4, 7));
        set.insert(ChunkCoordinate::of(4, 7));
        set.insert(ChunkCoordinate::of(7, 4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn displays_as_comma_separated_pair() {
        assert_eq!(ChunkCoordinate::of(12, -3).to_string(), "12,-3");
    }
}
