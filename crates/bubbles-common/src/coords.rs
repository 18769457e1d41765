//! Coordinate types for world positions and chunk grid cells.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A position in world space (world units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct WorldPos {
    /// X coordinate in world space
    pub x: f32,
    /// Y coordinate in world space
    pub y: f32,
}

impl WorldPos {
    /// Creates a new world position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another position.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another position.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// Chunk coordinate (identifies one cell of the world's chunk grid).
///
/// Two coordinates with equal `x` and `y` identify the same chunk; equality
/// and hashing are value-based so the type can key the active-chunk map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ChunkCoord {
    /// X coordinate in chunk space
    pub x: i32,
    /// Y coordinate in chunk space
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Derives the chunk coordinate containing a world position.
    ///
    /// Floor division, so positions with negative components land in the
    /// correct negative-index chunks.
    #[must_use]
    pub fn from_world(pos: WorldPos, chunk_size: f32) -> Self {
        Self {
            x: (pos.x / chunk_size).floor() as i32,
            y: (pos.y / chunk_size).floor() as i32,
        }
    }

    /// World position of this chunk's origin (min corner).
    #[must_use]
    pub fn world_origin(self, chunk_size: f32) -> WorldPos {
        WorldPos {
            x: self.x as f32 * chunk_size,
            y: self.y as f32 * chunk_size,
        }
    }

    /// Coordinate offset by the given deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev distance (square-radius metric) to another coordinate.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_world_floor_division() {
        assert_eq!(
            ChunkCoord::from_world(WorldPos::new(0.1, 0.1), 20.0),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::from_world(WorldPos::new(19.9, 0.0), 20.0),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::from_world(WorldPos::new(20.0, 0.0), 20.0),
            ChunkCoord::new(1, 0)
        );
        // Negative positions floor towards negative infinity
        assert_eq!(
            ChunkCoord::from_world(WorldPos::new(-0.1, -20.1), 20.0),
            ChunkCoord::new(-1, -2)
        );
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = ChunkCoord::new(0, 0);
        assert_eq!(a.chebyshev_distance(ChunkCoord::new(3, 1)), 3);
        assert_eq!(a.chebyshev_distance(ChunkCoord::new(-2, -5)), 5);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn test_distance() {
        let a = WorldPos::new(0.0, 0.0);
        let b = WorldPos::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }

    proptest! {
        // Bounds computation and coordinate derivation are inverses at the
        // chunk origin.
        #[test]
        fn origin_round_trips(x in -10_000i32..10_000, y in -10_000i32..10_000) {
            let coord = ChunkCoord::new(x, y);
            let origin = coord.world_origin(100.0);
            prop_assert_eq!(ChunkCoord::from_world(origin, 100.0), coord);
        }
    }
}
