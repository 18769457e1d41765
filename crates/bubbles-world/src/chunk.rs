//! Chunk bounds and lifecycle records.

use bubbles_common::{ChunkCoord, EntityId, WorldPos};
use serde::{Deserialize, Serialize};

/// World-space bounds of one chunk (a square, min corner + side length).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkBounds {
    /// Min corner of the chunk
    pub origin: WorldPos,
    /// Side length in world units
    pub size: f32,
}

impl ChunkBounds {
    /// Bounds of the chunk at the given grid coordinate.
    #[must_use]
    pub fn from_coord(coord: ChunkCoord, chunk_size: f32) -> Self {
        Self {
            origin: coord.world_origin(chunk_size),
            size: chunk_size,
        }
    }

    /// Whether a position lies inside the bounds (max edge inclusive).
    #[must_use]
    pub fn contains(&self, pos: WorldPos) -> bool {
        pos.x >= self.origin.x
            && pos.x <= self.origin.x + self.size
            && pos.y >= self.origin.y
            && pos.y <= self.origin.y + self.size
    }

    /// Center of the chunk.
    #[must_use]
    pub fn center(&self) -> WorldPos {
        WorldPos::new(
            self.origin.x + self.size * 0.5,
            self.origin.y + self.size * 0.5,
        )
    }
}

/// Owns one loaded chunk's lifecycle: its coordinate, bounds, floor depth,
/// and every entity handle spawned into it (kept for teardown).
///
/// Records are created when a coordinate enters the active set and destroyed
/// when it leaves; only the chunk grid mutates them.
#[derive(Debug)]
pub struct ChunkRecord {
    coord: ChunkCoord,
    bounds: ChunkBounds,
    depth: f32,
    entities: Vec<EntityId>,
}

impl ChunkRecord {
    /// Creates a record for a freshly populated chunk.
    #[must_use]
    pub fn new(coord: ChunkCoord, bounds: ChunkBounds, depth: f32, entities: Vec<EntityId>) -> Self {
        Self {
            coord,
            bounds,
            depth,
            entities,
        }
    }

    /// The chunk's grid coordinate.
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// The chunk's world bounds.
    #[must_use]
    pub const fn bounds(&self) -> ChunkBounds {
        self.bounds
    }

    /// Ocean floor depth for this chunk.
    #[must_use]
    pub const fn depth(&self) -> f32 {
        self.depth
    }

    /// Entity handles owned by this chunk.
    #[must_use]
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Number of entities owned by this chunk.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Takes ownership of the entity handles for teardown.
    pub fn take_entities(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.entities)
    }
}
