//! # Bubbles Common
//!
//! Common types and shared abstractions for Squid Bubbles.
//!
//! This crate provides foundational types used across all subsystems:
//! - Coordinate types (world positions, chunk grid cells)
//! - Handle types (`EntityId`, `PrefabId`)
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_chunk_conversion() {
        let pos = WorldPos::new(250.0, -30.0);
        let coord = ChunkCoord::from_world(pos, 100.0);
        assert_eq!(coord, ChunkCoord::new(2, -1));
    }

    #[test]
    fn test_entity_id_generation() {
        let id1 = EntityId::new();
        let id2 = EntityId::new();
        assert_ne!(id1, id2);
    }
}
