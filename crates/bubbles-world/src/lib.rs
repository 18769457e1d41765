//! # Bubbles World
//!
//! World streaming for Squid Bubbles.
//!
//! This crate handles:
//! - Chunk loading/unloading around the player (`ChunkGrid`)
//! - Smooth per-chunk ocean depth (`DepthField`)
//! - Grid-jittered, spacing-constrained spawn placement
//! - Chunk population with species-tagged spawn requests (`ChunkPopulator`)
//!
//! Entity instantiation stays on the host side of the [`SpawnHost`]
//! boundary; this crate decides what to spawn where and keeps the handles
//! for teardown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chunk;
pub mod config;
pub mod depth;
pub mod grid;
pub mod placement;
pub mod populate;
pub mod spawn;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chunk::*;
    pub use crate::config::*;
    pub use crate::depth::*;
    pub use crate::grid::*;
    pub use crate::placement::*;
    pub use crate::populate::*;
    pub use crate::spawn::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use bubbles_common::{ChunkCoord, EntityId, PrefabId, WorldPos};
    use bubbles_life::{DiscoveryLog, MovementPattern};
    use std::collections::HashMap;

    /// A minimal host: mints handles and tracks live entities.
    struct TestHost {
        live: HashMap<EntityId, SpawnRequest>,
        next_id: u64,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                live: HashMap::new(),
                next_id: 0,
            }
        }
    }

    impl SpawnHost for TestHost {
        fn spawn(&mut self, request: &SpawnRequest) -> Result<EntityId, SpawnRefused> {
            self.next_id += 1;
            let id = EntityId::from_raw(self.next_id);
            self.live.insert(id, request.clone());
            Ok(id)
        }

        fn despawn(&mut self, entity: EntityId) {
            self.live.remove(&entity);
        }
    }

    fn prefabs() -> PrefabSet {
        let mut fish = PrefabTable::new();
        fish.add_named("Clownfish", PrefabId::new(1));
        for pattern in MovementPattern::all() {
            fish.add_pattern(pattern, PrefabId::new(10 + pattern as u32));
        }
        let mut coral = PrefabTable::new();
        coral.add_fallback(PrefabId::new(20));
        let mut rocks = PrefabTable::new();
        rocks.add_fallback(PrefabId::new(30));
        let mut plants = PrefabTable::new();
        plants.add_fallback(PrefabId::new(40));
        PrefabSet {
            fish,
            coral,
            rocks,
            plants,
        }
    }

    #[test]
    fn test_streaming_session_end_to_end() {
        let populator = ChunkPopulator::new(CatalogSet::defaults(), prefabs());
        let mut grid =
            ChunkGrid::new(OceanConfig::with_seed(2024), populator).expect("valid config");
        let mut host = TestHost::new();

        // Swim east across several chunk boundaries.
        for step in 0..40 {
            let pos = WorldPos::new(step as f32 * 30.0, 10.0);
            grid.on_player_moved(pos, &mut host);
        }

        // Live entities are exactly the ones the active chunks own.
        let mut owned = 0;
        for coord in grid.active_coords().collect::<Vec<_>>() {
            let record = grid.record(coord).expect("active chunk has a record");
            owned += record.entity_count();
            for entity in record.entities() {
                assert!(host.live.contains_key(entity), "chunk owns a dead handle");
            }
        }
        assert_eq!(host.live.len(), owned, "no leaked handles after unloads");

        // Every spawned fish carries a species the discovery log can record.
        let catalog = bubbles_life::SpeciesCatalog::default_fish();
        let mut log = DiscoveryLog::new();
        let mut rng = fastrand::Rng::with_seed(1);
        for request in host.live.values() {
            if let Some(name) = request.species.as_deref() {
                if request.kind == SpawnKind::Fish {
                    let entry = catalog.get(name).expect("fish species is cataloged");
                    log.record_encounter(entry, &mut rng);
                }
            }
        }
        assert!(log.count() > 0, "a swim through the reef discovers something");
    }

    #[test]
    fn test_depth_round_trip_with_records() {
        let populator = ChunkPopulator::new(CatalogSet::defaults(), prefabs());
        let config = OceanConfig::default();
        let mut grid = ChunkGrid::new(config.clone(), populator).expect("valid config");
        let mut host = TestHost::new();

        grid.on_player_moved(WorldPos::new(0.0, 0.0), &mut host);

        let field = DepthField::new(&config);
        for coord in grid.active_coords().collect::<Vec<_>>() {
            let record = grid.record(coord).expect("record");
            assert_eq!(record.depth(), field.sample(coord, config.chunk_size));
            assert_eq!(record.bounds().origin, coord.world_origin(config.chunk_size));
            assert_eq!(
                ChunkCoord::from_world(record.bounds().origin, config.chunk_size),
                coord
            );
        }
    }
}
