//! Player-driven chunk streaming.
//!
//! The grid keeps the active-chunk set in lockstep with the player: one
//! coordinate check per tick, and a reconcile pass only when the player
//! crosses a chunk boundary. Reconciliation diffs the desired square
//! neighborhood against the active set, creating and destroying chunks as
//! needed. A failure while creating one chunk never aborts the rest of the
//! pass; the coordinate is simply retried on the next reconcile.

use crate::chunk::{ChunkBounds, ChunkRecord};
use crate::config::{ConfigError, OceanConfig};
use crate::depth::DepthField;
use crate::populate::{ChunkPopulator, PopulateError};
use crate::spawn::SpawnHost;
use bubbles_common::{ChunkCoord, WorldPos};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, warn};

/// World streaming errors.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Creating (populating) one chunk failed
    #[error("failed to create chunk ({x}, {y}): {source}", x = .coord.x, y = .coord.y)]
    ChunkCreation {
        /// The chunk that failed
        coord: ChunkCoord,
        /// What went wrong while populating it
        #[source]
        source: PopulateError,
    },
}

/// Streams chunks around the player and owns their lifecycles.
pub struct ChunkGrid {
    config: OceanConfig,
    depth: DepthField,
    populator: ChunkPopulator,
    active: HashMap<ChunkCoord, ChunkRecord>,
    current_chunk: Option<ChunkCoord>,
}

impl ChunkGrid {
    /// Creates a grid. Fails if the configuration is inconsistent.
    pub fn new(config: OceanConfig, populator: ChunkPopulator) -> Result<Self, ConfigError> {
        config.validate()?;
        let depth = DepthField::new(&config);
        Ok(Self {
            config,
            depth,
            populator,
            active: HashMap::new(),
            current_chunk: None,
        })
    }

    /// The grid's configuration.
    #[must_use]
    pub fn config(&self) -> &OceanConfig {
        &self.config
    }

    /// The chunk the player was last seen in.
    #[must_use]
    pub fn current_chunk(&self) -> Option<ChunkCoord> {
        self.current_chunk
    }

    /// Whether a chunk is currently loaded.
    #[must_use]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.active.contains_key(&coord)
    }

    /// Number of loaded chunks.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.active.len()
    }

    /// The record for a loaded chunk.
    #[must_use]
    pub fn record(&self, coord: ChunkCoord) -> Option<&ChunkRecord> {
        self.active.get(&coord)
    }

    /// Iterates over the loaded chunk coordinates.
    pub fn active_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.active.keys().copied()
    }

    /// Per-tick entry point: tracks the player and reconciles the active
    /// set when they cross into a new chunk.
    ///
    /// The dominant case is the player staying inside their current chunk,
    /// which returns immediately with no side effects.
    pub fn on_player_moved(&mut self, position: WorldPos, host: &mut dyn SpawnHost) {
        let coord = ChunkCoord::from_world(position, self.config.chunk_size);
        if self.current_chunk == Some(coord) {
            return;
        }
        self.current_chunk = Some(coord);
        self.reconcile(coord, host);
    }

    /// Reconciles the active set against the desired neighborhood of
    /// `center`: creates every missing chunk in range, destroys every
    /// loaded chunk out of range.
    pub fn reconcile(&mut self, center: ChunkCoord, host: &mut dyn SpawnHost) {
        let view = self.config.view_distance;
        let mut desired = HashSet::with_capacity(((2 * view + 1) * (2 * view + 1)) as usize);
        for dx in -view..=view {
            for dy in -view..=view {
                desired.insert(center.offset(dx, dy));
            }
        }

        for &coord in &desired {
            if self.active.contains_key(&coord) {
                continue;
            }
            match self.create_chunk(coord, host) {
                Ok(record) => {
                    self.active.insert(coord, record);
                }
                // Isolated: the rest of the pass continues, and the
                // coordinate is retried on the next reconcile.
                Err(error) => warn!("{error}; chunk not loaded this pass"),
            }
        }

        let stale: Vec<ChunkCoord> = self
            .active
            .keys()
            .filter(|coord| !desired.contains(coord))
            .copied()
            .collect();
        for coord in stale {
            self.destroy_chunk(coord, host);
        }
    }

    /// Creates and populates the chunk at `coord`.
    fn create_chunk(
        &self,
        coord: ChunkCoord,
        host: &mut dyn SpawnHost,
    ) -> Result<ChunkRecord, WorldError> {
        let bounds = ChunkBounds::from_coord(coord, self.config.chunk_size);
        let depth = self.depth.sample(coord, self.config.chunk_size);
        let seed = chunk_seed(self.config.seed, coord);

        let entities = self
            .populator
            .populate(bounds, seed, &self.config, host)
            .map_err(|source| WorldError::ChunkCreation { coord, source })?;

        debug!(
            "created chunk ({}, {}) depth {depth:.1} with {} entities",
            coord.x,
            coord.y,
            entities.len()
        );
        Ok(ChunkRecord::new(coord, bounds, depth, entities))
    }

    /// Destroys the chunk at `coord`, releasing every entity handle it
    /// owns. Destroying an absent coordinate is a no-op.
    pub fn destroy_chunk(&mut self, coord: ChunkCoord, host: &mut dyn SpawnHost) {
        if let Some(mut record) = self.active.remove(&coord) {
            for entity in record.take_entities() {
                host.despawn(entity);
            }
        }
    }
}

/// Deterministic per-chunk seed from the world seed and coordinate.
fn chunk_seed(world_seed: u64, coord: ChunkCoord) -> u64 {
    world_seed
        .wrapping_mul(0x0005_DEEC_E66D)
        .wrapping_add((coord.x as u64).wrapping_mul(0x0123_4567))
        .wrapping_add((coord.y as u64).wrapping_mul(0x0765_4321))
}
