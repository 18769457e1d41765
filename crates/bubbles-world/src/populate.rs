//! Chunk population: randomized, spatially separated marine life and
//! decoration layouts.
//!
//! Population is a bounded synchronous computation driven by a per-chunk
//! deterministic RNG: the same world seed and chunk coordinate always
//! produce the same layout. Missing reference data degrades to "fewer
//! things spawned"; only a host refusal aborts a chunk, and then every
//! handle spawned so far is released before the error is reported.

use crate::chunk::ChunkBounds;
use crate::config::OceanConfig;
use crate::placement::PlacementSampler;
use crate::spawn::{PrefabMatch, PrefabTable, SpawnHost, SpawnKind, SpawnRefused, SpawnRequest};
use bubbles_common::EntityId;
use bubbles_life::{CoralCatalog, PlantCatalog, PresetTable, SpeciesCatalog};
use thiserror::Error;
use tracing::warn;

/// Random scale variation applied to fish.
const FISH_SCALE_VARIATION: (f32, f32) = (0.8, 1.2);
/// Random scale variation applied to decorations.
const DECORATION_SCALE_VARIATION: (f32, f32) = (0.8, 1.5);

/// Errors surfaced during chunk population.
#[derive(Debug, Error)]
pub enum PopulateError {
    /// A spawn kind has no usable catalog or prefab table; the kind is
    /// skipped (never fatal to the chunk).
    #[error("no catalog or prefabs for {kind}")]
    MissingData {
        /// The affected spawn kind
        kind: SpawnKind,
    },
    /// A species resolved to no prefab at all; that single placement is
    /// skipped (never fatal to the chunk).
    #[error("species {species} has no {kind} prefab")]
    NoPrefab {
        /// The affected spawn kind
        kind: SpawnKind,
        /// The species that could not be represented
        species: String,
    },
    /// The host refused to instantiate an entity; fatal to this chunk.
    #[error(transparent)]
    Host(#[from] SpawnRefused),
}

/// The read-only reference data the populator draws species from.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    /// Swimming species
    pub fish: SpeciesCatalog,
    /// Coral species
    pub coral: CoralCatalog,
    /// Ocean plant species
    pub plants: PlantCatalog,
    /// Per-species tuning presets
    pub presets: PresetTable,
}

impl CatalogSet {
    /// The built-in reference data.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            fish: SpeciesCatalog::default_fish(),
            coral: CoralCatalog::default_reef(),
            plants: PlantCatalog::default_meadow(),
            presets: PresetTable::defaults(),
        }
    }
}

/// Prefab tables per spawn kind, supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct PrefabSet {
    /// Fish prefabs
    pub fish: PrefabTable,
    /// Coral prefabs
    pub coral: PrefabTable,
    /// Rock prefabs
    pub rocks: PrefabTable,
    /// Plant prefabs
    pub plants: PrefabTable,
}

/// Populates a chunk with fish and decorations.
#[derive(Debug, Clone)]
pub struct ChunkPopulator {
    catalogs: CatalogSet,
    prefabs: PrefabSet,
}

impl ChunkPopulator {
    /// Creates a populator over the given reference data.
    #[must_use]
    pub fn new(catalogs: CatalogSet, prefabs: PrefabSet) -> Self {
        Self { catalogs, prefabs }
    }

    /// The populator's reference data.
    #[must_use]
    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Populates one chunk, returning the spawned entity handles.
    ///
    /// Deterministic for a given `chunk_seed`. On a host refusal every
    /// handle spawned so far is released and the error is returned; the
    /// caller owns per-chunk failure isolation.
    pub fn populate(
        &self,
        bounds: ChunkBounds,
        chunk_seed: u64,
        config: &OceanConfig,
        host: &mut dyn SpawnHost,
    ) -> Result<Vec<EntityId>, PopulateError> {
        let mut rng = fastrand::Rng::with_seed(chunk_seed);
        let mut sampler = PlacementSampler::new(bounds, config.min_spawn_distance);
        let mut spawned = Vec::new();

        let fish_count = rng.u32(config.min_fish_per_chunk..=config.max_fish_per_chunk);
        let decoration_count =
            rng.u32(config.min_decorations_per_chunk..=config.max_decorations_per_chunk);

        let result = self
            .place_fish(fish_count, &mut sampler, &mut rng, host, &mut spawned)
            .and_then(|()| {
                self.place_decorations(
                    decoration_count,
                    &mut sampler,
                    &mut rng,
                    host,
                    &mut spawned,
                )
            });

        match result {
            Ok(()) => Ok(spawned),
            Err(error) => {
                // Never leak handles from a half-populated chunk.
                for entity in spawned.drain(..) {
                    host.despawn(entity);
                }
                Err(error)
            }
        }
    }

    fn place_fish(
        &self,
        count: u32,
        sampler: &mut PlacementSampler,
        rng: &mut fastrand::Rng,
        host: &mut dyn SpawnHost,
        spawned: &mut Vec<EntityId>,
    ) -> Result<(), PopulateError> {
        if self.catalogs.fish.is_empty() || self.prefabs.fish.is_empty() {
            let error = PopulateError::MissingData {
                kind: SpawnKind::Fish,
            };
            warn!("{error}, skipping spawn kind");
            return Ok(());
        }

        for _ in 0..count {
            let Some(entry) = self.catalogs.fish.random(rng) else {
                break;
            };
            let pattern = self.catalogs.presets.pattern_for(&entry.name);
            let Some(resolved) = self.prefabs.fish.resolve(Some(&entry.name), Some(pattern), rng)
            else {
                let error = PopulateError::NoPrefab {
                    kind: SpawnKind::Fish,
                    species: entry.name.clone(),
                };
                warn!("{error}, skipping placement");
                continue;
            };
            if resolved.matched_by == PrefabMatch::Fallback {
                warn!(
                    "no prefab matched {} by name or pattern, using a generic fish",
                    entry.name
                );
            }

            let base_scale = self.catalogs.presets.get(&entry.name).map_or(1.0, |p| p.scale);
            let request = SpawnRequest {
                kind: SpawnKind::Fish,
                prefab: resolved.prefab,
                position: sampler.place(rng),
                rotation_degrees: 0.0,
                scale: base_scale * scale_variation(rng, FISH_SCALE_VARIATION),
                mirror_x: rng.bool(),
                species: Some(entry.name.clone()),
            };
            spawned.push(host.spawn(&request)?);
        }
        Ok(())
    }

    fn place_decorations(
        &self,
        count: u32,
        sampler: &mut PlacementSampler,
        rng: &mut fastrand::Rng,
        host: &mut dyn SpawnHost,
        spawned: &mut Vec<EntityId>,
    ) -> Result<(), PopulateError> {
        let mut kinds = Vec::new();
        for kind in SpawnKind::decorations() {
            if self.decoration_available(kind) {
                kinds.push(kind);
            } else {
                let error = PopulateError::MissingData { kind };
                warn!("{error}, skipping spawn kind");
            }
        }
        if kinds.is_empty() {
            return Ok(());
        }

        for _ in 0..count {
            let kind = kinds[rng.usize(..kinds.len())];
            self.place_one_decoration(kind, sampler, rng, host, spawned)?;
        }
        Ok(())
    }

    fn place_one_decoration(
        &self,
        kind: SpawnKind,
        sampler: &mut PlacementSampler,
        rng: &mut fastrand::Rng,
        host: &mut dyn SpawnHost,
        spawned: &mut Vec<EntityId>,
    ) -> Result<(), PopulateError> {
        let (species, table) = match kind {
            SpawnKind::Coral => (
                self.catalogs.coral.random(rng).map(|c| c.name.clone()),
                &self.prefabs.coral,
            ),
            SpawnKind::Plant => (
                self.catalogs.plants.random(rng).map(|p| p.name.clone()),
                &self.prefabs.plants,
            ),
            SpawnKind::Rock => (None, &self.prefabs.rocks),
            SpawnKind::Fish => return Ok(()),
        };

        let Some(resolved) = table.resolve(species.as_deref(), None, rng) else {
            let error = PopulateError::NoPrefab {
                kind,
                species: species.unwrap_or_else(|| "<none>".to_owned()),
            };
            warn!("{error}, skipping placement");
            return Ok(());
        };
        if species.is_some() && resolved.matched_by == PrefabMatch::Fallback {
            warn!(
                "no prefab matched {} by name, using a generic {kind}",
                species.as_deref().unwrap_or_default()
            );
        }

        // Rocks get a random facing; coral and plants grow upright.
        let rotation_degrees = if kind == SpawnKind::Rock {
            rng.f32() * 360.0
        } else {
            0.0
        };

        let request = SpawnRequest {
            kind,
            prefab: resolved.prefab,
            position: sampler.place(rng),
            rotation_degrees,
            scale: scale_variation(rng, DECORATION_SCALE_VARIATION),
            mirror_x: false,
            species,
        };
        spawned.push(host.spawn(&request)?);
        Ok(())
    }

    fn decoration_available(&self, kind: SpawnKind) -> bool {
        match kind {
            SpawnKind::Coral => !self.catalogs.coral.is_empty() && !self.prefabs.coral.is_empty(),
            SpawnKind::Plant => !self.catalogs.plants.is_empty() && !self.prefabs.plants.is_empty(),
            SpawnKind::Rock => !self.prefabs.rocks.is_empty(),
            SpawnKind::Fish => false,
        }
    }
}

/// Uniform random scale factor within the given inclusive range.
fn scale_variation(rng: &mut fastrand::Rng, (min, max): (f32, f32)) -> f32 {
    min + rng.f32() * (max - min)
}
