//! Spawn requests, prefab resolution, and the host boundary.
//!
//! Entity instantiation is a host capability: the core only decides what to
//! spawn where, and hands the host a [`SpawnRequest`]. The host mints the
//! [`EntityId`] handles the owning chunk keeps for teardown.

use bubbles_common::{EntityId, PrefabId, WorldPos};
use bubbles_life::MovementPattern;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// What kind of entity a spawn request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnKind {
    /// A swimming creature
    Fish,
    /// A coral decoration
    Coral,
    /// A rock decoration
    Rock,
    /// A plant decoration
    Plant,
}

impl SpawnKind {
    /// Get the display name for this kind.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Fish => "Fish",
            Self::Coral => "Coral",
            Self::Rock => "Rock",
            Self::Plant => "Plant",
        }
    }

    /// The decoration kinds.
    #[must_use]
    pub const fn decorations() -> [Self; 3] {
        [Self::Coral, Self::Rock, Self::Plant]
    }
}

impl std::fmt::Display for SpawnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A request for the host to instantiate one renderable+collidable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    /// What kind of entity this is
    pub kind: SpawnKind,
    /// Which host prefab to instantiate
    pub prefab: PrefabId,
    /// World position
    pub position: WorldPos,
    /// Rotation in degrees
    pub rotation_degrees: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Whether to mirror horizontally
    pub mirror_x: bool,
    /// Resolved species display name (rocks carry none)
    pub species: Option<String>,
}

/// Error returned by a host that could not instantiate a prefab.
#[derive(Debug, Error)]
#[error("host refused to spawn {kind}: {reason}")]
pub struct SpawnRefused {
    /// The kind that failed to spawn
    pub kind: SpawnKind,
    /// Host-provided reason
    pub reason: String,
}

/// The host boundary: something that can instantiate and destroy entities.
///
/// Injected into the grid per call; the core never goes looking for it.
pub trait SpawnHost {
    /// Instantiates an entity and returns its handle.
    fn spawn(&mut self, request: &SpawnRequest) -> Result<EntityId, SpawnRefused>;

    /// Destroys a previously spawned entity.
    fn despawn(&mut self, entity: EntityId);
}

/// How a prefab was matched to a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefabMatch {
    /// Exact (case-insensitive) species name match
    Name,
    /// Matched through the species' movement-pattern category
    Pattern,
    /// Taken from the kind's generic pool; a degraded match
    Fallback,
}

/// A resolved prefab plus how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrefab {
    /// The prefab to instantiate
    pub prefab: PrefabId,
    /// Which rung of the resolution ladder matched
    pub matched_by: PrefabMatch,
}

/// Prefab lookup table for one spawn kind.
///
/// Resolution ladder: exact species name, then movement-pattern category,
/// then the kind's generic fallback pool.
#[derive(Debug, Clone, Default)]
pub struct PrefabTable {
    by_name: HashMap<String, PrefabId>,
    by_pattern: HashMap<MovementPattern, Vec<PrefabId>>,
    fallback: Vec<PrefabId>,
}

impl PrefabTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prefab for an exact species name (case-insensitive).
    pub fn add_named(&mut self, species: &str, prefab: PrefabId) {
        self.by_name.insert(species.to_lowercase(), prefab);
    }

    /// Registers a prefab for a movement-pattern category.
    pub fn add_pattern(&mut self, pattern: MovementPattern, prefab: PrefabId) {
        self.by_pattern.entry(pattern).or_default().push(prefab);
    }

    /// Registers a prefab in the kind's generic pool.
    pub fn add_fallback(&mut self, prefab: PrefabId) {
        self.fallback.push(prefab);
    }

    /// Whether the table holds no prefabs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_pattern.is_empty() && self.fallback.is_empty()
    }

    /// Resolves a prefab for a species.
    ///
    /// `species` is matched by exact case-insensitive name first; `pattern`
    /// selects a category prefab next; the generic pool is last. `None`
    /// means this table cannot represent the species at all.
    #[must_use]
    pub fn resolve(
        &self,
        species: Option<&str>,
        pattern: Option<MovementPattern>,
        rng: &mut fastrand::Rng,
    ) -> Option<ResolvedPrefab> {
        if let Some(name) = species {
            if let Some(&prefab) = self.by_name.get(&name.to_lowercase()) {
                return Some(ResolvedPrefab {
                    prefab,
                    matched_by: PrefabMatch::Name,
                });
            }
        }
        if let Some(pattern) = pattern {
            if let Some(prefabs) = self.by_pattern.get(&pattern) {
                if !prefabs.is_empty() {
                    let prefab = prefabs[rng.usize(..prefabs.len())];
                    return Some(ResolvedPrefab {
                        prefab,
                        matched_by: PrefabMatch::Pattern,
                    });
                }
            }
        }
        if !self.fallback.is_empty() {
            let prefab = self.fallback[rng.usize(..self.fallback.len())];
            return Some(ResolvedPrefab {
                prefab,
                matched_by: PrefabMatch::Fallback,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_match_wins() {
        let mut table = PrefabTable::new();
        table.add_named("Clownfish", PrefabId::new(1));
        table.add_pattern(MovementPattern::Circular, PrefabId::new(2));
        table.add_fallback(PrefabId::new(3));

        let mut rng = fastrand::Rng::with_seed(0);
        let resolved = table
            .resolve(Some("CLOWNFISH"), Some(MovementPattern::Circular), &mut rng)
            .expect("resolvable");
        assert_eq!(resolved.prefab, PrefabId::new(1));
        assert_eq!(resolved.matched_by, PrefabMatch::Name);
    }

    #[test]
    fn test_pattern_category_match() {
        // "Hammerhead Shark" has no exact entry; the keyword table infers
        // Patrol, and the Patrol category must supply the prefab.
        let mut table = PrefabTable::new();
        table.add_named("Clownfish", PrefabId::new(1));
        table.add_pattern(MovementPattern::Patrol, PrefabId::new(10));
        table.add_pattern(MovementPattern::Patrol, PrefabId::new(11));
        table.add_fallback(PrefabId::new(3));

        let mut rng = fastrand::Rng::with_seed(0);
        let pattern = MovementPattern::infer("Hammerhead Shark");
        assert_eq!(pattern, MovementPattern::Patrol);
        let resolved = table
            .resolve(Some("Hammerhead Shark"), Some(pattern), &mut rng)
            .expect("resolvable");
        assert_eq!(resolved.matched_by, PrefabMatch::Pattern);
        assert!(resolved.prefab == PrefabId::new(10) || resolved.prefab == PrefabId::new(11));
    }

    #[test]
    fn test_fallback_is_degraded_match() {
        let mut table = PrefabTable::new();
        table.add_named("Clownfish", PrefabId::new(1));
        table.add_fallback(PrefabId::new(3));

        let mut rng = fastrand::Rng::with_seed(0);
        let resolved = table
            .resolve(Some("Anglerfish"), Some(MovementPattern::Circular), &mut rng)
            .expect("resolvable");
        assert_eq!(resolved.matched_by, PrefabMatch::Fallback);
        assert_eq!(resolved.prefab, PrefabId::new(3));
    }

    #[test]
    fn test_unresolvable_species() {
        let mut table = PrefabTable::new();
        table.add_named("Clownfish", PrefabId::new(1));

        let mut rng = fastrand::Rng::with_seed(0);
        assert!(table
            .resolve(Some("Anglerfish"), Some(MovementPattern::Circular), &mut rng)
            .is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = PrefabTable::new();
        assert!(table.is_empty());
        let mut rng = fastrand::Rng::with_seed(0);
        assert!(table.resolve(None, None, &mut rng).is_none());
    }
}
