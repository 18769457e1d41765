//! Discovery log: which species the player has met and which facts they
//! have learned.
//!
//! Owned by the host and passed explicitly into whatever needs it; there is
//! no globally reachable instance.

use crate::species::SpeciesEntry;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Record of one discovered species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredSpecies {
    /// Display name
    pub name: String,
    /// Latin name
    pub scientific_name: String,
    /// Habitat string
    pub habitat: String,
    /// Indices of facts already shown to the player
    pub learned_facts: HashSet<usize>,
    /// Total facts available for this species
    pub total_facts: usize,
}

impl DiscoveredSpecies {
    /// Share of this species' facts the player has seen, 0-100.
    #[must_use]
    pub fn completion_percentage(&self) -> f32 {
        if self.total_facts == 0 {
            return 0.0;
        }
        self.learned_facts.len() as f32 / self.total_facts as f32 * 100.0
    }

    /// Whether every fact has been learned.
    #[must_use]
    pub fn is_fully_explored(&self) -> bool {
        self.learned_facts.len() == self.total_facts
    }
}

/// Outcome of one player/creature encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    /// True the first time this species is ever met
    pub new_discovery: bool,
    /// The fact chosen for this encounter (index and text), if any exist
    pub fact: Option<(usize, String)>,
}

/// Tracks every species the player has discovered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryLog {
    discoveries: HashMap<String, DiscoveredSpecies>,
}

impl DiscoveryLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            discoveries: HashMap::new(),
        }
    }

    /// Records an encounter with a species.
    ///
    /// The first encounter registers the species as discovered; every
    /// encounter picks a uniformly random fact and marks it learned.
    pub fn record_encounter(
        &mut self,
        entry: &SpeciesEntry,
        rng: &mut fastrand::Rng,
    ) -> Encounter {
        let new_discovery = !self.discoveries.contains_key(&entry.name);
        if new_discovery {
            info!("New species discovered: {}", entry.name);
            self.discoveries.insert(
                entry.name.clone(),
                DiscoveredSpecies {
                    name: entry.name.clone(),
                    scientific_name: entry.scientific_name.clone(),
                    habitat: entry.habitat.clone(),
                    learned_facts: HashSet::new(),
                    total_facts: entry.facts.len(),
                },
            );
        }

        let fact = if entry.facts.is_empty() {
            None
        } else {
            let index = rng.usize(..entry.facts.len());
            if let Some(record) = self.discoveries.get_mut(&entry.name) {
                record.learned_facts.insert(index);
            }
            Some((index, entry.facts[index].clone()))
        };

        Encounter { new_discovery, fact }
    }

    /// Whether a species has been discovered.
    #[must_use]
    pub fn is_discovered(&self, name: &str) -> bool {
        self.discoveries.contains_key(name)
    }

    /// Record for one discovered species.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DiscoveredSpecies> {
        self.discoveries.get(name)
    }

    /// Number of discovered species.
    #[must_use]
    pub fn count(&self) -> usize {
        self.discoveries.len()
    }

    /// Total facts learned across every species.
    #[must_use]
    pub fn total_facts_learned(&self) -> usize {
        self.discoveries.values().map(|d| d.learned_facts.len()).sum()
    }

    /// Iterates over all discoveries.
    pub fn iter(&self) -> impl Iterator<Item = &DiscoveredSpecies> {
        self.discoveries.values()
    }
}
