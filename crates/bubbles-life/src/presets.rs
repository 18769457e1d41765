//! Per-species tuning presets.
//!
//! A preset carries the hand-tuned look and behavior for one species. The
//! populator and movement systems consult the preset table first and fall
//! back to keyword inference for species without an entry.

use crate::species::{InteractionBehavior, MovementPattern};
use serde::{Deserialize, Serialize};

/// Hand-tuned parameters for one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesPreset {
    /// Display name this preset applies to
    pub name: String,
    /// Tint color, linear RGB
    pub color: [f32; 3],
    /// Base sprite scale
    pub scale: f32,
    /// Movement pattern
    pub pattern: MovementPattern,
    /// Movement speed in world units (or degrees, pattern-dependent) per second
    pub move_speed: f32,
    /// Movement radius around the spawn point
    pub move_radius: f32,
    /// Reaction to the player
    pub interaction: InteractionBehavior,
    /// Radius at which the creature notices the player
    pub detection_radius: f32,
    /// Speed used while reacting to the player
    pub interaction_speed: f32,
}

/// Lookup table of species presets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetTable {
    presets: Vec<SpeciesPreset>,
}

impl PresetTable {
    /// Creates a table from the given presets.
    #[must_use]
    pub fn new(presets: Vec<SpeciesPreset>) -> Self {
        Self { presets }
    }

    /// Creates an empty table (every species falls back to inference).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// The built-in preset table.
    #[must_use]
    pub fn defaults() -> Self {
        let preset = |name: &str,
                      color: [f32; 3],
                      scale: f32,
                      pattern: MovementPattern,
                      move_speed: f32,
                      move_radius: f32,
                      interaction: InteractionBehavior,
                      detection_radius: f32,
                      interaction_speed: f32| SpeciesPreset {
            name: name.to_owned(),
            color,
            scale,
            pattern,
            move_speed,
            move_radius,
            interaction,
            detection_radius,
            interaction_speed,
        };
        use InteractionBehavior::{Curious, Flee, Follow, None};
        use MovementPattern::{Circular, Drift, Glide, Hover, Patrol, Pulse};
        Self::new(vec![
            preset("Blue Whale", [0.2, 0.3, 0.8], 3.5, Drift, 1.5, 6.0, None, 8.0, 3.0),
            preset("Clownfish", [1.0, 0.5, 0.0], 0.5, Circular, 4.0, 2.0, Curious, 4.0, 5.0),
            preset(
                "Giant Pacific Octopus",
                [0.8, 0.2, 0.2],
                2.0,
                Circular,
                3.0,
                3.0,
                Curious,
                6.0,
                4.0,
            ),
            preset("Manta Ray", [0.3, 0.3, 0.3], 2.5, Glide, 3.0, 4.0, None, 7.0, 4.0),
            preset("Seahorse", [1.0, 1.0, 0.0], 0.4, Hover, 1.0, 1.0, Flee, 3.0, 3.0),
            preset(
                "Hammerhead Shark",
                [0.5, 0.5, 0.5],
                2.0,
                Patrol,
                4.5,
                4.0,
                Follow,
                8.0,
                5.0,
            ),
            preset("Sea Turtle", [0.0, 0.8, 0.0], 1.5, Circular, 2.5, 3.0, Curious, 5.0, 3.5),
            preset("Jellyfish", [1.0, 0.8, 1.0], 0.8, Pulse, 1.0, 2.0, Flee, 4.0, 2.5),
            preset("Dolphin", [0.7, 0.7, 0.8], 2.0, Circular, 7.0, 5.0, Follow, 8.0, 8.5),
            preset("Anglerfish", [0.1, 0.1, 0.1], 0.6, Circular, 2.0, 2.0, Curious, 5.0, 2.0),
        ])
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the table has no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Case-insensitive lookup by species name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpeciesPreset> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Resolves the movement pattern for a species: configured preset first,
    /// keyword inference when no preset exists.
    #[must_use]
    pub fn pattern_for(&self, name: &str) -> MovementPattern {
        self.get(name)
            .map_or_else(|| MovementPattern::infer(name), |p| p.pattern)
    }

    /// Iterates over all presets.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesPreset> {
        self.presets.iter()
    }
}
