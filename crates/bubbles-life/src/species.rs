//! Species identity types and movement-pattern classification.

use serde::{Deserialize, Serialize};

/// Named behavior categories for marine life.
///
/// Used both for in-world motion and as a fallback key when resolving a
/// visual prefab for a species with no exact table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovementPattern {
    /// Default circular orbit around the spawn point.
    #[default]
    Circular,
    /// Rhythmic pulse with upward drift, for jellyfish.
    Pulse,
    /// Back-and-forth sweep, for sharks.
    Patrol,
    /// Small noise-driven wobble in place, for seahorses.
    Hover,
    /// Wide wave-like sweep, for manta rays.
    Glide,
    /// Slow meander, for whales and turtles.
    Drift,
}

impl MovementPattern {
    /// Get the display name for this pattern.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Circular => "Circular",
            Self::Pulse => "Pulse",
            Self::Patrol => "Patrol",
            Self::Hover => "Hover",
            Self::Glide => "Glide",
            Self::Drift => "Drift",
        }
    }

    /// Get all movement patterns.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Circular,
            Self::Pulse,
            Self::Patrol,
            Self::Hover,
            Self::Glide,
            Self::Drift,
        ]
    }

    /// Infers a pattern from a species display name.
    ///
    /// Substring match against a fixed keyword table, first hit wins.
    /// Species with no configured preset fall back to this mapping.
    #[must_use]
    pub fn infer(species_name: &str) -> Self {
        let name = species_name.to_lowercase();
        if name.contains("jellyfish") {
            Self::Pulse
        } else if name.contains("shark") || name.contains("barracuda") {
            Self::Patrol
        } else if name.contains("seahorse") {
            Self::Hover
        } else if name.contains("ray") || name.contains("manta") {
            Self::Glide
        } else if name.contains("whale") || name.contains("turtle") {
            Self::Drift
        } else {
            Self::Circular
        }
    }
}

/// How a creature reacts when the player comes near.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionBehavior {
    /// Ignores the player.
    #[default]
    None,
    /// Swims towards the player to investigate.
    Curious,
    /// Swims away from the player.
    Flee,
    /// Trails behind the player.
    Follow,
}

/// A reference-data record for one species: identity plus the facts shown
/// when the player discovers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// Display name, e.g. "Hammerhead Shark"
    pub name: String,
    /// Latin name, e.g. "Sphyrna"
    pub scientific_name: String,
    /// Where the species lives, e.g. "Tropical Waters"
    pub habitat: String,
    /// Educational facts, one shown per encounter
    pub facts: Vec<String>,
}

impl SpeciesEntry {
    /// Creates a new species entry.
    #[must_use]
    pub fn new(name: &str, scientific_name: &str, habitat: &str, facts: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            scientific_name: scientific_name.to_owned(),
            habitat: habitat.to_owned(),
            facts: facts.iter().map(|f| (*f).to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_keyword_table() {
        assert_eq!(MovementPattern::infer("Jellyfish"), MovementPattern::Pulse);
        assert_eq!(
            MovementPattern::infer("Hammerhead Shark"),
            MovementPattern::Patrol
        );
        assert_eq!(
            MovementPattern::infer("Great Barracuda"),
            MovementPattern::Patrol
        );
        assert_eq!(MovementPattern::infer("Seahorse"), MovementPattern::Hover);
        assert_eq!(MovementPattern::infer("Manta Ray"), MovementPattern::Glide);
        assert_eq!(MovementPattern::infer("Blue Whale"), MovementPattern::Drift);
        assert_eq!(MovementPattern::infer("Sea Turtle"), MovementPattern::Drift);
    }

    #[test]
    fn test_infer_defaults_to_circular() {
        assert_eq!(MovementPattern::infer("Clownfish"), MovementPattern::Circular);
        assert_eq!(MovementPattern::infer("Dolphin"), MovementPattern::Circular);
        assert_eq!(MovementPattern::infer(""), MovementPattern::Circular);
    }

    #[test]
    fn test_infer_is_case_insensitive() {
        assert_eq!(MovementPattern::infer("JELLYFISH"), MovementPattern::Pulse);
        assert_eq!(MovementPattern::infer("blue whale"), MovementPattern::Drift);
    }
}
