//! Read-only species catalogs for fish, coral, and ocean plants.
//!
//! These are the data tables the chunk populator and discovery log read
//! from. The built-in defaults mirror the shipped reference data; hosts can
//! construct catalogs from their own data instead.

use crate::species::SpeciesEntry;
use serde::{Deserialize, Serialize};

/// Catalog of swimming species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    entries: Vec<SpeciesEntry>,
}

impl SpeciesCatalog {
    /// Creates a catalog from the given entries.
    #[must_use]
    pub fn new(entries: Vec<SpeciesEntry>) -> Self {
        Self { entries }
    }

    /// Creates an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in fish table.
    #[must_use]
    pub fn default_fish() -> Self {
        Self::new(vec![
            SpeciesEntry::new(
                "Blue Whale",
                "Balaenoptera musculus",
                "Open Ocean",
                &[
                    "Blue whales are the largest animals ever known to exist on Earth!",
                    "A blue whale's heart can be as big as a car!",
                    "Their tongue alone can weigh as much as an elephant.",
                ],
            ),
            SpeciesEntry::new(
                "Clownfish",
                "Amphiprioninae",
                "Coral Reefs",
                &[
                    "Clownfish live in a special partnership with sea anemones.",
                    "All clownfish are born male - the largest in a group becomes female!",
                    "They perform a special dance with anemones to avoid getting stung.",
                ],
            ),
            SpeciesEntry::new(
                "Giant Pacific Octopus",
                "Enteroctopus dofleini",
                "Coastal Waters",
                &[
                    "They have three hearts and blue blood!",
                    "They can change color and texture in less than a second.",
                    "They have nine brains - one central brain and eight in their arms.",
                ],
            ),
            SpeciesEntry::new(
                "Manta Ray",
                "Mobula birostris",
                "Tropical Waters",
                &[
                    "Manta rays have the largest brain of all fish!",
                    "They filter feed by doing barrel rolls through plankton clouds.",
                    "Each manta ray has a unique pattern of spots, like a fingerprint.",
                ],
            ),
            SpeciesEntry::new(
                "Seahorse",
                "Hippocampus",
                "Seagrass Beds",
                &[
                    "Male seahorses are the ones who give birth to babies!",
                    "They have no stomach - food passes through them very quickly.",
                    "They use their tails to anchor themselves to seaweed or coral.",
                ],
            ),
            SpeciesEntry::new(
                "Hammerhead Shark",
                "Sphyrna",
                "Tropical Waters",
                &[
                    "Their wide-set eyes give them better 360-degree vision.",
                    "They use their head like a metal detector to find prey!",
                    "They can detect electrical signals from prey hiding in sand.",
                ],
            ),
            SpeciesEntry::new(
                "Sea Turtle",
                "Chelonioidea",
                "Tropical and Temperate Seas",
                &[
                    "Sea turtles can live to be over 100 years old!",
                    "They use Earth's magnetic field to navigate the oceans.",
                    "They can hold their breath for up to 5 hours while resting.",
                ],
            ),
            SpeciesEntry::new(
                "Jellyfish",
                "Medusozoa",
                "All Ocean Layers",
                &[
                    "They've been around for over 650 million years!",
                    "They have no brain, heart, or bones.",
                    "Some species are immortal - they can reverse their aging process.",
                ],
            ),
            SpeciesEntry::new(
                "Dolphin",
                "Delphinidae",
                "Oceans Worldwide",
                &[
                    "They sleep with one half of their brain at a time.",
                    "Each dolphin has its own unique whistle, like a name!",
                    "They use echolocation to find food and navigate.",
                ],
            ),
            SpeciesEntry::new(
                "Anglerfish",
                "Lophiiformes",
                "Deep Ocean",
                &[
                    "They use a glowing lure to attract prey in the dark.",
                    "They can swallow prey twice their own size!",
                    "Female anglerfish are much larger than males.",
                ],
            ),
        ])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpeciesEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Picks a uniformly random entry.
    #[must_use]
    pub fn random(&self, rng: &mut fastrand::Rng) -> Option<&SpeciesEntry> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.usize(..self.entries.len()))
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesEntry> {
        self.entries.iter()
    }
}

/// A coral species record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoralSpecies {
    /// Display name, e.g. "Elkhorn Coral"
    pub name: String,
    /// Latin name
    pub scientific_name: String,
    /// Structural category, e.g. "Hard Coral"
    pub coral_type: String,
    /// Maximum colony size in meters
    pub max_size: f32,
    /// Growth rate in cm per year
    pub growth_rate: f32,
    /// IUCN-style status string
    pub conservation_status: String,
    /// Whether the species is endangered
    pub endangered: bool,
    /// Educational facts
    pub facts: Vec<String>,
}

/// Catalog of coral species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoralCatalog {
    entries: Vec<CoralSpecies>,
}

impl CoralCatalog {
    /// Creates a catalog from the given entries.
    #[must_use]
    pub fn new(entries: Vec<CoralSpecies>) -> Self {
        Self { entries }
    }

    /// The built-in reef table.
    #[must_use]
    pub fn default_reef() -> Self {
        let coral = |name: &str,
                     scientific_name: &str,
                     coral_type: &str,
                     max_size: f32,
                     growth_rate: f32,
                     conservation_status: &str,
                     endangered: bool,
                     facts: &[&str]| CoralSpecies {
            name: name.to_owned(),
            scientific_name: scientific_name.to_owned(),
            coral_type: coral_type.to_owned(),
            max_size,
            growth_rate,
            conservation_status: conservation_status.to_owned(),
            endangered,
            facts: facts.iter().map(|f| (*f).to_owned()).collect(),
        };
        Self::new(vec![
            coral(
                "Elkhorn Coral",
                "Acropora palmata",
                "Hard Coral",
                4.0,
                12.7,
                "Critically Endangered",
                true,
                &[
                    "Can grow up to 2 meters in height and 4 meters in width",
                    "Provides essential habitat for many reef fish species",
                ],
            ),
            coral(
                "Brain Coral",
                "Diploria labyrinthiformis",
                "Hard Coral",
                1.8,
                0.8,
                "Near Threatened",
                false,
                &[
                    "Can live for several hundred years",
                    "The grooves help channel food to the coral polyps",
                ],
            ),
            coral(
                "Fire Coral",
                "Millepora alcicornis",
                "Hydrozoan",
                0.5,
                2.5,
                "Least Concern",
                false,
                &[
                    "Contains stinging cells called nematocysts",
                    "Important reef builder despite not being true coral",
                ],
            ),
            coral(
                "Blue Coral",
                "Heliopora coerulea",
                "Octocoral",
                7.0,
                1.2,
                "Vulnerable",
                true,
                &[
                    "Only surviving species from the Cretaceous period",
                    "Blue color comes from iron salts in skeleton",
                ],
            ),
            coral(
                "Sea Fan",
                "Gorgonia ventalina",
                "Soft Coral",
                1.8,
                1.0,
                "Least Concern",
                false,
                &[
                    "Grows perpendicular to the current to catch plankton",
                    "Flexible skeleton lets it sway without breaking",
                ],
            ),
        ])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CoralSpecies> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Picks a uniformly random entry.
    #[must_use]
    pub fn random(&self, rng: &mut fastrand::Rng) -> Option<&CoralSpecies> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.usize(..self.entries.len()))
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &CoralSpecies> {
        self.entries.iter()
    }
}

/// An ocean plant species record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSpecies {
    /// Display name, e.g. "Giant Kelp"
    pub name: String,
    /// Latin name
    pub scientific_name: String,
    /// Where the plant grows
    pub habitat: String,
    /// Maximum height in meters
    pub max_height: f32,
    /// Whether the plant is toxic
    pub toxic: bool,
    /// Whether the plant is edible
    pub edible: bool,
    /// Educational facts
    pub facts: Vec<String>,
}

/// Catalog of ocean plant species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantCatalog {
    entries: Vec<PlantSpecies>,
}

impl PlantCatalog {
    /// Creates a catalog from the given entries.
    #[must_use]
    pub fn new(entries: Vec<PlantSpecies>) -> Self {
        Self { entries }
    }

    /// The built-in meadow table.
    #[must_use]
    pub fn default_meadow() -> Self {
        let plant = |name: &str,
                     scientific_name: &str,
                     habitat: &str,
                     max_height: f32,
                     toxic: bool,
                     edible: bool,
                     facts: &[&str]| PlantSpecies {
            name: name.to_owned(),
            scientific_name: scientific_name.to_owned(),
            habitat: habitat.to_owned(),
            max_height,
            toxic,
            edible,
            facts: facts.iter().map(|f| (*f).to_owned()).collect(),
        };
        Self::new(vec![
            plant(
                "Giant Kelp",
                "Macrocystis pyrifera",
                "Cold, nutrient-rich coastal waters",
                30.0,
                false,
                true,
                &[
                    "Can grow up to 100 feet tall and grows about 2 feet per day",
                    "Has air-filled bladders called pneumatocysts that help it float upright",
                ],
            ),
            plant(
                "Turtle Grass",
                "Thalassia testudinum",
                "Tropical coastal waters",
                0.35,
                false,
                true,
                &[
                    "Provides essential feeding grounds for sea turtles and manatees",
                    "Has an extensive root system that helps stabilize ocean sediments",
                ],
            ),
            plant(
                "Sea Lettuce",
                "Ulva lactuca",
                "Coastal waters worldwide",
                0.4,
                false,
                true,
                &[
                    "Grows rapidly and can double its size in less than two weeks",
                    "Acts as a natural bioindicator of water quality",
                ],
            ),
            plant(
                "Eelgrass",
                "Zostera marina",
                "Temperate coastal waters",
                1.2,
                false,
                false,
                &[
                    "Can reproduce both sexually through seeds and asexually through rhizome growth",
                    "Meadows shelter juvenile fish from predators and currents",
                ],
            ),
            plant(
                "Neptune Grass",
                "Posidonia oceanica",
                "Mediterranean Sea",
                1.5,
                false,
                false,
                &[
                    "A single meadow can be thousands of years old",
                    "Produces floating fruit known as sea olives",
                ],
            ),
        ])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlantSpecies> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Picks a uniformly random entry.
    #[must_use]
    pub fn random(&self, rng: &mut fastrand::Rng) -> Option<&PlantSpecies> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.usize(..self.entries.len()))
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &PlantSpecies> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fish_lookup() {
        let catalog = SpeciesCatalog::default_fish();
        assert!(!catalog.is_empty());
        let shark = catalog.get("hammerhead shark").expect("shark in table");
        assert_eq!(shark.scientific_name, "Sphyrna");
        assert!(!shark.facts.is_empty());
    }

    #[test]
    fn test_lookup_missing_species() {
        let catalog = SpeciesCatalog::default_fish();
        assert!(catalog.get("Kraken").is_none());
    }

    #[test]
    fn test_random_pick_from_empty_catalog() {
        let catalog = SpeciesCatalog::empty();
        let mut rng = fastrand::Rng::with_seed(7);
        assert!(catalog.random(&mut rng).is_none());
    }

    #[test]
    fn test_random_pick_deterministic_per_seed() {
        let catalog = SpeciesCatalog::default_fish();
        let mut rng1 = fastrand::Rng::with_seed(42);
        let mut rng2 = fastrand::Rng::with_seed(42);
        let a = catalog.random(&mut rng1).expect("non-empty");
        let b = catalog.random(&mut rng2).expect("non-empty");
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_default_reef_and_meadow_tables() {
        let reef = CoralCatalog::default_reef();
        assert!(reef.get("Elkhorn Coral").expect("elkhorn").endangered);
        let meadow = PlantCatalog::default_meadow();
        assert!(meadow.get("Giant Kelp").expect("kelp").edible);
    }
}
