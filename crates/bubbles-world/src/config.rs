//! Ocean streaming configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default chunk size in world units.
const DEFAULT_CHUNK_SIZE: f32 = 100.0;
/// Default view distance in chunks (square radius).
const DEFAULT_VIEW_DISTANCE: i32 = 3;
/// Default fish count range per chunk.
const DEFAULT_FISH_RANGE: (u32, u32) = (2, 6);
/// Default decoration count range per chunk.
const DEFAULT_DECORATION_RANGE: (u32, u32) = (4, 10);
/// Default minimum spacing between spawned entities.
const DEFAULT_MIN_SPAWN_DISTANCE: f32 = 5.0;
/// Default ocean depth range in world units.
const DEFAULT_DEPTH_RANGE: (f32, f32) = (20.0, 100.0);
/// Default noise scale for the depth field (larger = smoother).
const DEFAULT_DEPTH_NOISE_SCALE: f64 = 800.0;

/// Configuration errors raised at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A min/max pair is inverted
    #[error("{field}: min {min} exceeds max {max}")]
    InvertedRange {
        /// Field name
        field: &'static str,
        /// Configured minimum
        min: f32,
        /// Configured maximum
        max: f32,
    },
    /// A value that must be positive is not
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Field name
        field: &'static str,
        /// Configured value
        value: f32,
    },
}

/// Ocean streaming configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceanConfig {
    /// World seed for deterministic depth and placement
    pub seed: u64,
    /// Chunk size in world units
    pub chunk_size: f32,
    /// How many chunks to keep loaded around the player (square radius)
    pub view_distance: i32,
    /// Minimum fish per chunk (inclusive)
    pub min_fish_per_chunk: u32,
    /// Maximum fish per chunk (inclusive)
    pub max_fish_per_chunk: u32,
    /// Minimum decorations per chunk (inclusive)
    pub min_decorations_per_chunk: u32,
    /// Maximum decorations per chunk (inclusive)
    pub max_decorations_per_chunk: u32,
    /// Minimum spacing between spawned entities within a chunk
    pub min_spawn_distance: f32,
    /// Shallowest ocean floor depth
    pub min_depth: f32,
    /// Deepest ocean floor depth
    pub max_depth: f32,
    /// Noise scale for the depth field (larger = smoother)
    pub depth_noise_scale: f64,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            chunk_size: DEFAULT_CHUNK_SIZE,
            view_distance: DEFAULT_VIEW_DISTANCE,
            min_fish_per_chunk: DEFAULT_FISH_RANGE.0,
            max_fish_per_chunk: DEFAULT_FISH_RANGE.1,
            min_decorations_per_chunk: DEFAULT_DECORATION_RANGE.0,
            max_decorations_per_chunk: DEFAULT_DECORATION_RANGE.1,
            min_spawn_distance: DEFAULT_MIN_SPAWN_DISTANCE,
            min_depth: DEFAULT_DEPTH_RANGE.0,
            max_depth: DEFAULT_DEPTH_RANGE.1,
            depth_noise_scale: DEFAULT_DEPTH_NOISE_SCALE,
        }
    }
}

impl OceanConfig {
    /// Creates a config with the given seed and defaults for the rest.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "chunk_size",
                value: self.chunk_size,
            });
        }
        if self.min_spawn_distance <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "min_spawn_distance",
                value: self.min_spawn_distance,
            });
        }
        if self.depth_noise_scale <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "depth_noise_scale",
                value: self.depth_noise_scale as f32,
            });
        }
        if self.view_distance < 0 {
            return Err(ConfigError::NotPositive {
                field: "view_distance",
                value: self.view_distance as f32,
            });
        }
        if self.min_fish_per_chunk > self.max_fish_per_chunk {
            return Err(ConfigError::InvertedRange {
                field: "fish_per_chunk",
                min: self.min_fish_per_chunk as f32,
                max: self.max_fish_per_chunk as f32,
            });
        }
        if self.min_decorations_per_chunk > self.max_decorations_per_chunk {
            return Err(ConfigError::InvertedRange {
                field: "decorations_per_chunk",
                min: self.min_decorations_per_chunk as f32,
                max: self.max_decorations_per_chunk as f32,
            });
        }
        if self.min_depth > self.max_depth {
            return Err(ConfigError::InvertedRange {
                field: "depth",
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OceanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_with_seed() {
        let config = OceanConfig::with_seed(42);
        assert_eq!(config.seed, 42);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_inverted_fish_range_rejected() {
        let config = OceanConfig {
            min_fish_per_chunk: 8,
            max_fish_per_chunk: 2,
            ..OceanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "fish_per_chunk", .. })
        ));
    }

    #[test]
    fn test_inverted_depth_range_rejected() {
        let config = OceanConfig {
            min_depth: 50.0,
            max_depth: 10.0,
            ..OceanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "depth", .. })
        ));
    }

    #[test]
    fn test_nonpositive_chunk_size_rejected() {
        let config = OceanConfig {
            chunk_size: 0.0,
            ..OceanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "chunk_size", .. })
        ));
    }
}
