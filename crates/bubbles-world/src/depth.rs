//! Smooth per-chunk ocean floor depth.
//!
//! Each chunk gets a deterministic depth derived from 2D noise over its
//! center, so neighboring chunks shade into each other instead of jumping.

use crate::config::OceanConfig;
use bubbles_common::ChunkCoord;
use noise::{NoiseFn, Perlin};

/// Fixed domain offset keeping the sample window away from the noise
/// origin's lattice symmetry.
const DEPTH_DOMAIN_OFFSET: f64 = 1000.0;

/// Deterministic, spatially smooth depth field over the chunk grid.
pub struct DepthField {
    min_depth: f32,
    max_depth: f32,
    noise_scale: f64,
    depth_noise: Perlin,
    detail_noise: Perlin,
}

impl DepthField {
    /// Creates a depth field from the streaming config.
    #[must_use]
    pub fn new(config: &OceanConfig) -> Self {
        let seed = config.seed as u32;
        Self {
            min_depth: config.min_depth,
            max_depth: config.max_depth,
            noise_scale: config.depth_noise_scale,
            depth_noise: Perlin::new(seed),
            detail_noise: Perlin::new(seed.wrapping_add(1)),
        }
    }

    /// Ocean floor depth for the chunk at `coord`, in
    /// `[min_depth, max_depth]`.
    #[must_use]
    pub fn sample(&self, coord: ChunkCoord, chunk_size: f32) -> f32 {
        let origin = coord.world_origin(chunk_size);
        let cx = (f64::from(origin.x) + f64::from(chunk_size) * 0.5 + DEPTH_DOMAIN_OFFSET)
            / self.noise_scale;
        let cy = (f64::from(origin.y) + f64::from(chunk_size) * 0.5 + DEPTH_DOMAIN_OFFSET)
            / self.noise_scale;

        let base = self.depth_noise.get([cx, cy]);
        let detail = self.detail_noise.get([cx * 4.0, cy * 4.0]) * 0.1;
        let normalized = ((base + detail + 1.0) / 2.0).clamp(0.0, 1.0) as f32;

        self.min_depth + (self.max_depth - self.min_depth) * normalized
    }
}
