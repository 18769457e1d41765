//! Spatially separated spawn placement inside a chunk.
//!
//! Candidates come from grid-jittered sampling: the chunk is partitioned
//! into a coarse grid of `min_distance`-sized cells, a random cell is
//! picked, and the candidate is jittered inside it. That covers the chunk
//! far more evenly than plain uniform sampling. Candidates too close to an
//! already accepted position are rejected and resampled, up to a bounded
//! number of attempts; after that the last candidate is accepted anyway so
//! a crowded chunk can never stall population.

use crate::chunk::ChunkBounds;
use bubbles_common::WorldPos;
use tracing::debug;

/// Resample budget per placement before the last candidate is accepted
/// regardless of spacing.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 30;

/// One chunk's placement state: accepted positions live only as long as the
/// population pass that produced them.
pub struct PlacementSampler {
    bounds: ChunkBounds,
    min_distance: f32,
    cells_per_axis: u32,
    accepted: Vec<WorldPos>,
}

impl PlacementSampler {
    /// Creates a sampler for one chunk.
    #[must_use]
    pub fn new(bounds: ChunkBounds, min_distance: f32) -> Self {
        let cells_per_axis = ((bounds.size / min_distance).floor() as u32).max(1);
        Self {
            bounds,
            min_distance,
            cells_per_axis,
            accepted: Vec::new(),
        }
    }

    /// Positions accepted so far in this pass.
    #[must_use]
    pub fn accepted(&self) -> &[WorldPos] {
        &self.accepted
    }

    /// Places one entity and returns its position.
    ///
    /// Keeps every accepted position at least `min_distance` from the
    /// others unless the attempt budget runs out, in which case the last
    /// candidate is accepted with the spacing constraint relaxed.
    pub fn place(&mut self, rng: &mut fastrand::Rng) -> WorldPos {
        let mut candidate = self.sample_grid_jittered(rng);
        let mut attempts = 1;
        while attempts < MAX_PLACEMENT_ATTEMPTS && !self.is_clear(candidate) {
            candidate = self.sample_grid_jittered(rng);
            attempts += 1;
        }
        if !self.is_clear(candidate) {
            debug!(
                "placement budget exhausted after {attempts} attempts, accepting crowded position"
            );
        }
        self.accepted.push(candidate);
        candidate
    }

    /// Grid-jittered candidate: random coarse cell plus uniform jitter
    /// inside it, clamped to the chunk.
    fn sample_grid_jittered(&self, rng: &mut fastrand::Rng) -> WorldPos {
        let cell_x = rng.u32(..self.cells_per_axis) as f32;
        let cell_y = rng.u32(..self.cells_per_axis) as f32;
        let offset_x = (cell_x + rng.f32()) * self.min_distance;
        let offset_y = (cell_y + rng.f32()) * self.min_distance;
        WorldPos::new(
            self.bounds.origin.x + offset_x.min(self.bounds.size),
            self.bounds.origin.y + offset_y.min(self.bounds.size),
        )
    }

    fn is_clear(&self, candidate: WorldPos) -> bool {
        let min_sq = self.min_distance * self.min_distance;
        self.accepted
            .iter()
            .all(|p| p.distance_squared(candidate) >= min_sq)
    }
}
