//! # Bubbles Life
//!
//! Marine-life reference data and behavior for Squid Bubbles.
//!
//! This crate handles:
//! - Species catalogs for fish, coral, and ocean plants (with facts)
//! - Per-species presets (color, scale, movement tuning)
//! - Movement patterns with keyword-based inference
//! - Movement kinematics advanced by an external per-tick `advance(dt)`
//! - The player's discovery log

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod discovery;
pub mod movement;
pub mod presets;
pub mod species;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::discovery::*;
    pub use crate::movement::*;
    pub use crate::presets::*;
    pub use crate::species::*;
}

pub use prelude::*;
