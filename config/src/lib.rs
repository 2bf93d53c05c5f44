//! # Config Crate
//!
//! Centralized configuration constants for the building frame generator.
//! Every dimension, clamping minimum and safety limit is defined here so the
//! layout, mesh and export crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_SLAB_THICKNESS, STORY_HEIGHT};
//!
//! // Column height is whatever is left of the story above the slab
//! let slab = 0.2_f64.max(MIN_SLAB_THICKNESS);
//! let column_height = STORY_HEIGHT - slab;
//! assert!(column_height > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Usable from any crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
