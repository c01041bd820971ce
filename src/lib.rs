//! Core 2-D space-colonization growth engine.
//!
//! Scattered attractor points pull the nearest growth nodes toward them
//! until consumed, producing root/vein-like branching structures inside a
//! bounded region, optionally around polygonal obstacles.
//!
//! Main components:
//! - [`geometry`] — bounds, obstacle polygons, containment and
//!   segment-intersection tests, obstacle generation.
//! - [`rng`] — seeded deterministic random number generator.
//! - [`params`] — growth parameters and seed placement settings.
//! - [`tree`] — growth nodes and the per-attractor node scan.
//! - [`influence`] — per-step buffers for accumulated influences.
//! - [`state`] — simulation state construction and seeding.
//! - [`step`] — the per-step space-colonization algorithm.
//! - [`batch`] — lockstep advancement of many simulation instances.
//! - [`types`] — shared type aliases and IDs.

pub mod batch;
pub mod geometry;
pub mod influence;
pub mod params;
pub mod rng;
pub mod state;
pub mod step;
pub mod tree;
pub mod types;
