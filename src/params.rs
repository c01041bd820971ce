//! Growth parameters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How the initial seed nodes are placed inside the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPlacement {
    /// Evenly spaced along one edge of the bounds.
    Edge,
    /// Jittered around the center of the bounds.
    Scatter,
}

/// Which edge of the bounds seeds are attached to in edge placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Full parameter set for one simulation instance.
///
/// The engine assumes already-validated input (positive radii, nonzero
/// `step_size`, `seed_spread` in 0–100); validation belongs to the
/// configuration layer outside this core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Maximum distance at which an attractor can still pull a node.
    pub influence_radius: f32,
    /// Distance at which an attractor is consumed and removed.
    pub kill_radius: f32,
    /// Length of each growth segment.
    pub step_size: f32,
    /// Hard cap on the node arena; growth stops once reached.
    pub max_nodes: usize,
    pub seed_count: usize,
    /// Seed span as a percentage (0–100) of the relevant dimension.
    pub seed_spread: f32,
    pub seed_placement: SeedPlacement,
    pub seed_edge: SeedEdge,
    /// Tilt of the edge-seed row, in degrees.
    pub seed_angle_deg: f32,
    pub attractor_count: usize,
    /// Growth steps performed per orchestrator tick.
    pub steps_per_frame: usize,
    pub avoid_obstacles: bool,
    /// Constant directional bias (e.g. gravity) added to the averaged
    /// influence direction before the final normalization. Zero leaves
    /// the growth direction purely attractor-driven.
    pub tropism: Vec2,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            influence_radius: 80.0,
            kill_radius: 16.0,
            step_size: 6.0,
            max_nodes: 4000,
            seed_count: 1,
            seed_spread: 50.0,
            seed_placement: SeedPlacement::Edge,
            seed_edge: SeedEdge::Bottom,
            seed_angle_deg: 0.0,
            attractor_count: 400,
            steps_per_frame: 1,
            avoid_obstacles: true,
            tropism: Vec2::ZERO,
        }
    }
}
