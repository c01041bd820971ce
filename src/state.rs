//! Simulation state and initialization.
//!
//! A [`SimulationState`] is created wholesale from bounds, parameters and
//! an obstacle set; it is mutated only by [`crate::step::step_simulation`].
//! Any configuration change discards the old state and builds a fresh one
//! rather than patching it in place.

use crate::geometry::{Bounds, Polygon};
use crate::params::{SeedEdge, SeedPlacement, SimulationParams};
use crate::tree::GrowthNode;
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Complete state of one growth simulation instance.
///
/// Invariants, maintained by initialization and the stepper:
/// - `nodes` only ever grows within a run and never exceeds
///   `SimulationParams::max_nodes`; every `parent` index is strictly less
///   than the node's own index.
/// - `attractors` only ever shrinks, preserving relative order.
/// - `completed` is sticky; once set the state is immutable.
///
/// A shared borrow of this struct is the read-only snapshot handed to
/// rendering and export collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub bounds: Bounds,
    pub nodes: Vec<GrowthNode>,
    pub attractors: Vec<Vec2>,
    pub obstacles: Vec<Polygon>,
    pub iterations: u32,
    pub completed: bool,
}

impl SimulationState {
    /// Builds a fresh state: seed nodes placed per `params`, attractors
    /// rejection-sampled outside the obstacle polygons.
    ///
    /// The same `(seed, params, obstacles)` triple reproduces an
    /// identical state when `rng` is a seeded [`crate::rng::Mulberry32`].
    pub fn new(
        bounds: Bounds,
        params: &SimulationParams,
        obstacles: Vec<Polygon>,
        rng: &mut impl Rng,
    ) -> Self {
        let nodes = place_seed_nodes(bounds, params, rng);
        let attractors = sample_attractors(bounds, params.attractor_count, &obstacles, rng);
        Self {
            bounds,
            nodes,
            attractors,
            obstacles,
            iterations: 0,
            completed: false,
        }
    }

    /// Like [`SimulationState::new`] but seeded from thread-local
    /// entropy. Callers needing reproducibility must supply a seeded
    /// generator explicitly.
    pub fn new_unseeded(bounds: Bounds, params: &SimulationParams, obstacles: Vec<Polygon>) -> Self {
        Self::new(bounds, params, obstacles, &mut rand::rng())
    }

    /// Parent→child position pairs of every growth segment, in node
    /// order. Seed nodes have no parent and contribute no segment.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.nodes.iter().filter_map(|node| {
            node.parent
                .map(|parent| (self.nodes[parent].pos, node.pos))
        })
    }
}

/// Places the initial parentless seed nodes.
fn place_seed_nodes(
    bounds: Bounds,
    params: &SimulationParams,
    rng: &mut impl Rng,
) -> Vec<GrowthNode> {
    let margin = params.step_size.max(6.0);
    let spread = (params.seed_spread / 100.0).clamp(0.0, 1.0);

    match params.seed_placement {
        SeedPlacement::Scatter => (0..params.seed_count)
            .map(|_| {
                let jitter = Vec2::new(
                    (rng.random::<f32>() - 0.5) * spread * bounds.width,
                    (rng.random::<f32>() - 0.5) * spread * bounds.height,
                );
                GrowthNode::new_seed(clamp_to_margin(bounds.center() + jitter, bounds, margin))
            })
            .collect(),
        SeedPlacement::Edge => {
            // Midpoint of the chosen edge, inset by the margin, plus the
            // along-edge axis and the dimension the spread applies to.
            let (center, along, dim) = match params.seed_edge {
                SeedEdge::Top => (
                    Vec2::new(bounds.width * 0.5, margin),
                    Vec2::X,
                    bounds.width,
                ),
                SeedEdge::Bottom => (
                    Vec2::new(bounds.width * 0.5, bounds.height - margin),
                    Vec2::X,
                    bounds.width,
                ),
                SeedEdge::Left => (
                    Vec2::new(margin, bounds.height * 0.5),
                    Vec2::Y,
                    bounds.height,
                ),
                SeedEdge::Right => (
                    Vec2::new(bounds.width - margin, bounds.height * 0.5),
                    Vec2::Y,
                    bounds.height,
                ),
            };

            // Tilting the row by seed_angle_deg leans the seeds into the
            // region; clamping below keeps them inside the margin inset.
            let axis = Vec2::from_angle(params.seed_angle_deg.to_radians()).rotate(along);
            let span = spread * dim;
            let count = params.seed_count;

            (0..count)
                .map(|i| {
                    let t = if count > 1 {
                        (i as f32 / (count - 1) as f32 - 0.5) * span
                    } else {
                        0.0
                    };
                    GrowthNode::new_seed(clamp_to_margin(center + axis * t, bounds, margin))
                })
                .collect()
        }
    }
}

/// Clamps a seed position into the margin-inset bounds. A margin larger
/// than half a dimension leaves no inset interval on that axis; the
/// coordinate collapses to the dimension midpoint instead of panicking.
fn clamp_to_margin(p: Vec2, bounds: Bounds, margin: f32) -> Vec2 {
    let clamp_axis = |v: f32, dim: f32| {
        if margin > dim - margin {
            dim * 0.5
        } else {
            v.clamp(margin, dim - margin)
        }
    };
    Vec2::new(clamp_axis(p.x, bounds.width), clamp_axis(p.y, bounds.height))
}

/// Rejection-samples up to `count` uniform attractor points that avoid
/// the obstacle polygons.
///
/// Gives up after `count * 20` attempts; an under-filled result is
/// expected when obstacles cover much of the region.
fn sample_attractors(
    bounds: Bounds,
    count: usize,
    obstacles: &[Polygon],
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    let mut attractors = Vec::with_capacity(count);
    let max_attempts = count * 20;
    let mut attempts = 0;

    while attractors.len() < count && attempts < max_attempts {
        attempts += 1;
        let p = Vec2::new(
            rng.random_range(0.0..bounds.width),
            rng.random_range(0.0..bounds.height),
        );
        if obstacles.iter().any(|poly| poly.contains(p)) {
            continue;
        }
        attractors.push(p);
    }

    attractors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    fn bounds() -> Bounds {
        Bounds::new(400.0, 300.0)
    }

    #[test]
    fn edge_seeding_spreads_along_bottom_edge() {
        let params = SimulationParams {
            seed_count: 5,
            seed_spread: 50.0,
            seed_placement: SeedPlacement::Edge,
            seed_edge: SeedEdge::Bottom,
            seed_angle_deg: 0.0,
            step_size: 6.0,
            attractor_count: 0,
            ..Default::default()
        };
        let mut rng = Mulberry32::new(1);
        let state = SimulationState::new(bounds(), &params, Vec::new(), &mut rng);

        assert_eq!(state.nodes.len(), 5);
        let margin = 6.0;
        for node in &state.nodes {
            assert!(node.parent.is_none());
            assert_eq!(node.pos.y, 300.0 - margin);
            assert!(node.pos.x >= margin && node.pos.x <= 400.0 - margin);
        }
        // Span is 50% of the width, centered.
        assert_eq!(state.nodes[0].pos.x, 200.0 - 100.0);
        assert_eq!(state.nodes[4].pos.x, 200.0 + 100.0);
        // Evenly spaced and ascending.
        for pair in state.nodes.windows(2) {
            assert!((pair[1].pos.x - pair[0].pos.x - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn single_edge_seed_sits_at_edge_midpoint() {
        let params = SimulationParams {
            seed_count: 1,
            seed_placement: SeedPlacement::Edge,
            seed_edge: SeedEdge::Left,
            attractor_count: 0,
            ..Default::default()
        };
        let mut rng = Mulberry32::new(1);
        let state = SimulationState::new(bounds(), &params, Vec::new(), &mut rng);

        assert_eq!(state.nodes.len(), 1);
        assert_eq!(state.nodes[0].pos, Vec2::new(6.0, 150.0));
    }

    #[test]
    fn scatter_seeding_clamps_to_margin() {
        let params = SimulationParams {
            seed_count: 20,
            seed_spread: 100.0,
            seed_placement: SeedPlacement::Scatter,
            step_size: 10.0,
            attractor_count: 0,
            ..Default::default()
        };
        let mut rng = Mulberry32::new(42);
        let state = SimulationState::new(bounds(), &params, Vec::new(), &mut rng);

        let margin = 10.0;
        assert_eq!(state.nodes.len(), 20);
        for node in &state.nodes {
            assert!(node.pos.x >= margin && node.pos.x <= 400.0 - margin);
            assert!(node.pos.y >= margin && node.pos.y <= 300.0 - margin);
        }
    }

    #[test]
    fn oversized_margin_collapses_seeds_to_midpoint() {
        // step_size 60 in a 100x100 region makes the margin (60) exceed
        // half of each dimension, leaving no inset interval at all.
        let small = Bounds::new(100.0, 100.0);
        let params = SimulationParams {
            seed_count: 3,
            step_size: 60.0,
            seed_placement: SeedPlacement::Edge,
            seed_edge: SeedEdge::Bottom,
            attractor_count: 0,
            ..Default::default()
        };
        let mut rng = Mulberry32::new(1);
        let state = SimulationState::new(small, &params, Vec::new(), &mut rng);

        assert_eq!(state.nodes.len(), 3);
        for node in &state.nodes {
            assert_eq!(node.pos, Vec2::new(50.0, 50.0));
        }

        // Scatter placement must degrade the same way.
        let params = SimulationParams {
            seed_placement: SeedPlacement::Scatter,
            ..params
        };
        let mut rng = Mulberry32::new(1);
        let state = SimulationState::new(small, &params, Vec::new(), &mut rng);
        for node in &state.nodes {
            assert_eq!(node.pos, small.center());
        }
    }

    #[test]
    fn attractors_avoid_obstacle_polygons() {
        // One big square obstacle in the middle of the region.
        let obstacle = Polygon::new(vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(300.0, 100.0),
            Vec2::new(300.0, 200.0),
            Vec2::new(100.0, 200.0),
        ]);
        let params = SimulationParams {
            attractor_count: 200,
            ..Default::default()
        };
        let mut rng = Mulberry32::new(7);
        let state = SimulationState::new(bounds(), &params, vec![obstacle.clone()], &mut rng);

        assert!(state.attractors.len() <= 200);
        for a in &state.attractors {
            assert!(!obstacle.contains(*a));
        }
    }

    #[test]
    fn initialization_is_deterministic_for_equal_seeds() {
        let params = SimulationParams::default();
        let mut rng_a = Mulberry32::new(12345);
        let mut rng_b = Mulberry32::new(12345);
        let a = SimulationState::new(bounds(), &params, Vec::new(), &mut rng_a);
        let b = SimulationState::new(bounds(), &params, Vec::new(), &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn fresh_state_starts_unstepped() {
        let params = SimulationParams::default();
        let state = SimulationState::new_unseeded(bounds(), &params, Vec::new());
        assert_eq!(state.iterations, 0);
        assert!(!state.completed);
        assert_eq!(state.nodes.len(), params.seed_count);
    }
}
