//! The per-step space-colonization algorithm.
//!
//! One step is atomic and runs four phases in order:
//! 1. **Scan** — every attractor scans the node arena once; a node within
//!    kill distance consumes the attractor, otherwise the nearest node
//!    strictly within influence distance accumulates a unit pull vector.
//! 2. **Prune** — consumed attractors are removed, survivors keep their
//!    relative order.
//! 3. **Grow** — influenced nodes, in ascending index order, each propose
//!    a child one `step_size` along the averaged pull direction;
//!    candidates outside the bounds or blocked by an obstacle are
//!    skipped, and growth stops once `max_nodes` is reached.
//! 4. **Finalize** — the iteration counter advances and completion is
//!    decided.

use crate::geometry::Polygon;
use crate::influence::InfluenceBuffer;
use crate::params::SimulationParams;
use crate::state::SimulationState;
use crate::tree::{AttractorScan, GrowthNode, scan_attractor};
use glam::Vec2;

/// Advances `state` by one growth step and returns the number of nodes
/// added.
///
/// A completed state is left untouched and the call returns 0; completion
/// is terminal. Completion is set when the attractor set runs empty, when
/// a step adds nothing, or when the node arena has reached
/// `params.max_nodes` — evaluated only here, after the growth phase, so a
/// state initialized at capacity still takes one (empty) step to report
/// itself complete.
pub fn step_simulation(state: &mut SimulationState, params: &SimulationParams) -> usize {
    if state.completed {
        return 0;
    }

    let kill_r2 = params.kill_radius * params.kill_radius;
    let influence_r2 = params.influence_radius * params.influence_radius;

    // Scan: kill marks and per-node influence accumulation. The buffer is
    // per-step scratch sized to the arena before any growth.
    let mut acc = InfluenceBuffer::with_len(state.nodes.len());
    let mut consumed = vec![false; state.attractors.len()];
    for (i, &attractor) in state.attractors.iter().enumerate() {
        match scan_attractor(&state.nodes, attractor, kill_r2, influence_r2) {
            AttractorScan::Kill => consumed[i] = true,
            AttractorScan::Influence(id) => {
                let dir = (attractor - state.nodes[id].pos).normalize_or_zero();
                acc.add(id, dir);
            }
            AttractorScan::Unclaimed => {}
        }
    }

    // Prune consumed attractors, preserving survivor order.
    let mut idx = 0;
    state.attractors.retain(|_| {
        let keep = !consumed[idx];
        idx += 1;
        keep
    });

    // Grow from influenced nodes in ascending index order.
    let mut added = 0;
    for id in acc.influenced_indices() {
        if state.nodes.len() >= params.max_nodes {
            // Capacity ran out mid-loop; remaining influenced nodes are
            // skipped, not deferred.
            break;
        }

        let mut dir = acc.avg_dir(id).normalize_or_zero();
        dir = (dir + params.tropism).normalize_or_zero();
        let candidate = state.nodes[id].pos + dir * params.step_size;

        if !state.bounds.contains(candidate) {
            continue;
        }
        if params.avoid_obstacles && blocked(&state.obstacles, state.nodes[id].pos, candidate) {
            continue;
        }

        state.nodes.push(GrowthNode::new_child(candidate, id));
        added += 1;
    }

    // Finalize: completion is sticky.
    state.iterations += 1;
    if state.attractors.is_empty() || added == 0 || state.nodes.len() >= params.max_nodes {
        state.completed = true;
    }
    added
}

/// Whether growing from `from` to `to` would cross into or through any
/// obstacle polygon.
fn blocked(obstacles: &[Polygon], from: Vec2, to: Vec2) -> bool {
    obstacles
        .iter()
        .any(|poly| poly.intersects_segment(from, to) || poly.contains(to))
}
