use crate::types::NodeId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in the growth structure.
///
/// Nodes live in a single append-only arena (`SimulationState::nodes`);
/// `parent`, when present, indexes an earlier node in that arena, so the
/// structure is an acyclic forest by construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthNode {
    pub pos: Vec2,
    pub parent: Option<NodeId>,
}

impl GrowthNode {
    pub fn new_seed(pos: Vec2) -> Self {
        Self { pos, parent: None }
    }

    pub fn new_child(pos: Vec2, parent: NodeId) -> Self {
        Self {
            pos,
            parent: Some(parent),
        }
    }
}

/// Outcome of scanning the node arena for one attractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttractorScan {
    /// Some node is within kill distance; the attractor is consumed.
    Kill,
    /// The nearest node strictly within influence distance.
    Influence(NodeId),
    /// No node close enough to kill or influence.
    Unclaimed,
}

/// Scans all nodes once for a single attractor at `pos`.
///
/// A node within `kill_r2` (squared kill radius) wins immediately and
/// short-circuits the scan: kill takes priority over influence. Otherwise
/// the nearest node with squared distance strictly below `influence_r2`
/// is reported; ties keep the first node found in index order, because
/// only a strictly smaller distance replaces the current best.
pub fn scan_attractor(
    nodes: &[GrowthNode],
    pos: Vec2,
    kill_r2: f32,
    influence_r2: f32,
) -> AttractorScan {
    let mut best: Option<NodeId> = None;
    let mut best_d2 = influence_r2;
    for (id, node) in nodes.iter().enumerate() {
        let d2 = (node.pos - pos).length_squared();
        if d2 <= kill_r2 {
            return AttractorScan::Kill;
        }
        if d2 < best_d2 {
            best_d2 = d2;
            best = Some(id);
        }
    }
    match best {
        Some(id) => AttractorScan::Influence(id),
        None => AttractorScan::Unclaimed,
    }
}
