use crate::types::NodeId;
use glam::Vec2;

/// Per-step scratch accumulator of attractor influence per node.
///
/// For each node index this buffer stores the sum of incoming unit
/// direction vectors and the number of contributions, so the growth phase
/// can query the **average** pull direction per influenced node.
///
/// The buffer is rebuilt for every step, sized to the node arena at the
/// start of that step; it is never shared between steps or instances.
#[derive(Debug)]
pub struct InfluenceBuffer {
    /// Accumulated direction vectors for each node.
    dir: Vec<Vec2>,
    /// Number of contributions for each node.
    count: Vec<u32>,
}

impl InfluenceBuffer {
    /// Creates a cleared buffer covering `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self {
            dir: vec![Vec2::ZERO; len],
            count: vec![0; len],
        }
    }

    /// Adds one directional influence for the given node.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds for the internal arrays.
    #[inline]
    pub fn add(&mut self, id: NodeId, dir: Vec2) {
        self.dir[id] += dir;
        self.count[id] += 1;
    }

    /// Average influence direction for a node, or `Vec2::ZERO` if the
    /// node received no contributions.
    #[inline]
    pub fn avg_dir(&self, id: NodeId) -> Vec2 {
        let c = self.count[id];
        if c == 0 {
            Vec2::ZERO
        } else {
            self.dir[id] / (c as f32)
        }
    }

    /// Returns `true` if the given node has received any influences.
    #[inline]
    pub fn is_influenced(&self, id: NodeId) -> bool {
        self.count[id] > 0
    }

    /// Iterator over influenced node indices, in ascending index order.
    ///
    /// The growth phase processes nodes in exactly this order; it is a
    /// deliberate contract of the algorithm, not an artifact of the
    /// container.
    pub fn influenced_indices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.count
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| if c > 0 { Some(i) } else { None })
    }
}
