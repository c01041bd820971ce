//! Bounded regions and obstacle polygons.
//!
//! Provides the geometric predicates the growth algorithm depends on:
//! point-in-polygon containment (even-odd ray casting), segment against
//! polygon intersection (orientation tests), and rejection-sampled
//! generation of organic-looking obstacle polygons inside a [`Bounds`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tolerance for the orientation predicate; cross products smaller than
/// this are treated as colinear.
const ORIENT_EPS: f32 = 1e-6;

/// An axis-aligned region `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `p` lies inside the region, borders included.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// A closed polygon given as an ordered vertex list.
///
/// The last vertex connects back to the first implicitly. At least three
/// vertices are expected; no non-self-intersection guarantee is made or
/// required by any consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    /// Even-odd point containment via horizontal ray casting.
    ///
    /// Counts crossings of a ray through `p.y`; a tiny epsilon on the
    /// edge's y-span denominator keeps horizontal edges from dividing by
    /// zero without a special case.
    pub fn contains(&self, p: Vec2) -> bool {
        let verts = &self.vertices;
        let n = verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = verts[i];
            let b = verts[j];
            if (a.y > p.y) != (b.y > p.y)
                && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y + 1e-12) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Tests whether the segment `a -> b` crosses any edge of the polygon.
    ///
    /// Shared endpoints and overlapping colinear segments count as
    /// intersecting.
    pub fn intersects_segment(&self, a: Vec2, b: Vec2) -> bool {
        let verts = &self.vertices;
        let n = verts.len();
        let mut j = n - 1;
        for i in 0..n {
            if segments_intersect(a, b, verts[j], verts[i]) {
                return true;
            }
            j = i;
        }
        false
    }
}

/// Sign of the turn `a -> b -> c`: `1` clockwise, `-1` counter-clockwise,
/// `0` colinear.
#[inline]
fn orientation(a: Vec2, b: Vec2, c: Vec2) -> i8 {
    let cross = (b - a).perp_dot(c - a);
    if cross.abs() < ORIENT_EPS {
        0
    } else if cross > 0.0 {
        1
    } else {
        -1
    }
}

/// Whether `p`, known to be colinear with `a -> b`, lies on that segment.
#[inline]
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Proper and degenerate intersection of segments `p1 -> p2` and `p3 -> p4`.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Colinear special cases: endpoint touching or overlap.
    (o1 == 0 && on_segment(p1, p2, p3))
        || (o2 == 0 && on_segment(p1, p2, p4))
        || (o3 == 0 && on_segment(p3, p4, p1))
        || (o4 == 0 && on_segment(p3, p4, p2))
}

/// Settings for [`generate_polygons`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub count: usize,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub margin: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            count: 3,
            min_vertices: 5,
            max_vertices: 9,
            min_radius: 20.0,
            max_radius: 60.0,
            margin: 20.0,
        }
    }
}

/// Generates up to `cfg.count` random obstacle polygons inside `bounds`.
///
/// Each attempt picks a vertex count and base radius uniformly in their
/// configured ranges, a center such that the base circle fits within
/// `cfg.margin` of the bounds, and that many vertices at ascending random
/// angles with the per-vertex radius jittered to 65%–100% of the base, so
/// outlines look organic rather than circular. A polygon is accepted only
/// if every vertex lies within the margin-inset bounds.
///
/// Sampling gives up after `cfg.count * 20` total attempts; returning
/// fewer polygons than requested is expected, not an error.
pub fn generate_polygons(bounds: Bounds, cfg: &ObstacleConfig, rng: &mut impl Rng) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(cfg.count);
    let max_attempts = cfg.count * 20;
    let mut attempts = 0;

    while polygons.len() < cfg.count && attempts < max_attempts {
        attempts += 1;

        let vertex_count = rng.random_range(cfg.min_vertices..=cfg.max_vertices);
        let radius = rng.random_range(cfg.min_radius..=cfg.max_radius);

        // The base circle must fit inside the margin inset.
        let lo = cfg.margin + radius;
        let hi_x = bounds.width - cfg.margin - radius;
        let hi_y = bounds.height - cfg.margin - radius;
        if hi_x <= lo || hi_y <= lo {
            continue;
        }
        let center = Vec2::new(rng.random_range(lo..hi_x), rng.random_range(lo..hi_y));

        let mut angles: Vec<f32> = (0..vertex_count)
            .map(|_| rng.random_range(0.0..std::f32::consts::TAU))
            .collect();
        angles.sort_by(f32::total_cmp);

        let vertices: Vec<Vec2> = angles
            .iter()
            .map(|&angle| {
                let r = radius * rng.random_range(0.65..=1.0);
                center + Vec2::new(angle.cos(), angle.sin()) * r
            })
            .collect();

        let inset_ok = vertices.iter().all(|v| {
            v.x >= cfg.margin
                && v.x <= bounds.width - cfg.margin
                && v.y >= cfg.margin
                && v.y <= bounds.height - cfg.margin
        });
        if inset_ok {
            polygons.push(Polygon::new(vertices));
        }
    }

    polygons
}
