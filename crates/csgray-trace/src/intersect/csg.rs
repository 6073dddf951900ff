//! Constructive solid geometry by sweeping every crossing along the ray.
//!
//! A CSG node does not know the shape of its children. It walks each child
//! for all of its surface crossings, merges both lists by distance, and
//! replays them while tracking whether the ray is inside each child. The
//! first crossing that changes membership of the combined solid is where the
//! ray meets its surface.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::{trace, warn};

use crate::{Geometry, GeometryId, Intersection, Ray, TraceSettings};

/// Membership rule deciding which points belong to the combined solid.
#[derive(Clone, Copy)]
pub enum BooleanOp {
    /// Inside either child.
    Union,
    /// Inside both children.
    Intersection,
    /// Inside the left child but not the right one.
    Difference,
    /// Any rule over `(in_left, in_right)`.
    Custom(fn(bool, bool) -> bool),
}

impl BooleanOp {
    /// Whether a point inside/outside each child lies in the combined solid.
    #[inline]
    pub fn contains(self, in_left: bool, in_right: bool) -> bool {
        match self {
            BooleanOp::Union => in_left || in_right,
            BooleanOp::Intersection => in_left && in_right,
            BooleanOp::Difference => in_left && !in_right,
            BooleanOp::Custom(rule) => rule(in_left, in_right),
        }
    }
}

impl fmt::Debug for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanOp::Union => f.write_str("Union"),
            BooleanOp::Intersection => f.write_str("Intersection"),
            BooleanOp::Difference => f.write_str("Difference"),
            BooleanOp::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Which child a crossing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Debug)]
struct SweepEvent {
    hit: Intersection,
    side: Side,
}

/// Collect every crossing of `geometry` along `ray`, nearest first.
///
/// Each round probes with a fresh unbounded record, then restarts just past
/// the hit. Distances are measured from the starting ray origin, including
/// the advance steps. Stops at the first miss or after
/// `settings.max_hits_per_child` crossings.
pub fn collect_intersections(
    geometry: &dyn Geometry,
    ray: &Ray,
    settings: &TraceSettings,
) -> Vec<Intersection> {
    let mut hits = Vec::new();
    let mut probe_ray = *ray;
    let mut walked = 0.0;

    while hits.len() < settings.max_hits_per_child {
        let mut probe = Intersection::new();
        if !geometry.intersect(&probe_ray, &mut probe) {
            return hits;
        }

        probe_ray = probe_ray.advanced_past(&probe.point, settings.advance_epsilon);
        probe.dist += walked;
        walked = probe.dist + settings.advance_epsilon;
        hits.push(probe);
    }

    warn!(
        "stopped enumerating {} after {} crossings; insideness may be wrong",
        geometry.id(),
        hits.len()
    );
    hits
}

/// A boolean combination of two geometries.
///
/// Children must be closed surfaces: a ray starting outside crosses each an
/// even number of times. Hits reported by a CSG node keep the owner of the
/// primitive whose surface was crossed.
pub struct CsgOp {
    left: Arc<dyn Geometry>,
    right: Arc<dyn Geometry>,
    op: BooleanOp,
    settings: TraceSettings,
    id: GeometryId,
}

impl CsgOp {
    /// Combine `left` and `right` under `op` with default settings.
    pub fn new(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>, op: BooleanOp) -> Self {
        Self {
            left,
            right,
            op,
            settings: TraceSettings::default(),
            id: GeometryId::next(),
        }
    }

    /// Points inside either child.
    pub fn union(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>) -> Self {
        Self::new(left, right, BooleanOp::Union)
    }

    /// Points inside both children.
    pub fn intersection(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>) -> Self {
        Self::new(left, right, BooleanOp::Intersection)
    }

    /// Points inside `left` but not `right`.
    pub fn difference(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>) -> Self {
        Self::new(left, right, BooleanOp::Difference)
    }

    /// Replace the enumeration settings.
    pub fn with_settings(mut self, settings: TraceSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Geometry for CsgOp {
    fn intersect(&self, ray: &Ray, hit: &mut Intersection) -> bool {
        let left_hits = collect_intersections(self.left.as_ref(), ray, &self.settings);
        let right_hits = collect_intersections(self.right.as_ref(), ray, &self.settings);

        // An odd number of crossings means the ray starts inside that child
        let mut in_left = left_hits.len() % 2 == 1;
        let mut in_right = right_hits.len() % 2 == 1;
        let inside = self.op.contains(in_left, in_right);

        let mut events: Vec<SweepEvent> = left_hits
            .into_iter()
            .map(|hit| SweepEvent { hit, side: Side::Left })
            .chain(
                right_hits
                    .into_iter()
                    .map(|hit| SweepEvent { hit, side: Side::Right }),
            )
            .collect();
        events.sort_by(|a, b| a.hit.dist.partial_cmp(&b.hit.dist).unwrap_or(Ordering::Equal));

        for event in &events {
            match event.side {
                Side::Left => in_left = !in_left,
                Side::Right => in_right = !in_right,
            }

            let now_inside = self.op.contains(in_left, in_right);
            if now_inside == inside {
                continue;
            }

            // First change of membership is the surface of the combined solid
            if !hit.improves(event.hit.dist) {
                trace!(
                    "csg {}: surface at {} is not nearer than {}",
                    self.id,
                    event.hit.dist,
                    hit.dist
                );
                return false;
            }
            *hit = event.hit;
            return true;
        }

        false
    }

    fn id(&self) -> GeometryId {
        self.id
    }
}

impl fmt::Debug for CsgOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsgOp")
            .field("id", &self.id)
            .field("op", &self.op)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
