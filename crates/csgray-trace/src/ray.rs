//! Ray representation and the closest-hit record.

use csgray_math::{Axis, Dir3, Point2, Point3, Vec3};

use crate::{GeometryId, Result, TraceError};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized, so every ray parameter `t` is a
    /// distance in world units.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Like [`Ray::new`], but rejects zero-length or non-finite directions.
    pub fn try_new(origin: Point3, direction: Vec3) -> Result<Self> {
        let len = direction.norm();
        if !len.is_finite() || len == 0.0 {
            return Err(TraceError::DegenerateDirection);
        }
        Ok(Self::new(origin, direction))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// Same direction, origin moved `epsilon` past `point`.
    #[inline]
    pub fn advanced_past(&self, point: &Point3, epsilon: f64) -> Self {
        Self {
            origin: point + epsilon * self.direction.as_ref(),
            direction: self.direction,
        }
    }

    /// This ray with `axis` swapped into the Y ("up") role.
    #[inline]
    pub fn swapped(&self, axis: Axis) -> Self {
        Self {
            origin: axis.swap_point(&self.origin),
            direction: axis.swap_dir(&self.direction),
        }
    }
}

/// Closest-so-far intersection for one ray query.
///
/// `dist` is both the acceptance bound and the "nothing found yet" sentinel:
/// a tester only writes the other fields together with a strictly smaller
/// `dist`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the best hit, or the maximum distance of interest.
    pub dist: f64,
    /// World-space hit location.
    pub point: Point3,
    /// Outward surface normal at the hit.
    pub normal: Vec3,
    /// Surface parameterization coordinates `(u, v)`.
    pub uv: Point2,
    /// Primitive that produced the hit.
    pub owner: Option<GeometryId>,
}

impl Intersection {
    /// An empty record accepting hits at any distance.
    pub fn new() -> Self {
        Self::within(f64::INFINITY)
    }

    /// An empty record accepting only hits nearer than `max_dist`.
    pub fn within(max_dist: f64) -> Self {
        Self {
            dist: max_dist,
            point: Point3::origin(),
            normal: Vec3::zeros(),
            uv: Point2::origin(),
            owner: None,
        }
    }

    /// Whether a candidate at parameter `t` beats the current best.
    ///
    /// NaN never improves.
    #[inline]
    pub fn improves(&self, t: f64) -> bool {
        t < self.dist
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::new()
    }
}
