//! Ray-cube intersection (three slab tests).

use csgray_math::{Axis, Point2, Point3, Tolerance, Vec3};

use crate::{Geometry, GeometryId, Intersection, Ray, Result, TraceError};

/// An axis-aligned cube with center and side length.
#[derive(Debug)]
pub struct Cube {
    /// Center of the cube.
    pub center: Point3,
    /// Side length.
    pub side: f64,
    id: GeometryId,
}

impl Cube {
    /// Create a cube. Parameters are not validated.
    pub fn new(center: Point3, side: f64) -> Self {
        Self {
            center,
            side,
            id: GeometryId::next(),
        }
    }

    /// Create a cube, rejecting non-positive or non-finite parameters.
    pub fn try_new(center: Point3, side: f64) -> Result<Self> {
        if !side.is_finite() || side <= 0.0 {
            return Err(TraceError::DegenerateShape(format!(
                "cube side must be positive, got {side}"
            )));
        }
        if !center.coords.iter().all(|c| c.is_finite()) {
            return Err(TraceError::DegenerateShape(
                "cube center must be finite".into(),
            ));
        }
        Ok(Self::new(center, side))
    }

    /// Test the two faces perpendicular to `axis`.
    ///
    /// The ray and center are swapped into a frame where `axis` is up, the
    /// faces are solved as bounded horizontal planes, and any accepted point
    /// and normal are swapped back to world axes.
    fn intersect_slab(&self, axis: Axis, ray: &Ray, hit: &mut Intersection) -> bool {
        let local = ray.swapped(axis);
        let center = axis.swap_point(&self.center);
        let dir_y = local.direction.as_ref().y;

        // Parallel to both faces
        if Tolerance::DEFAULT.is_parallel(dir_y) {
            return false;
        }

        let half = self.side * 0.5;
        let mut found = false;
        for sign in [-1.0, 1.0] {
            let face_y = center.y + sign * half;
            let t = (local.origin.y - face_y) / -dir_y;
            if t < 0.0 || !hit.improves(t) {
                continue;
            }

            let p = local.at(t);
            if p.x < center.x - half
                || p.x > center.x + half
                || p.z < center.z - half
                || p.z > center.z + half
            {
                continue;
            }

            hit.dist = t;
            hit.point = axis.swap_point(&p);
            hit.normal = axis.swap_vec(&Vec3::new(0.0, sign, 0.0));
            hit.uv = Point2::new(p.x - center.x, p.z - center.z);
            found = true;
        }
        found
    }
}

impl Geometry for Cube {
    fn intersect(&self, ray: &Ray, hit: &mut Intersection) -> bool {
        // Every slab gets a chance: the nearest of up to six faces wins
        let mut found = false;
        for axis in Axis::ALL {
            found |= self.intersect_slab(axis, ray, hit);
        }
        if found {
            hit.owner = Some(self.id);
        }
        found
    }

    fn id(&self) -> GeometryId {
        self.id
    }
}
