//! Ray-plane intersection (closed-form).

use csgray_math::{Point2, Tolerance, Vec3};

use crate::{Geometry, GeometryId, Intersection, Ray};

/// An infinite horizontal plane at height `y`.
///
/// The plane has no inside, so as a CSG child it only behaves when the ray
/// starts on a consistent side.
#[derive(Debug)]
pub struct Plane {
    /// Height of the plane.
    pub y: f64,
    id: GeometryId,
}

impl Plane {
    /// Create the plane `Y = y`.
    pub fn new(y: f64) -> Self {
        Self {
            y,
            id: GeometryId::next(),
        }
    }
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray, hit: &mut Intersection) -> bool {
        let tol = Tolerance::DEFAULT;
        let start_y = ray.origin.y;
        let dir_y = ray.direction.as_ref().y;

        // Heading away from the plane, or (nearly) parallel to it
        if (start_y > self.y && dir_y > -tol.parallel)
            || (start_y < self.y && dir_y < tol.parallel)
        {
            return false;
        }

        let t = (start_y - self.y) / -dir_y;
        if !hit.improves(t) {
            return false;
        }

        let point = ray.at(t);
        hit.dist = t;
        hit.point = point;
        hit.normal = Vec3::new(0.0, 1.0, 0.0);
        hit.uv = Point2::new(point.x, point.z);
        hit.owner = Some(self.id);
        true
    }

    fn id(&self) -> GeometryId {
        self.id
    }
}
