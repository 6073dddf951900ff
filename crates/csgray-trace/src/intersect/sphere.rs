//! Ray-sphere intersection (quadratic equation).

use std::f64::consts::PI;

use csgray_math::{Point2, Point3, Vec3};

use crate::{Geometry, GeometryId, Intersection, Ray, Result, TraceError};

/// A sphere with center and radius.
#[derive(Debug)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
    id: GeometryId,
}

impl Sphere {
    /// Create a sphere. Parameters are not validated.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius,
            id: GeometryId::next(),
        }
    }

    /// Create a sphere, rejecting non-positive or non-finite parameters.
    pub fn try_new(center: Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TraceError::DegenerateShape(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        if !center.coords.iter().all(|c| c.is_finite()) {
            return Err(TraceError::DegenerateShape(
                "sphere center must be finite".into(),
            ));
        }
        Ok(Self::new(center, radius))
    }

    /// Surface parameters of a point on the sphere.
    ///
    /// u = longitude in [0, 1], v = latitude in [0, 1] with v = 0 at the top.
    fn surface_uv(&self, point: &Point3) -> Point2 {
        let rel = point - self.center;
        let u = (PI + rel.z.atan2(rel.x)) / (2.0 * PI);
        // Rounding can push |rel.y| just past the radius at the poles
        let lat = (rel.y / self.radius).clamp(-1.0, 1.0).asin();
        let v = 1.0 - (PI / 2.0 + lat) / PI;
        Point2::new(u, v)
    }
}

impl Geometry for Sphere {
    fn intersect(&self, ray: &Ray, hit: &mut Intersection) -> bool {
        let oc = ray.origin - self.center;
        let d = ray.direction.as_ref();

        // Quadratic: |oc + t*d|^2 = r^2
        let a = d.dot(d);
        let b = 2.0 * oc.dot(d);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrt_disc = discriminant.sqrt();
        let near = (-b - sqrt_disc) / (2.0 * a);
        let far = (-b + sqrt_disc) / (2.0 * a);

        // Near root behind us means we are inside; far root behind us too
        // means the whole sphere is behind the ray.
        let t = if near >= 0.0 { near } else { far };
        if t < 0.0 || !hit.improves(t) {
            return false;
        }

        let point = ray.at(t);
        let normal: Vec3 = (point - self.center).normalize();
        hit.dist = t;
        hit.point = point;
        hit.normal = normal;
        hit.uv = self.surface_uv(&point);
        hit.owner = Some(self.id);
        true
    }

    fn id(&self) -> GeometryId {
        self.id
    }
}
