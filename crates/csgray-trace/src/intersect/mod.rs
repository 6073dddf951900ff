//! Ray intersection algorithms.
//!
//! Each primitive solves its own closed-form equation. [`CsgOp`] combines
//! any two geometries by enumerating every crossing along the ray.

mod csg;
mod cube;
mod plane;
mod sphere;

pub use csg::{collect_intersections, BooleanOp, CsgOp};
pub use cube::Cube;
pub use plane::Plane;
pub use sphere::Sphere;
