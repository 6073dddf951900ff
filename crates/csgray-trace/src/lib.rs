#![warn(missing_docs)]

//! Ray intersection and CSG evaluation for the csgray ray tracer.
//!
//! Every shape implements [`Geometry`]: given a ray and an
//! [`Intersection`] record holding the best distance found so far, it either
//! finds a strictly nearer hit and overwrites the record, or leaves the
//! record untouched and returns `false`.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray with origin and unit direction
//! - [`Intersection`] - Closest-so-far hit record threaded through every call
//! - [`Geometry`] - The intersection capability, with [`GeometryId`] identity
//! - [`intersect`] - Plane, sphere and cube testers and the [`CsgOp`] node
//! - [`TraceSettings`] - Tunables for CSG hit enumeration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use csgray_math::{Point3, Vec3};
//! use csgray_trace::{CsgOp, Geometry, Intersection, Ray, Sphere};
//!
//! let lens = CsgOp::intersection(
//!     Arc::new(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0)),
//!     Arc::new(Sphere::new(Point3::new(1.0, 0.0, 0.0), 1.0)),
//! );
//!
//! let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
//! let mut hit = Intersection::new();
//! assert!(lens.intersect(&ray, &mut hit));
//! assert!((hit.dist - 5.0).abs() < 1e-9);
//! ```

pub mod error;
mod geometry;
pub mod intersect;
mod ray;
pub mod settings;

pub use error::{Result, TraceError};
pub use geometry::{Geometry, GeometryId};
pub use intersect::{collect_intersections, BooleanOp, CsgOp, Cube, Plane, Sphere};
pub use ray::{Intersection, Ray};
pub use settings::TraceSettings;
