#![warn(missing_docs)]

//! Math types for the csgray intersection engine.
//!
//! Thin wrappers around nalgebra providing the point, vector and direction
//! types shared by every tester, plus the axis swaps used by slab tests and
//! the numeric tolerances that guard divisions.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D surface-parameter space.
pub type Point2 = nalgebra::Point2<f64>;

/// A world coordinate axis.
///
/// Slab tests are written once for the Y ("up") axis. Testing the faces
/// perpendicular to another axis swaps that axis with Y, runs the Y test, and
/// swaps the result back. Every swap is its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All three axes, Y first.
    pub const ALL: [Axis; 3] = [Axis::Y, Axis::X, Axis::Z];

    /// Swap this axis' component of `v` with its Y component.
    #[inline]
    pub fn swap_vec(self, v: &Vec3) -> Vec3 {
        match self {
            Axis::X => Vec3::new(v.y, v.x, v.z),
            Axis::Y => *v,
            Axis::Z => Vec3::new(v.x, v.z, v.y),
        }
    }

    /// Swap this axis' coordinate of `p` with its Y coordinate.
    #[inline]
    pub fn swap_point(self, p: &Point3) -> Point3 {
        Point3::from(self.swap_vec(&p.coords))
    }

    /// Swap a unit direction. Permuting components preserves length.
    #[inline]
    pub fn swap_dir(self, d: &Dir3) -> Dir3 {
        Dir3::new_unchecked(self.swap_vec(d.as_ref()))
    }
}

/// Tolerance constants for intersection arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Direction components below this magnitude count as parallel to a
    /// plane or slab, and the division is skipped.
    pub parallel: f64,
    /// Distance a re-probing ray is pushed past a previous hit.
    pub advance: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 parallel guard, 1e-6 advance).
    pub const DEFAULT: Self = Self {
        parallel: 1e-9,
        advance: 1e-6,
    };

    /// Check if a direction component is too small to divide by.
    pub fn is_parallel(&self, component: f64) -> bool {
        component.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
