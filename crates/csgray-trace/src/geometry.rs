//! The intersection capability shared by primitives and CSG nodes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Intersection, Ray};

/// Identity of one geometry instance.
///
/// Allocated once when a shape is constructed. Two shapes with identical
/// parameters still have different ids, so ids compare instances, not
/// shapes. Shapes are not `Clone`, which keeps an id tied to one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryId(u64);

impl GeometryId {
    /// Allocate a fresh, process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something a ray can hit.
///
/// Implementations are immutable after construction and may be shared
/// read-only across threads; each in-flight query owns its own record.
pub trait Geometry: Send + Sync + fmt::Debug {
    /// Refine `hit` with this geometry's nearest intersection along `ray`.
    ///
    /// On `true`, `hit.dist` is strictly smaller than on entry and every
    /// other field describes the new hit. On `false`, `hit` is unchanged.
    fn intersect(&self, ray: &Ray, hit: &mut Intersection) -> bool;

    /// Identity of this instance.
    fn id(&self) -> GeometryId;
}
