//! Built-in demo solids.

use std::sync::Arc;

use anyhow::{Context, Result};
use csgray_math::Point3;
use csgray_trace::{BooleanOp, CsgOp, Cube, Geometry, GeometryId, Plane, Sphere, TraceSettings};

/// Names and one-line descriptions of every demo solid.
pub const DEMOS: &[(&str, &str)] = &[
    ("plane", "floor plane at y = 0"),
    ("sphere", "unit sphere at the origin"),
    ("cube", "cube of side 2 at the origin"),
    ("lens", "intersection of two overlapping unit spheres"),
    ("pair", "union of two overlapping unit spheres"),
    ("die", "cube with its corners rounded off by a sphere"),
    ("dimple", "cube with a spherical dent in its top face"),
    ("rattle", "hollowed cube with a ball inside"),
];

/// A demo solid plus labels for the primitives a hit can report.
pub struct Demo {
    /// Root of the solid.
    pub geometry: Arc<dyn Geometry>,
    labels: Vec<(GeometryId, &'static str)>,
}

impl Demo {
    /// Label of the primitive with this id, if it belongs to the demo.
    pub fn label(&self, id: GeometryId) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, label)| *label)
    }
}

/// Tracks primitive labels while a demo is assembled.
struct Builder {
    settings: TraceSettings,
    labels: Vec<(GeometryId, &'static str)>,
}

impl Builder {
    fn sphere(&mut self, label: &'static str, center: Point3, radius: f64) -> Result<Arc<Sphere>> {
        let sphere = Sphere::try_new(center, radius).with_context(|| format!("building {label}"))?;
        self.labels.push((sphere.id(), label));
        Ok(Arc::new(sphere))
    }

    fn cube(&mut self, label: &'static str, center: Point3, side: f64) -> Result<Arc<Cube>> {
        let cube = Cube::try_new(center, side).with_context(|| format!("building {label}"))?;
        self.labels.push((cube.id(), label));
        Ok(Arc::new(cube))
    }

    fn csg(
        &self,
        left: Arc<dyn Geometry>,
        right: Arc<dyn Geometry>,
        op: BooleanOp,
    ) -> Arc<CsgOp> {
        Arc::new(CsgOp::new(left, right, op).with_settings(self.settings))
    }
}

/// Build the demo called `name`.
pub fn build(name: &str, settings: TraceSettings) -> Result<Demo> {
    let mut b = Builder {
        settings,
        labels: Vec::new(),
    };
    let origin = Point3::origin();

    let geometry: Arc<dyn Geometry> = match name {
        "plane" => {
            let plane = Plane::new(0.0);
            b.labels.push((plane.id(), "floor"));
            Arc::new(plane)
        }
        "sphere" => b.sphere("ball", origin, 1.0)?,
        "cube" => b.cube("box", origin, 2.0)?,
        "lens" => {
            let left = b.sphere("left lobe", origin, 1.0)?;
            let right = b.sphere("right lobe", Point3::new(1.0, 0.0, 0.0), 1.0)?;
            b.csg(left, right, BooleanOp::Intersection)
        }
        "pair" => {
            let left = b.sphere("left ball", origin, 1.0)?;
            let right = b.sphere("right ball", Point3::new(1.0, 0.0, 0.0), 1.0)?;
            b.csg(left, right, BooleanOp::Union)
        }
        "die" => {
            let body = b.cube("die body", origin, 2.0)?;
            let rounding = b.sphere("rounded corner", origin, 1.35)?;
            b.csg(body, rounding, BooleanOp::Intersection)
        }
        "dimple" => {
            let body = b.cube("block", origin, 2.0)?;
            let dent = b.sphere("dent", Point3::new(0.0, 1.2, 0.0), 0.6)?;
            b.csg(body, dent, BooleanOp::Difference)
        }
        "rattle" => {
            let shell = b.cube("shell", origin, 2.0)?;
            let cavity = b.sphere("cavity", origin, 0.9)?;
            let hollow = b.csg(shell, cavity, BooleanOp::Difference);
            let ball = b.sphere("ball", origin, 0.4)?;
            b.csg(hollow, ball, BooleanOp::Union)
        }
        _ => anyhow::bail!("unknown shape '{name}' (try `csgray shapes`)"),
    };

    Ok(Demo {
        geometry,
        labels: b.labels,
    })
}
