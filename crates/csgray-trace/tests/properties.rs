//! Behavior shared by every geometry: monotone refinement, repeatability,
//! untouched records on a miss, and CSG surfaces that never expose interior
//! crossings.

use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use csgray_math::{Point3, Vec3};
use csgray_trace::{
    collect_intersections, CsgOp, Cube, Geometry, Intersection, Plane, Ray, Sphere,
    TraceSettings,
};

fn scene() -> Vec<Arc<dyn Geometry>> {
    let a = Arc::new(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0));
    let b = Arc::new(Sphere::new(Point3::new(0.8, 0.3, 0.0), 1.0));
    let cube = Arc::new(Cube::new(Point3::new(0.0, 0.0, 0.0), 1.6));
    vec![
        Arc::new(Plane::new(-2.0)),
        a.clone(),
        cube.clone(),
        Arc::new(CsgOp::union(a.clone(), b.clone())),
        Arc::new(CsgOp::intersection(a.clone(), cube.clone())),
        Arc::new(CsgOp::difference(cube, b)),
    ]
}

/// Rays from a ring of origins aimed roughly at the origin.
fn probe_rays() -> Vec<Ray> {
    let mut rays = Vec::new();
    for i in 0..24 {
        let angle = i as f64 * std::f64::consts::TAU / 24.0;
        let origin = Point3::new(
            5.0 * angle.cos(),
            0.7 * (i as f64 * 0.37).sin(),
            5.0 * angle.sin(),
        );
        for j in 0..5 {
            let offset = j as f64 - 2.0;
            let target = Point3::new(0.3 * offset, 0.2 * offset, 0.1 * j as f64);
            rays.push(Ray::new(origin, target - origin));
        }
    }
    rays
}

#[test]
fn test_hits_strictly_reduce_distance() {
    for geometry in scene() {
        for ray in probe_rays() {
            let bound = 50.0;
            let mut hit = Intersection::within(bound);
            if geometry.intersect(&ray, &mut hit) {
                assert!(hit.dist < bound);
                assert!(hit.dist >= 0.0);
                assert!(hit.owner.is_some());

                // The same hit cannot beat itself
                let before = hit;
                assert!(!geometry.intersect(&ray, &mut hit));
                assert_eq!(hit, before);
            }
        }
    }
}

#[test]
fn test_repeated_queries_agree() {
    for geometry in scene() {
        for ray in probe_rays() {
            let mut first = Intersection::new();
            let mut second = Intersection::new();
            let found_first = geometry.intersect(&ray, &mut first);
            let found_second = geometry.intersect(&ray, &mut second);
            assert_eq!(found_first, found_second);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_miss_leaves_record_untouched() {
    let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    for geometry in scene() {
        let mut hit = Intersection::within(100.0);
        assert!(!geometry.intersect(&ray, &mut hit));
        assert_eq!(hit, Intersection::within(100.0));
    }
}

#[test]
fn test_sphere_entry_distance() {
    let center = Point3::new(1.0, -2.0, 3.0);
    let sphere = Sphere::new(center, 1.5);
    let start = Point3::new(7.0, 1.0, -1.0);
    let ray = Ray::new(start, center - start);

    let mut hit = Intersection::new();
    assert!(sphere.intersect(&ray, &mut hit));
    assert_relative_eq!(hit.dist, (start - center).norm() - 1.5, epsilon = 1e-9);
    assert_relative_eq!(hit.normal.dot(ray.direction.as_ref()), -1.0, epsilon = 1e-9);
}

#[test]
fn test_plane_basic_case() {
    let plane = Plane::new(0.0);
    let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
    let mut hit = Intersection::new();
    assert!(plane.intersect(&ray, &mut hit));
    assert_relative_eq!(hit.dist, 5.0);
    assert_relative_eq!((hit.point - Point3::origin()).norm(), 0.0);
    assert_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_cube_enumerates_entry_and_exit() {
    let cube = Cube::new(Point3::origin(), 2.0);
    for axis in [Vec3::x(), Vec3::y(), Vec3::z()] {
        for dir in [axis, -axis] {
            let ray = Ray::new(Point3::from(-3.0 * dir), dir);
            let hits = collect_intersections(&cube, &ray, &TraceSettings::default());
            assert_eq!(hits.len(), 2);
            assert_relative_eq!(hits[0].dist, 2.0, epsilon = 1e-9);
            assert_relative_eq!(hits[1].dist - hits[0].dist, 2.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_union_never_exposes_interior() {
    let a = Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0);
    let b = Sphere::new(Point3::new(0.9, 0.2, 0.1), 1.1);
    let spheres = [(a.center, a.radius), (b.center, b.radius)];
    let union = CsgOp::union(Arc::new(a), Arc::new(b));

    let mut hits = 0;
    for ray in probe_rays() {
        let mut hit = Intersection::new();
        if union.intersect(&ray, &mut hit) {
            hits += 1;
            for (center, radius) in spheres {
                assert!((hit.point - center).norm() > radius - 1e-6);
            }
        }
    }
    assert!(hits > 0);
}

#[test]
fn test_difference_exits_cutter_inside_target() {
    let target = Arc::new(Cube::new(Point3::origin(), 2.0));
    let cutter = Arc::new(Sphere::new(Point3::new(-1.0, 0.0, 0.0), 1.2));
    let carved = CsgOp::difference(target, cutter.clone());

    let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let mut hit = Intersection::new();
    assert!(carved.intersect(&ray, &mut hit));
    assert_relative_eq!(hit.point.x, 0.2, epsilon = 1e-9);
    assert_eq!(hit.owner, Some(cutter.id()));

    // A cutter that outlasts the target leaves nothing along this ray
    let swallowing = Arc::new(Sphere::new(Point3::new(-1.0, 0.0, 0.0), 3.0));
    let emptied = CsgOp::difference(Arc::new(Cube::new(Point3::origin(), 2.0)), swallowing);
    let mut hit = Intersection::new();
    assert!(!emptied.intersect(&ray, &mut hit));
}

#[test]
fn test_miss_both_children() {
    let csg = CsgOp::union(
        Arc::new(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0)),
        Arc::new(Cube::new(Point3::new(3.0, 0.0, 0.0), 1.0)),
    );
    let ray = Ray::new(Point3::new(-5.0, 4.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let mut hit = Intersection::within(42.0);
    assert!(!csg.intersect(&ray, &mut hit));
    assert_eq!(hit, Intersection::within(42.0));
}

#[test]
fn test_shared_geometry_across_threads() {
    let shared: Arc<dyn Geometry> = Arc::new(CsgOp::intersection(
        Arc::new(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0)),
        Arc::new(Sphere::new(Point3::new(1.0, 0.0, 0.0), 1.0)),
    ));
    let rays = probe_rays();

    let expected: Vec<Intersection> = rays
        .iter()
        .map(|ray| {
            let mut hit = Intersection::new();
            shared.intersect(ray, &mut hit);
            hit
        })
        .collect();

    thread::scope(|scope| {
        for chunk in 0..4 {
            let shared = &shared;
            let rays = &rays;
            let expected = &expected;
            scope.spawn(move || {
                for (ray, want) in rays.iter().zip(expected).skip(chunk).step_by(4) {
                    let mut hit = Intersection::new();
                    shared.intersect(ray, &mut hit);
                    assert_eq!(&hit, want);
                }
            });
        }
    });
}
