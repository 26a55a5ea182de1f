#![allow(clippy::unwrap_used)]

use brushgeom::math::axis::{is_left, Side};
use brushgeom::math::hull_2d::{convex_hull_2d, ConvexHull2D};
use brushgeom::math::polygon_3d::polygon_contains_point;
use brushgeom::math::{Point3, Point3Of};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Vertex positions of a selection of brush vertices, interior ones included.
fn scattered_points() -> Vec<Point3> {
    vec![
        p(3.0, 1.0, 0.0),
        p(7.0, 2.0, 0.0),
        p(9.0, 6.0, 0.0),
        p(6.0, 9.0, 0.0),
        p(2.0, 8.0, 0.0),
        p(0.0, 4.0, 0.0),
        p(4.0, 4.0, 0.0),
        p(5.0, 6.0, 0.0),
        p(3.0, 5.0, 0.0),
        p(6.0, 4.0, 0.0),
        p(1.5, 2.5, 0.0),
    ]
}

#[test]
fn hull_encloses_every_input_point() {
    init_tracing();
    let points = scattered_points();
    let hull = convex_hull_2d(&points).unwrap();

    assert_eq!(hull.len(), 6);
    for point in &points {
        assert!(polygon_contains_point(point, &hull), "{point} outside hull");
    }
    for vertex in &hull {
        assert!(points.contains(vertex));
    }
}

#[test]
fn hull_turns_left_at_every_vertex() {
    init_tracing();
    let hull = convex_hull_2d(&scattered_points()).unwrap();
    let n = hull.len();
    for i in 0..n {
        let side = is_left(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]);
        assert_eq!(side, Side::Left, "non-convex turn at vertex {i}");
    }
}

#[test]
fn hull_is_idempotent() {
    init_tracing();
    let hull = convex_hull_2d(&scattered_points()).unwrap();
    assert_eq!(convex_hull_2d(&hull).unwrap(), hull);
}

#[test]
fn hull_on_tilted_plane() {
    init_tracing();
    // All points satisfy z = x + 2y.
    let lift = |x: f64, y: f64| p(x, y, x + 2.0 * y);
    let points = vec![
        lift(0.0, 0.0),
        lift(4.0, 0.0),
        lift(4.0, 4.0),
        lift(0.0, 4.0),
        lift(2.0, 2.0),
        lift(2.0, 0.0),
    ];
    let operation = ConvexHull2D::new(&points);
    let hull = operation.execute().unwrap();

    assert_eq!(hull.len(), 4);
    for corner in [lift(0.0, 0.0), lift(4.0, 0.0), lift(4.0, 4.0), lift(0.0, 4.0)] {
        assert!(hull.contains(&corner), "missing corner {corner}");
    }
    assert!(polygon_contains_point(&lift(2.0, 2.0), &hull));
}

#[test]
fn hull_in_single_precision() {
    init_tracing();
    let points: Vec<Point3Of<f32>> = vec![
        Point3Of::new(0.0, 0.0, 1.0),
        Point3Of::new(8.0, 8.0, 1.0),
        Point3Of::new(8.0, 0.0, 1.0),
        Point3Of::new(0.0, 8.0, 1.0),
        Point3Of::new(4.0, 4.0, 1.0),
    ];
    let hull = convex_hull_2d(&points).unwrap();
    assert_eq!(
        hull,
        vec![
            Point3Of::new(8.0, 0.0, 1.0),
            Point3Of::new(8.0, 8.0, 1.0),
            Point3Of::new(0.0, 8.0, 1.0),
            Point3Of::new(0.0, 0.0, 1.0),
        ]
    );
}
