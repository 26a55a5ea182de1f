//! Brushgeom picking demo: casts a few camera rays at a brush and prints
//! what they hit, then builds the hull of a vertex selection.
//!
//! Usage:
//! ```text
//! cargo run --example picking
//! RUST_LOG=brushgeom=trace cargo run --example picking
//! ```

use brushgeom::geometry::{BBox3, Ray3};
use brushgeom::math::hull_2d::ConvexHull2D;
use brushgeom::math::intersect_3d::{intersect_ray_bbox, intersect_ray_sphere};
use brushgeom::math::polygon_3d::intersect_ray_polygon;
use brushgeom::math::Point3;

fn main() -> brushgeom::Result<()> {
    // Default: WARN for everything, INFO for the kernel and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=brushgeom=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("picking=info".parse().unwrap_or_default())
        .add_directive("brushgeom=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let bounds = BBox3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(64.0, 64.0, 32.0))?;
    let top_face = [
        Point3::new(0.0, 0.0, 32.0),
        Point3::new(0.0, 64.0, 32.0),
        Point3::new(64.0, 64.0, 32.0),
        Point3::new(64.0, 0.0, 32.0),
    ];
    let handle = Point3::new(32.0, 32.0, 40.0);

    let camera = Point3::new(-100.0, -100.0, 200.0);
    for target in [
        Point3::new(32.0, 32.0, 32.0),
        Point3::new(10.0, 50.0, 32.0),
        Point3::new(200.0, 0.0, 0.0),
    ] {
        let ray = Ray3::new(camera, (target - camera).normalize());
        let face = intersect_ray_polygon(&ray, &top_face);
        let brush = intersect_ray_bbox(&ray, &bounds);
        let knob = intersect_ray_sphere(&ray, &handle, 4.0);
        tracing::info!(%ray, ?face, ?brush, ?knob, "pick");
    }

    let selection = [
        Point3::new(0.0, 0.0, 32.0),
        Point3::new(64.0, 0.0, 32.0),
        Point3::new(32.0, 16.0, 32.0),
        Point3::new(64.0, 64.0, 32.0),
        Point3::new(0.0, 64.0, 32.0),
        Point3::new(32.0, 0.0, 32.0),
    ];
    let hull = ConvexHull2D::new(&selection).execute()?;
    for (i, vertex) in hull.iter().enumerate() {
        tracing::info!(index = i, %vertex, "hull vertex");
    }

    Ok(())
}
