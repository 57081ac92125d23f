//! Scatter demo: concave hull of a seeded random point cloud.
//!
//! Usage:
//! ```text
//! cargo run --example scatter                         # 100 points, concavity 1, scale 1
//! cargo run --example scatter -- 300 0.4 5            # count, concavity, scale factor
//! RUST_LOG=carvehull=trace cargo run --example scatter
//! ```

use carvehull::math::polygon_2d::{perimeter_2d, signed_area_2d};
use carvehull::topology::{dedup_positions, VertexData};
use carvehull::{ConcaveHull, HullError, HullParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 7;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), HullError> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("carvehull=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().collect();
    let count: u64 = arg(&args, 1, 100);
    let concavity: f64 = arg(&args, 2, 1.0);
    let scale_factor: f64 = arg(&args, 3, 1.0);

    let mut rng = StdRng::seed_from_u64(SEED);
    let raw: Vec<VertexData> = (0..count)
        .map(|label| {
            let x: i32 = rng.random_range(0..100);
            let y: i32 = rng.random_range(0..100);
            VertexData::at(label, f64::from(x), f64::from(y))
        })
        .collect();
    let points = dedup_positions(&raw);

    let mut hull = ConcaveHull::new(&points)?;
    hull.calculate(&HullParams::new(concavity, scale_factor))?;

    let convex = hull.convex_ring()?;
    let concave = hull.concave_ring()?;
    println!(
        "{} points ({} distinct), convex: {} edges, area {:.1}, perimeter {:.1}; \
         concave: {} edges, area {:.1}, perimeter {:.1}; unused: {}",
        raw.len(),
        points.len(),
        convex.len(),
        signed_area_2d(&convex).abs(),
        perimeter_2d(&convex),
        concave.len(),
        signed_area_2d(&concave).abs(),
        perimeter_2d(&concave),
        hull.unused().len()
    );
    for [a, b] in hull.segments(hull.concave_edges())? {
        println!(
            "{:>4} ({:>3}, {:>3}) -> {:>4} ({:>3}, {:>3})",
            a.label, a.point.x, a.point.y, b.label, b.point.x, b.point.y
        );
    }
    Ok(())
}
