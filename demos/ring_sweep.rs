//! Radar sweep: a beam rotating in π/4 steps over a ring of entities and a random scatter.
//!
//! Run with `RUST_LOG=ringslice=trace` to see every executed query.
use rand::{Rng, SeedableRng};
use ringslice::prelude::*;
use std::f64::consts::{FRAC_PI_4, TAU};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("ringslice=debug".parse().unwrap()),
        )
        .init();

    let origin = Point2D::new(400.0, 400.0);
    let mut rng = rand::rngs::StdRng::seed_from_u64(95_756_739);

    // 100 entities evenly spaced on a ring of radius 200
    let mut entities: Vec<Point2D> = (0..100)
        .map(|i| PolarPoint::new(200.0, TAU * f64::from(i) / 100.0).to_cartesian(origin))
        .collect();
    // 2050 more scattered within radius 500
    entities.extend(
        (0..2050).map(|_| PolarPoint::new(rng.random_range(0.0..500.0), rng.random_range(0.0..TAU)).to_cartesian(origin)),
    );

    let mut last = LastQueryShape::new();
    for backend in [IndexBackend::default(), IndexBackend::Linear] {
        let rings = RingQuery::with_backend(&entities, origin, backend);
        println!("{} backend, {} entities", rings.index().backend_name(), rings.len());

        let mut total = 0;
        for step in 0..8 {
            // beam straddles the heading, so step 0 wraps past angle 0
            let a0 = f64::from(step) * FRAC_PI_4 - FRAC_PI_4 / 2.0;
            let a1 = f64::from(step + 1) * FRAC_PI_4 - FRAC_PI_4 / 2.0;
            let hits = rings.query_observed(150.0, 250.0, a0, a1, &mut last);
            let on_ring = hits.iter().filter(|h| (h.polar.distance - 200.0).abs() < 1e-6).count();
            let [upper, lower] = last.as_pair();
            println!(
                "  beam {step}: {:>4} hits ({on_ring:>2} on ring)  boxes: y {:.3}+{:.3}, y {:.3}+{:.3}",
                hits.len(),
                upper.y,
                upper.height,
                lower.y,
                lower.height
            );
            total += hits.len();
        }
        assert_eq!(total, rings.query(150.0, 250.0, 0.0, TAU).len(), "beams should tile the band");
        println!("  total {total}\n");
    }
}
