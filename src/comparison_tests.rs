//! Comparison tests between GridIndex (bucketed) and LinearIndex (exhaustive scan)

#[cfg(test)]
mod tests {
    use crate::{BoundingBox, GridConfig, GridIndex, IndexBackend, LinearIndex, Point2D, RingQuery, SpatialIndex};
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{PI, TAU};

    /// Helper to add same points to both indexes
    fn setup_indexes(points: &[(f64, f64)], config: GridConfig) -> (GridIndex<usize>, LinearIndex<usize>) {
        let mut grid = GridIndex::with_capacity(config, points.len());
        let mut linear = LinearIndex::with_capacity(points.len());

        for (id, &(x, y)) in points.iter().enumerate() {
            let point = Point2D::new(x, y);
            grid.insert(point, BoundingBox::point(x, y), id);
            linear.insert(point, BoundingBox::point(x, y), id);
        }

        (grid, linear)
    }

    fn query_both(grid: &GridIndex<usize>, linear: &LinearIndex<usize>, area: BoundingBox) -> (Vec<usize>, Vec<usize>) {
        let mut results_grid = Vec::new();
        let mut results_linear = Vec::new();
        grid.query(area, &mut results_grid);
        linear.query(area, &mut results_linear);
        results_grid.sort_unstable();
        results_linear.sort_unstable();
        (results_grid, results_linear)
    }

    fn uniform_points(seed: u64, count: usize) -> Vec<(f64, f64)> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..count).map(|_| (rng.random_range(0.0..500.0), rng.random_range(0.0..TAU))).collect()
    }

    /// Tight clusters around a few centers, many points sharing cells
    fn clustered_points(seed: u64, count: usize) -> Vec<(f64, f64)> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let centers: Vec<(f64, f64)> =
            (0..5).map(|_| (rng.random_range(0.0..500.0), rng.random_range(0.0..TAU))).collect();
        (0..count)
            .map(|i| {
                let (cx, cy) = centers[i % centers.len()];
                let x = (cx + rng.random_range(-2.0..2.0_f64)).max(0.0);
                let y = (cy + rng.random_range(-0.05..0.05_f64)).rem_euclid(TAU);
                (x, y)
            })
            .collect()
    }

    fn random_area<R: Rng>(rng: &mut R) -> BoundingBox {
        BoundingBox::new(
            rng.random_range(0.0..500.0),
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..200.0),
            rng.random_range(0.0..PI),
        )
    }

    #[test]
    fn test_basic_query_consistency() {
        let points = vec![(10.0, 0.5), (30.0, 1.0), (15.0, 3.0), (5.0, 6.0)];
        let (grid, linear) = setup_indexes(&points, GridConfig::default());

        let (results_grid, results_linear) = query_both(&grid, &linear, BoundingBox::new(0.0, 0.0, 20.0, 3.5));

        assert!(!results_grid.is_empty(), "GridIndex found no results");
        assert_eq!(results_grid, results_linear, "Query results differ between implementations");
        assert_eq!(results_linear, vec![0, 2]);
    }

    #[test]
    fn test_empty_query_consistency() {
        let points = vec![(10.0, 0.5), (30.0, 1.0), (50.0, 2.0)];
        let (grid, linear) = setup_indexes(&points, GridConfig::default());

        let (results_grid, results_linear) = query_both(&grid, &linear, BoundingBox::new(70.0, 0.0, 10.0, TAU));

        assert_eq!(results_grid.len(), 0, "GridIndex returned unexpected results");
        assert_eq!(results_linear.len(), 0, "LinearIndex returned unexpected results");
    }

    #[test]
    fn test_uniform_dataset_consistency() {
        let points = uniform_points(42, 2000);
        let (grid, linear) = setup_indexes(&points, GridConfig::default());
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let area = random_area(&mut rng);
            let (results_grid, results_linear) = query_both(&grid, &linear, area);
            assert_eq!(results_grid, results_linear, "Uniform dataset results differ for {area:?}");
        }
    }

    #[test]
    fn test_clustered_dataset_consistency() {
        let points = clustered_points(95_756_739, 2000);
        let (grid, linear) = setup_indexes(&points, GridConfig::default());
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let area = random_area(&mut rng);
            let (results_grid, results_linear) = query_both(&grid, &linear, area);
            assert_eq!(results_grid, results_linear, "Clustered dataset results differ for {area:?}");
        }
    }

    #[test]
    fn test_cell_size_does_not_change_results() {
        let points = uniform_points(3, 1000);
        let area = BoundingBox::new(100.0, 1.0, 150.0, 2.0);

        let mut reference: Option<Vec<usize>> = None;
        for &(dc, ac) in &[(1.0, 0.01), (25.0, PI / 2.0), (400.0, TAU), (1e6, 1e6)] {
            let (grid, linear) = setup_indexes(&points, GridConfig::new(dc, ac).unwrap());
            let (results_grid, results_linear) = query_both(&grid, &linear, area);
            assert_eq!(results_grid, results_linear, "cell size ({dc}, {ac}) diverges from linear scan");
            if let Some(expected) = &reference {
                assert_eq!(&results_grid, expected);
            }
            reference = Some(results_grid);
        }
    }

    #[test]
    fn test_boundary_points_consistency() {
        // points exactly on cell edges and query edges
        let points = vec![(0.0, 0.0), (25.0, PI / 2.0), (50.0, PI), (75.0, 1.5 * PI), (100.0, 0.0)];
        let (grid, linear) = setup_indexes(&points, GridConfig::default());

        let (results_grid, results_linear) = query_both(&grid, &linear, BoundingBox::new(25.0, PI / 2.0, 50.0, PI));
        assert_eq!(results_grid, results_linear);
        assert_eq!(results_linear, vec![1, 2, 3]);
    }

    #[test]
    fn test_engine_backends_agree() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
        let origin = Point2D::new(400.0, 400.0);
        let entities: Vec<Point2D> = (0..1500)
            .map(|_| Point2D::new(rng.random_range(-100.0..900.0), rng.random_range(-100.0..900.0)))
            .collect();

        let grid = RingQuery::with_backend(&entities, origin, IndexBackend::default());
        let linear = RingQuery::with_backend(&entities, origin, IndexBackend::Linear);

        for _ in 0..300 {
            let d0 = rng.random_range(0.0..400.0);
            let d1 = d0 + rng.random_range(0.0..300.0);
            let a0 = rng.random_range(-TAU..TAU);
            let a1 = a0 + rng.random_range(0.0..TAU);

            let mut hits_grid: Vec<*const Point2D> =
                grid.query(d0, d1, a0, a1).iter().map(|h| std::ptr::from_ref(h.entity)).collect();
            let mut hits_linear: Vec<*const Point2D> =
                linear.query(d0, d1, a0, a1).iter().map(|h| std::ptr::from_ref(h.entity)).collect();
            hits_grid.sort_unstable();
            hits_linear.sort_unstable();
            assert_eq!(hits_grid, hits_linear, "backends disagree on slice ({d0}, {d1}, {a0}, {a1})");
        }
    }
}
