use proptest::prelude::*;
use strokefit_curves::{perpendicular_distance, RdpSimplifier};
use strokefit_core::Point;

fn point_strategy() -> impl Strategy<Value = Point> {
    (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| Point::new(x, y))
}

/// True when `sub` appears in `full` in the same relative order.
fn is_subsequence(sub: &[Point], full: &[Point]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|p| it.any(|q| q == p))
}

proptest! {
    #[test]
    fn simplified_is_ordered_subsequence(
        points in prop::collection::vec(point_strategy(), 2..60),
        epsilon in 0.01f64..20.0,
    ) {
        let simplified = RdpSimplifier::new(epsilon).simplify(&points);

        prop_assert!(simplified.len() <= points.len());
        prop_assert!(simplified.len() >= 2);
        prop_assert_eq!(simplified.first(), points.first());
        prop_assert_eq!(simplified.last(), points.last());
        prop_assert!(is_subsequence(&simplified, &points));
    }

    #[test]
    fn collinear_runs_collapse(
        n in 2usize..80,
        slope in -10.0f64..10.0,
        epsilon in 0.01f64..5.0,
    ) {
        let points: Vec<Point> = (0..n)
            .map(|i| Point::new(i as f64, slope * i as f64 + 3.0))
            .collect();
        let simplified = RdpSimplifier::new(epsilon).simplify(&points);
        prop_assert_eq!(simplified, vec![points[0], points[n - 1]]);
    }

    #[test]
    fn points_on_segment_have_zero_distance(
        a in point_strategy(),
        b in point_strategy(),
        t in 0.0f64..1.0,
    ) {
        prop_assume!(a.distance_to(&b) > 1e-3);
        let on = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
        prop_assert!(perpendicular_distance(on, a, b) < 1e-9);
    }
}

#[test]
fn dropped_points_lie_within_epsilon_of_kept_chord() {
    let epsilon = 0.5;
    let points: Vec<Point> = (0..=40)
        .map(|i| {
            let x = i as f64;
            Point::new(x, (x / 6.0).sin() * 10.0)
        })
        .collect();
    let simplified = RdpSimplifier::new(epsilon).simplify(&points);
    assert!(simplified.len() < points.len());

    for chord in simplified.windows(2) {
        let from = points.iter().position(|p| *p == chord[0]).unwrap();
        let to = points.iter().position(|p| *p == chord[1]).unwrap();
        for p in &points[from..=to] {
            assert!(perpendicular_distance(*p, chord[0], chord[1]) <= epsilon + 1e-9);
        }
    }
}
