//! Ramer-Douglas-Peucker polyline simplification
//!
//! Reduces a sub-run to the vertices that matter for its shape. The
//! recursion is pure: every call returns a freshly built vector.

use strokefit_core::{CurveParameters, Point};

use crate::geometry::perpendicular_distance;

/// RDP polyline simplification algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RdpSimplifier {
    /// Maximum perpendicular deviation for a point to be dropped
    pub epsilon: f64,
}

impl RdpSimplifier {
    /// Create a simplifier with an explicit tolerance.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Create a simplifier from validated pipeline parameters.
    pub fn from_params(params: &CurveParameters) -> Self {
        Self::new(params.epsilon)
    }

    /// Simplify a run of points.
    ///
    /// The output is an order-preserving subsequence of `points` that keeps
    /// the first and last point. Runs shorter than two points come back
    /// unchanged.
    pub fn simplify(&self, points: &[Point]) -> Vec<Point> {
        if points.len() < 2 {
            return points.to_vec();
        }

        let (max_dist, max_index) = self.find_max_distance(points);

        if max_dist > self.epsilon && max_index > 0 {
            let mut left = self.simplify(&points[..=max_index]);
            let right = self.simplify(&points[max_index..]);

            // The split point ends `left` and starts `right`.
            left.pop();
            left.extend(right);

            if left.len() < 2 {
                return points.to_vec();
            }
            left
        } else {
            match (points.first(), points.last()) {
                (Some(&first), Some(&last)) => vec![first, last],
                _ => points.to_vec(),
            }
        }
    }

    /// Interior point furthest from the chord, as `(distance, index)`.
    ///
    /// Returns index 0 when there is no interior point.
    fn find_max_distance(&self, points: &[Point]) -> (f64, usize) {
        let last = points.len() - 1;
        let (start, end) = (points[0], points[last]);

        let mut max_dist = 0.0;
        let mut max_index = 0;

        for (i, &point) in points.iter().enumerate().take(last).skip(1) {
            let dist = perpendicular_distance(point, start, end);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }

        (max_dist, max_index)
    }

    /// Share of points removed, in `0.0..=1.0`.
    pub fn compression_ratio(original: &[Point], simplified: &[Point]) -> f64 {
        if original.is_empty() {
            return 0.0;
        }
        1.0 - (simplified.len() as f64 / original.len() as f64)
    }
}

impl Default for RdpSimplifier {
    fn default() -> Self {
        Self::from_params(&CurveParameters::default())
    }
}
