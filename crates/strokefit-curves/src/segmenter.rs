//! Stroke segmentation
//!
//! Splits a stroke into sub-runs that a single low-degree polynomial in x
//! can explain. A new sub-run begins whenever horizontal travel reverses,
//! or once vertical travel has reversed `degree` times within the current
//! sub-run. Every sub-run after the first starts with the last point of
//! its predecessor, so adjacent curve segments share an endpoint.

use strokefit_core::{CurveParameters, Point, Stroke, StrokeError};

/// Travel direction along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }

    /// Whether moving from `a` to `b` continues in this direction, allowing
    /// backward noise up to `tolerance`.
    ///
    /// The increasing test is inclusive and the decreasing test strict.
    pub fn continues(self, a: f64, b: f64, tolerance: f64) -> bool {
        match self {
            Self::Increasing => a - tolerance <= b,
            Self::Decreasing => b - tolerance < a,
        }
    }

    /// Direction of the first step, biased towards `Increasing`.
    fn initial(a: f64, b: f64, tolerance: f64) -> Self {
        if Self::Increasing.continues(a, b, tolerance) {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }
}

/// Splits strokes into fit-able sub-runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSegmenter {
    /// Horizontal noise threshold
    pub x_tolerance: f64,
    /// Vertical noise threshold
    pub y_tolerance: f64,
    /// Vertical reversals tolerated inside one sub-run
    pub max_vertical_reversals: usize,
}

impl StrokeSegmenter {
    pub fn new(x_tolerance: f64, y_tolerance: f64, max_vertical_reversals: usize) -> Self {
        Self {
            x_tolerance,
            y_tolerance,
            max_vertical_reversals,
        }
    }

    /// Build a segmenter whose reversal limit is the polynomial degree.
    pub fn from_params(params: &CurveParameters) -> Self {
        Self::new(params.x_tolerance, params.y_tolerance, params.degree)
    }

    /// Segment a validated stroke.
    pub fn segment_stroke(&self, stroke: &Stroke) -> Vec<Vec<Point>> {
        self.split(stroke.points())
    }

    /// Segment a raw point sequence.
    pub fn segment(&self, points: &[Point]) -> Result<Vec<Vec<Point>>, StrokeError> {
        if points.len() < 2 {
            return Err(StrokeError::TooFewPoints {
                count: points.len(),
            });
        }
        Ok(self.split(points))
    }

    /// Core scan; `points` holds at least two entries.
    fn split(&self, points: &[Point]) -> Vec<Vec<Point>> {
        let mut previous = points[0];
        let next = points[1];

        let mut x_direction = Direction::initial(previous.x, next.x, self.x_tolerance);
        let mut y_direction = Direction::initial(previous.y, next.y, self.y_tolerance);
        let mut vertical_reversals = 0usize;

        let mut runs = Vec::new();
        let mut current = vec![previous];

        for &point in &points[1..] {
            if !y_direction.continues(previous.y, point.y, self.y_tolerance) {
                vertical_reversals += 1;
                y_direction = y_direction.flipped();
            }

            if x_direction.continues(previous.x, point.x, self.x_tolerance)
                && vertical_reversals < self.max_vertical_reversals
            {
                current.push(point);
            } else {
                x_direction = x_direction.flipped();
                vertical_reversals = 0;
                runs.push(std::mem::replace(&mut current, vec![previous, point]));
            }

            previous = point;
        }

        runs.push(current);

        tracing::debug!(
            "Segmented {} points into {} sub-runs",
            points.len(),
            runs.len()
        );
        runs
    }
}

impl Default for StrokeSegmenter {
    fn default() -> Self {
        Self::from_params(&CurveParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_direction_thresholds() {
        assert!(Direction::Increasing.continues(10.0, 9.5, 0.5));
        assert!(!Direction::Increasing.continues(10.0, 9.49, 0.5));
        assert!(Direction::Decreasing.continues(10.0, 10.49, 0.5));
        assert!(!Direction::Decreasing.continues(10.0, 10.5, 0.5));
    }

    #[test]
    fn test_too_few_points() {
        let segmenter = StrokeSegmenter::default();
        assert_eq!(
            segmenter.segment(&pts(&[(0.0, 0.0)])),
            Err(StrokeError::TooFewPoints { count: 1 })
        );
    }

    #[test]
    fn test_two_points_single_run() {
        let segmenter = StrokeSegmenter::default();
        let points = pts(&[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(segmenter.segment(&points).unwrap(), vec![points]);
    }

    #[test]
    fn test_monotonic_stroke_single_run() {
        let segmenter = StrokeSegmenter::default();
        let points: Vec<Point> = (0..20)
            .map(|i| Point::new(i as f64 * 3.0, i as f64 * 2.0))
            .collect();
        let runs = segmenter.segment(&points).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], points);
    }

    #[test]
    fn test_horizontal_reversal_splits_with_overlap() {
        let segmenter = StrokeSegmenter::default();
        let points = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (20.0, 0.0),
            (15.0, 0.0),
            (5.0, 0.0),
        ]);
        let runs = segmenter.segment(&points).unwrap();
        assert_eq!(
            runs,
            vec![
                pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]),
                pts(&[(20.0, 0.0), (15.0, 0.0), (5.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn test_small_backward_jitter_is_noise() {
        let segmenter = StrokeSegmenter::default();
        let points = pts(&[(0.0, 0.0), (5.0, 1.0), (4.6, 2.0), (8.0, 3.0)]);
        assert_eq!(segmenter.segment(&points).unwrap().len(), 1);
    }

    #[test]
    fn test_second_vertical_reversal_splits() {
        let segmenter = StrokeSegmenter::default();
        // x keeps increasing; y goes up, down, then up again.
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 10.0),
            (2.0, 20.0),
            (3.0, 10.0),
            (4.0, 0.0),
            (5.0, 10.0),
            (6.0, 20.0),
        ]);
        let runs = segmenter.segment(&points).unwrap();
        // The reversal split also flips the horizontal flag, so the next
        // rightward step closes a short bridging run.
        assert_eq!(
            runs,
            vec![
                pts(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0), (3.0, 10.0), (4.0, 0.0)]),
                pts(&[(4.0, 0.0), (5.0, 10.0)]),
                pts(&[(5.0, 10.0), (6.0, 20.0)]),
            ]
        );
    }

    #[test]
    fn test_degree_threads_into_reversal_limit() {
        let params = CurveParameters {
            degree: 3,
            ..Default::default()
        };
        let segmenter = StrokeSegmenter::from_params(&params);
        assert_eq!(segmenter.max_vertical_reversals, 3);
    }
}
