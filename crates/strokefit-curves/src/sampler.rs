//! Segment rendering
//!
//! Turns a stored curve segment back into a polyline: the start point,
//! the polynomial sampled every `step` along x from `start.x` up to (but
//! excluding) `end.x`, then the end point.

use strokefit_core::constants::MAX_SAMPLES_PER_SEGMENT;
use strokefit_core::{CurveError, CurveParameters, CurveSegment, Point};

/// Samples curve segments at a fixed x-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSampler {
    step: f64,
}

impl SegmentSampler {
    pub fn new(step: f64) -> Result<Self, CurveError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(CurveError::invalid("sample_step", "must be > 0"));
        }
        Ok(Self { step })
    }

    pub fn from_params(params: &CurveParameters) -> Result<Self, CurveError> {
        Self::new(params.sample_step)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Render one segment as a polyline.
    ///
    /// At most [`MAX_SAMPLES_PER_SEGMENT`] interior samples are taken; a
    /// segment wider than that many steps is sampled with a proportionally
    /// wider step.
    pub fn sample(&self, segment: &CurveSegment) -> Vec<Point> {
        let (start, end) = if segment.start().x <= segment.end().x {
            (segment.start(), segment.end())
        } else {
            (segment.end(), segment.start())
        };

        let (step, count) = self.step_and_count(start.x, end.x);
        let mut points = Vec::with_capacity(count + 2);
        points.push(start);

        // x = start + k*step rather than repeated addition, so long spans
        // do not accumulate drift.
        for k in 0..count {
            let x = start.x + k as f64 * step;
            if x >= end.x {
                break;
            }
            points.push(Point::new(x, segment.evaluate(x)));
        }

        points.push(end);
        points
    }

    fn step_and_count(&self, from: f64, to: f64) -> (f64, usize) {
        let span = to - from;
        if span.is_nan() || span <= 0.0 {
            return (self.step, 0);
        }

        let wanted = (span / self.step).ceil();
        if wanted <= MAX_SAMPLES_PER_SEGMENT as f64 {
            return (self.step, wanted as usize);
        }

        // Dividing first keeps the widened step finite when `span` is not.
        let max = MAX_SAMPLES_PER_SEGMENT as f64;
        let step = to / max - from / max;
        tracing::debug!(
            "Segment span {} exceeds {} samples, widening step to {}",
            span,
            MAX_SAMPLES_PER_SEGMENT,
            step
        );
        (step, MAX_SAMPLES_PER_SEGMENT)
    }
}

impl Default for SegmentSampler {
    fn default() -> Self {
        Self {
            step: strokefit_core::constants::DEFAULT_SAMPLE_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_line(start: Point, end: Point) -> CurveSegment {
        CurveSegment::new("#000", start, end, 2, vec![0.0, 1.0, 0.0]).unwrap()
    }

    #[test]
    fn test_identity_line_samples() {
        let sampler = SegmentSampler::default();
        let segment = identity_line(Point::new(0.0, 0.0), Point::new(25.0, 25.0));
        let polyline = sampler.sample(&segment);

        let xs: Vec<f64> = polyline.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.0, 10.0, 20.0, 25.0]);
        for p in &polyline[1..4] {
            assert!((p.y - p.x).abs() < 1e-12);
        }
        assert_eq!(polyline[0], segment.start());
        assert_eq!(polyline[4], segment.end());
    }

    #[test]
    fn test_exact_multiple_excludes_end_x_sample() {
        let sampler = SegmentSampler::default();
        let segment = identity_line(Point::new(0.0, 0.0), Point::new(20.0, 20.0));
        let xs: Vec<f64> = sampler.sample(&segment).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_zero_width_segment() {
        let sampler = SegmentSampler::default();
        let segment = identity_line(Point::new(5.0, 0.0), Point::new(5.0, 9.0));
        let polyline = sampler.sample(&segment);
        assert_eq!(polyline, vec![Point::new(5.0, 0.0), Point::new(5.0, 9.0)]);
    }

    #[test]
    fn test_reversed_segment_renders_left_to_right_and_is_stable() {
        let sampler = SegmentSampler::default();
        let segment = identity_line(Point::new(25.0, 25.0), Point::new(0.0, 0.0));
        assert!(segment.start().x <= segment.end().x);

        let first = sampler.sample(&segment);
        let second = sampler.sample(&segment);
        assert_eq!(first, second);
        assert_eq!(first[0], Point::new(0.0, 0.0));
        assert!(segment.start().x <= segment.end().x);
    }

    #[test]
    fn test_huge_span_is_bounded() {
        let sampler = SegmentSampler::default();
        let segment = CurveSegment::new(
            "#000",
            Point::new(0.0, 0.0),
            Point::new(1e300, 0.0),
            2,
            vec![0.0, 0.0, 0.0],
        )
        .unwrap();
        let polyline = sampler.sample(&segment);

        assert!(polyline.len() <= MAX_SAMPLES_PER_SEGMENT + 2);
        assert_eq!(polyline.first(), Some(&segment.start()));
        assert_eq!(polyline.last(), Some(&segment.end()));
        assert!(polyline.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn test_overflowing_span_renders_finite_points() {
        let sampler = SegmentSampler::default();
        let segment = CurveSegment::new(
            "#000",
            Point::new(-f64::MAX, 0.0),
            Point::new(f64::MAX, 0.0),
            2,
            vec![1.0, 0.0, 0.0],
        )
        .unwrap();
        let polyline = sampler.sample(&segment);

        assert!(polyline.len() <= MAX_SAMPLES_PER_SEGMENT + 2);
        assert!(polyline.iter().all(|p| p.is_finite()));
        assert_eq!(polyline.last(), Some(&segment.end()));
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(SegmentSampler::new(0.0).is_err());
        assert!(SegmentSampler::new(-1.0).is_err());
        assert!(SegmentSampler::new(f64::INFINITY).is_err());
        assert_eq!(SegmentSampler::new(2.5).unwrap().step(), 2.5);
    }
}
