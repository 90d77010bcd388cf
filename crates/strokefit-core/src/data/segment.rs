use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Point;
use crate::error::CurveError;

/// A fitted polynomial curve over a bounded x-range
///
/// `coefficients[i]` is the weight of `x^i`. The constructor enforces
/// `coefficients.len() == degree + 1` and `start.x <= end.x`, so a segment
/// held by the store never needs fixing up on the read path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSegment {
    id: String,
    color: String,
    start: Point,
    end: Point,
    degree: usize,
    coefficients: Vec<f64>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl CurveSegment {
    /// Create a segment with a fresh id and timestamps.
    pub fn new(
        color: impl Into<String>,
        start: Point,
        end: Point,
        degree: usize,
        coefficients: Vec<f64>,
    ) -> Result<Self, CurveError> {
        if coefficients.len() != degree + 1 {
            return Err(CurveError::CoefficientCount {
                expected: degree + 1,
                actual: coefficients.len(),
            });
        }

        let now = Utc::now();
        let mut segment = Self {
            id: Uuid::new_v4().to_string(),
            color: color.into(),
            start,
            end,
            degree,
            coefficients,
            created: now,
            modified: now,
        };
        segment.normalize();
        Ok(segment)
    }

    /// Swap the endpoints if `start.x > end.x`.
    ///
    /// Idempotent. Returns true when a swap happened, in which case
    /// `modified` is bumped.
    fn normalize(&mut self) -> bool {
        if self.start.x > self.end.x {
            std::mem::swap(&mut self.start, &mut self.end);
            self.modified = Utc::now();
            tracing::debug!("Segment {} endpoints swapped", self.id);
            true
        } else {
            false
        }
    }

    /// Evaluate the polynomial at `x` (Horner's rule).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Width of the x-range covered.
    pub fn span(&self) -> f64 {
        self.end.x - self.start.x
    }
}
