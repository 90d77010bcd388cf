//! Data models for strokes and fitted curve segments.

mod segment;

pub use segment::CurveSegment;

use serde::{Deserialize, Serialize};

use crate::error::StrokeError;

/// A 2D point sampled from pointer movement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered freehand stroke, in sampling order
///
/// Always holds at least two finite points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRecord")]
pub struct Stroke {
    color: Option<String>,
    points: Vec<Point>,
}

impl Stroke {
    /// Create a stroke, validating the point sequence.
    pub fn new(points: Vec<Point>) -> Result<Self, StrokeError> {
        if points.len() < 2 {
            return Err(StrokeError::TooFewPoints {
                count: points.len(),
            });
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(StrokeError::NonFinitePoint { index });
        }

        Ok(Self {
            color: None,
            points,
        })
    }

    /// Attach the color the stroke was drawn with.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.color = if color.trim().is_empty() {
            None
        } else {
            Some(color)
        };
        self
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Wire shape of a stroke before validation.
#[derive(Debug, Deserialize)]
struct StrokeRecord {
    #[serde(default)]
    color: Option<String>,
    points: Vec<Point>,
}

impl TryFrom<StrokeRecord> for Stroke {
    type Error = StrokeError;

    fn try_from(record: StrokeRecord) -> Result<Self, Self::Error> {
        let stroke = Stroke::new(record.points)?;
        Ok(match record.color {
            Some(color) => stroke.with_color(color),
            None => stroke,
        })
    }
}
