//! # StrokeFit Curves
//!
//! The stroke-processing algorithms, leaf-first:
//!
//! - **Geometry**: perpendicular distance to a line
//! - **Simplifier**: Ramer-Douglas-Peucker reduction of a point run
//! - **Segmenter**: splits a stroke into direction-consistent sub-runs
//! - **Fitter**: least-squares polynomial coefficients for a sub-run
//! - **Sampler**: re-samples a fitted segment into a polyline
//!
//! ```text
//! Stroke ──► StrokeSegmenter ──► sub-runs ──┬─► RdpSimplifier
//!                                           └─► CurveFitter ──► CurveSegment
//! CurveSegment ──► SegmentSampler ──► polyline
//! ```
//!
//! Every component can be built from a shared
//! [`CurveParameters`](strokefit_core::CurveParameters) so the polynomial
//! degree stays consistent across them.

pub mod fitter;
pub mod geometry;
pub mod sampler;
pub mod segmenter;
pub mod simplify;

pub use fitter::{count_distinct_x, rms_residual, CurveFitter};
pub use geometry::perpendicular_distance;
pub use sampler::SegmentSampler;
pub use segmenter::{Direction, StrokeSegmenter};
pub use simplify::RdpSimplifier;
