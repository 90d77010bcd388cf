//! Default values for the curve pipeline.
//!
//! The two direction tolerances are asymmetric and must stay that way:
//! the segmenter's split decisions are calibrated against 0.5 / 1.5.

/// Polynomial degree used for every fitted segment.
pub const DEFAULT_DEGREE: usize = 2;

/// Largest degree accepted by parameter validation.
pub const MAX_DEGREE: usize = 8;

/// Ramer-Douglas-Peucker tolerance.
pub const DEFAULT_EPSILON: f64 = 0.05;

/// Horizontal movement smaller than this does not count as a reversal.
pub const DEFAULT_X_TOLERANCE: f64 = 0.5;

/// Vertical movement smaller than this does not count as a reversal.
pub const DEFAULT_Y_TOLERANCE: f64 = 1.5;

/// Distance between sampled x positions when rendering a segment.
pub const DEFAULT_SAMPLE_STEP: f64 = 10.0;

/// Color written to every fitted segment.
pub const DEFAULT_COLOR: &str = "#000";

/// Two x-values closer than this are treated as the same abscissa.
pub const DISTINCT_X_TOLERANCE: f64 = 1e-9;

/// Iteration cap for the least-squares SVD.
pub const SVD_MAX_ITERATIONS: usize = 10_000;

/// Upper bound on interior samples when rendering one segment.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 100_000;
