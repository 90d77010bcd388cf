//! Error handling for StrokeFit
//!
//! Provides error types for all layers of the pipeline:
//! - Stroke errors (input preconditions)
//! - Fit errors (least-squares failures for one sub-run)
//! - Curve errors (invalid parameters and segment invariants)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Stroke error type
///
/// Raised before any segmentation happens; a stroke that fails here never
/// touches the segment store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrokeError {
    /// Fewer than two points were supplied
    #[error("Stroke needs at least 2 points, got {count}")]
    TooFewPoints {
        /// Number of points received.
        count: usize,
    },

    /// A coordinate was NaN or infinite
    #[error("Stroke point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },
}

/// Fit error type
///
/// Scoped to a single sub-run. Other sub-runs of the same stroke are
/// unaffected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Not enough points or distinct x-values for the requested degree
    #[error("Insufficient data: need {required} distinct x-values, got {available}")]
    InsufficientData {
        /// Distinct x-values needed (degree + 1).
        required: usize,
        /// Distinct x-values available.
        available: usize,
    },

    /// The design matrix is numerically rank deficient
    #[error("Fit failed: design matrix rank {rank} < {required}")]
    Singular {
        /// Numerical rank found.
        rank: usize,
        /// Rank required (degree + 1).
        required: usize,
    },

    /// Powers of the x-values overflow at the requested degree
    #[error("Fit failed: powers of x up to degree {degree} overflow")]
    Overflow {
        /// Degree whose powers overflowed.
        degree: usize,
    },

    /// The SVD did not converge within its iteration limit
    #[error("Fit failed: solver did not converge")]
    NoConvergence,

    /// The solver produced NaN or infinite coefficients
    #[error("Fit failed: non-finite coefficients")]
    NonFiniteCoefficients,
}

/// Curve error type
///
/// Represents invalid configuration values and violated segment invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A curve parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Coefficient count does not match degree + 1
    #[error("Expected {expected} coefficients, got {actual}")]
    CoefficientCount {
        /// degree + 1
        expected: usize,
        /// Number supplied.
        actual: usize,
    },
}

impl CurveError {
    /// Build an [`CurveError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CurveError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for StrokeFit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Stroke precondition error
    #[error(transparent)]
    Stroke(#[from] StrokeError),

    /// Fit error
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Curve error
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl Error {
    /// Check if this is a stroke precondition error
    pub fn is_stroke_error(&self) -> bool {
        matches!(self, Error::Stroke(_))
    }

    /// Check if this is a fit error
    pub fn is_fit_error(&self) -> bool {
        matches!(self, Error::Fit(_))
    }

    /// Check if this reports missing data rather than a numerical failure
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            Error::Stroke(StrokeError::TooFewPoints { .. })
                | Error::Fit(FitError::InsufficientData { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
