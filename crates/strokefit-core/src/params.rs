//! Tunable parameters for the stroke pipeline.
//!
//! The polynomial degree lives here once and is read by the segmenter
//! (vertical-reversal limit), the fitter, and every stored segment.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLOR, DEFAULT_DEGREE, DEFAULT_EPSILON, DEFAULT_SAMPLE_STEP, DEFAULT_X_TOLERANCE,
    DEFAULT_Y_TOLERANCE, MAX_DEGREE,
};
use crate::error::CurveError;

/// What the fitter does when a sub-run has fewer than `degree + 1`
/// distinct x-values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderdeterminedPolicy {
    /// Refuse the sub-run with `FitError::InsufficientData`.
    #[default]
    Reject,
    /// Fit the highest degree the data supports and zero-pad the
    /// remaining coefficients.
    ReduceDegree,
}

impl std::fmt::Display for UnderdeterminedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::ReduceDegree => write!(f, "reduce_degree"),
        }
    }
}

/// Which version of a sub-run is handed to the fitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitSource {
    /// The full, unsimplified sub-run.
    #[default]
    Raw,
    /// The RDP-simplified sub-run.
    Simplified,
}

impl std::fmt::Display for FitSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Simplified => write!(f, "simplified"),
        }
    }
}

/// Complete set of curve pipeline parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParameters {
    /// Polynomial degree
    pub degree: usize,
    /// RDP tolerance
    pub epsilon: f64,
    /// Horizontal direction noise threshold
    pub x_tolerance: f64,
    /// Vertical direction noise threshold
    pub y_tolerance: f64,
    /// Renderer x-step
    pub sample_step: f64,
    /// Color written to fitted segments
    pub default_color: String,
    /// Use the stroke's own color, when it has one, instead of `default_color`
    pub use_stroke_color: bool,
    /// Fallback for underdetermined sub-runs
    pub underdetermined: UnderdeterminedPolicy,
    /// Raw or simplified sub-run feeds the fitter
    pub fit_source: FitSource,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            epsilon: DEFAULT_EPSILON,
            x_tolerance: DEFAULT_X_TOLERANCE,
            y_tolerance: DEFAULT_Y_TOLERANCE,
            sample_step: DEFAULT_SAMPLE_STEP,
            default_color: DEFAULT_COLOR.to_string(),
            use_stroke_color: false,
            underdetermined: UnderdeterminedPolicy::default(),
            fit_source: FitSource::default(),
        }
    }
}

impl CurveParameters {
    /// Number of coefficients a fitted segment carries.
    pub fn coefficient_count(&self) -> usize {
        self.degree + 1
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.degree == 0 || self.degree > MAX_DEGREE {
            return Err(CurveError::invalid(
                "degree",
                format!("must be in 1..={}, got {}", MAX_DEGREE, self.degree),
            ));
        }

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(CurveError::invalid("epsilon", "must be > 0"));
        }

        if !self.x_tolerance.is_finite() || self.x_tolerance < 0.0 {
            return Err(CurveError::invalid("x_tolerance", "must be >= 0"));
        }

        if !self.y_tolerance.is_finite() || self.y_tolerance < 0.0 {
            return Err(CurveError::invalid("y_tolerance", "must be >= 0"));
        }

        if !self.sample_step.is_finite() || self.sample_step <= 0.0 {
            return Err(CurveError::invalid("sample_step", "must be > 0"));
        }

        if self.default_color.trim().is_empty() {
            return Err(CurveError::invalid("default_color", "must not be empty"));
        }

        Ok(())
    }
}
