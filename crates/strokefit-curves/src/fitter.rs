//! Least-squares polynomial fitting
//!
//! Fits `y = c0 + c1*x + ... + cd*x^d` to a sub-run by ordinary least
//! squares with unit weights. The Vandermonde columns are equilibrated
//! before an SVD solve so pixel-scale x-values do not swamp the
//! higher-order columns.

use nalgebra::{DMatrix, DVector};
use strokefit_core::constants::{DISTINCT_X_TOLERANCE, SVD_MAX_ITERATIONS};
use strokefit_core::{
    CurveParameters, CurveSegment, FitError, Point, Result, UnderdeterminedPolicy,
};

/// Polynomial least-squares fitter
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFitter {
    degree: usize,
    policy: UnderdeterminedPolicy,
    default_color: String,
}

impl CurveFitter {
    pub fn new(degree: usize, policy: UnderdeterminedPolicy) -> Self {
        Self {
            degree,
            policy,
            default_color: strokefit_core::constants::DEFAULT_COLOR.to_string(),
        }
    }

    pub fn from_params(params: &CurveParameters) -> Self {
        Self {
            degree: params.degree,
            policy: params.underdetermined,
            default_color: params.default_color.clone(),
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn policy(&self) -> UnderdeterminedPolicy {
        self.policy
    }

    /// Fit coefficients, lowest order first; always `degree + 1` long.
    ///
    /// With [`UnderdeterminedPolicy::Reject`], fewer than `degree + 1`
    /// distinct x-values is [`FitError::InsufficientData`]. With
    /// [`UnderdeterminedPolicy::ReduceDegree`] the highest degree the data
    /// supports is fitted and the missing high-order terms are zero.
    pub fn fit_coefficients(&self, points: &[Point]) -> std::result::Result<Vec<f64>, FitError> {
        let required = self.degree + 1;
        let distinct = count_distinct_x(points);

        let effective_degree = if distinct >= required {
            self.degree
        } else {
            match self.policy {
                UnderdeterminedPolicy::ReduceDegree if distinct > 0 => distinct - 1,
                _ => {
                    return Err(FitError::InsufficientData {
                        required,
                        available: distinct,
                    })
                }
            }
        };

        if effective_degree < self.degree {
            tracing::debug!(
                "Reducing fit degree from {} to {} ({} distinct x-values)",
                self.degree,
                effective_degree,
                distinct
            );
        }

        let mut coefficients = solve_least_squares(points, effective_degree)?;
        coefficients.resize(required, 0.0);
        Ok(coefficients)
    }

    /// Fit a sub-run and build the curve segment for it.
    ///
    /// `color` falls back to the fitter's default color when `None`.
    pub fn fit_segment(&self, points: &[Point], color: Option<&str>) -> Result<CurveSegment> {
        let &[start, .., end] = points else {
            return Err(FitError::InsufficientData {
                required: self.degree + 1,
                available: count_distinct_x(points),
            }
            .into());
        };
        let coefficients = self.fit_coefficients(points)?;

        let color = color.unwrap_or(self.default_color.as_str());
        let segment = CurveSegment::new(color, start, end, self.degree, coefficients)?;
        Ok(segment)
    }
}

impl Default for CurveFitter {
    fn default() -> Self {
        Self::from_params(&CurveParameters::default())
    }
}

/// Number of distinct x-values, within [`DISTINCT_X_TOLERANCE`].
pub fn count_distinct_x(points: &[Point]) -> usize {
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    xs.sort_by(f64::total_cmp);

    let mut distinct = 0;
    let mut last: Option<f64> = None;
    for x in xs {
        match last {
            Some(prev) if (x - prev).abs() <= DISTINCT_X_TOLERANCE => {}
            _ => {
                distinct += 1;
                last = Some(x);
            }
        }
    }
    distinct
}

/// Root-mean-square vertical residual of `coefficients` over `points`.
pub fn rms_residual(points: &[Point], coefficients: &[f64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points
        .iter()
        .map(|p| {
            let y = coefficients.iter().rev().fold(0.0, |acc, &c| acc * p.x + c);
            (y - p.y).powi(2)
        })
        .sum();
    (sum / points.len() as f64).sqrt()
}

fn solve_least_squares(points: &[Point], degree: usize) -> std::result::Result<Vec<f64>, FitError> {
    let rows = points.len();
    let cols = degree + 1;

    let vandermonde = DMatrix::from_fn(rows, cols, |r, c| points[r].x.powi(c as i32));
    if vandermonde.iter().any(|v| !v.is_finite()) {
        return Err(FitError::Overflow { degree });
    }
    let rhs = DVector::from_iterator(rows, points.iter().map(|p| p.y));

    let norms: Vec<f64> = (0..cols)
        .map(|c| {
            let norm = vandermonde.column(c).norm();
            if norm > 0.0 {
                norm
            } else {
                1.0
            }
        })
        .collect();
    // Column norms can overflow even when every entry is finite.
    if norms.iter().any(|n| !n.is_finite()) {
        return Err(FitError::Overflow { degree });
    }
    let scaled = DMatrix::from_fn(rows, cols, |r, c| vandermonde[(r, c)] / norms[c]);

    let svd = scaled
        .try_svd(true, true, f64::EPSILON, SVD_MAX_ITERATIONS)
        .ok_or(FitError::NoConvergence)?;
    let tolerance = svd.singular_values.max() * rows.max(cols) as f64 * f64::EPSILON;
    let rank = svd.rank(tolerance);
    if rank < cols {
        return Err(FitError::Singular {
            rank,
            required: cols,
        });
    }

    let solution = svd.solve(&rhs, tolerance).map_err(|_| FitError::Singular {
        rank,
        required: cols,
    })?;

    let coefficients: Vec<f64> = solution
        .iter()
        .zip(&norms)
        .map(|(value, norm)| value / norm)
        .collect();

    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(FitError::NonFiniteCoefficients);
    }
    Ok(coefficients)
}
