//! Nonlinear curves mapping cell intensity to stipple dot counts

use crate::io::configuration::{DOT_COUNT_DIVISOR, LOGISTIC_MIDPOINT, LOGISTIC_STEEPNESS};

/// Logistic compression of a normalized cell mean
///
/// Centered at 0.5 with steepness 10, so a mean of 0.5 maps to exactly 0.5.
pub fn logistic(mean: f64) -> f64 {
    1.0 / (1.0 + (-LOGISTIC_STEEPNESS * (mean - LOGISTIC_MIDPOINT)).exp())
}

/// Target number of dots for a cell with response `mu`
///
/// Evaluates `((1 - mu) * gamma)^2 / 3`; anything below the `alpha` noise
/// floor is suppressed to zero. The result is not truncated.
pub fn dot_count(mu: f64, alpha: f64, gamma: f64) -> f64 {
    let n = ((1.0 - mu) * gamma).powi(2) / DOT_COUNT_DIVISOR;
    if n < alpha { 0.0 } else { n }
}
