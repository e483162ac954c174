//! Cell intensity estimation driving stipple density
//!
//! The response is not monotonic in perceived darkness: both very dark and
//! very light cells saturate toward the ends of the logistic curve exactly as
//! the dot-count curve expects, so the constants here must not be retuned.

use ndarray::ArrayView2;

use crate::io::configuration::{BLACK, INTENSITY_SCALE, LOGISTIC_MIDPOINT};
use crate::math::response::logistic;
use crate::spatial::Raster;

/// Mean intensity of `view` normalized by `count * 256`
///
/// Returns `None` for an empty view.
pub fn normalized_mean(view: &ArrayView2<'_, u8>) -> Option<f64> {
    let count = view.len();
    if count == 0 {
        return None;
    }

    let sum: f64 = view.iter().map(|&sample| f64::from(sample)).sum();
    Some(sum / (count as f64 * INTENSITY_SCALE))
}

/// Logistic response of a cell, in (0, 1)
///
/// An empty cell is treated as mid-gray and yields exactly 0.5.
pub fn cell_response(view: &ArrayView2<'_, u8>) -> f64 {
    logistic(normalized_mean(view).unwrap_or(LOGISTIC_MIDPOINT))
}

/// Share of black samples in `raster`, 0.0 for an empty raster
pub fn black_fraction(raster: &Raster) -> f64 {
    let total = raster.width() * raster.height();
    if total == 0 {
        return 0.0;
    }
    raster.count_value(BLACK) as f64 / total as f64
}
