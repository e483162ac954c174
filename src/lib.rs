//! Halftoning of grayscale rasters into black-and-white images
//!
//! Two dithering families are provided: Floyd-Steinberg error diffusion, which
//! quantizes each pixel and pushes the error to unvisited neighbours, and a
//! cell-based stochastic stipple, which scatters black dots over a white canvas
//! with a density driven by each cell's average intensity.

#![forbid(unsafe_code)]

/// Threshold, error-diffusion and stipple ditherers
pub mod algorithm;
/// Cell intensity estimation and tone measurements
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Tone response curves
pub mod math;
/// Raster storage and cell partitioning
pub mod spatial;

pub use algorithm::diffusion::dither_error_diffusion;
pub use algorithm::stipple::{StippleParams, dither_stipple};
pub use io::error::{HalftoneError, Result};
pub use spatial::Raster;
