//! Spatial data structures shared by the ditherers
//!
//! This module contains:
//! - The grayscale raster every algorithm reads and writes
//! - Cell windows and the interleaved grids stippling walks over

/// Square cell windows and interleaved cell iteration
pub mod cell;
/// Row-major single-channel raster
pub mod raster;

pub use cell::Cell;
pub use raster::Raster;
