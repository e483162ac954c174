//! Intensity analysis over rasters and cells

/// Cell intensity estimation and tone measurements
pub mod intensity;
