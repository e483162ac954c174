//! Mathematical utilities for the algorithm

/// Tone response curves driving stipple density
pub mod response;
