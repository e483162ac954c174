/// Command-line driver for dithering image files
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types for every fallible operation
pub mod error;
/// Decoding to and encoding from grayscale rasters
pub mod image;
/// Progress display for batch runs
pub mod progress;
