//! Algorithm constants and runtime configuration defaults

// Quantization shared by threshold and error-diffusion dithering
/// Samples below this value binarize to black, the rest to white
pub const BINARIZE_THRESHOLD: u8 = 127;
/// Black output sample
pub const BLACK: u8 = 0;
/// White output sample
pub const WHITE: u8 = 255;

/// Floyd-Steinberg weight normalization (7 + 3 + 5 + 1)
pub const DIFFUSION_DIVISOR: i32 = 16;

// Cell intensity response curve
/// Divisor applied per sample when averaging a cell (256, not 255)
pub const INTENSITY_SCALE: f64 = 256.0;
/// Steepness of the logistic curve applied to the cell mean
pub const LOGISTIC_STEEPNESS: f64 = 10.0;
/// Cell mean at which the logistic response crosses 0.5
pub const LOGISTIC_MIDPOINT: f64 = 0.5;
/// Divisor of the squared dot-count curve
pub const DOT_COUNT_DIVISOR: f64 = 3.0;

// Default values for configurable parameters
/// Default stipple cell edge length in pixels
pub const DEFAULT_CELLSIZE: usize = 2;
/// Default stipple noise floor
pub const DEFAULT_ALPHA: f64 = 3.0;
/// Default stipple contrast gain
pub const DEFAULT_GAMMA: f64 = 9.0;
/// Fixed seed for reproducible stippling from the command line
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_dithered";
/// Extension of every written output
pub const OUTPUT_EXTENSION: &str = "png";
/// Input extensions accepted, one or more per enabled `image` codec
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
