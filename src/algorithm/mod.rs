/// Fixed-threshold binarization
pub mod binarize;
/// Floyd-Steinberg error diffusion
pub mod diffusion;
/// Dithering method selection and dispatch
pub mod method;
/// Cell-based stochastic stipple dithering
pub mod stipple;

pub use method::{DitherSettings, Method};
