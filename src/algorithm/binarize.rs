//! Fixed-threshold quantization to pure black or white

use crate::io::configuration::{BINARIZE_THRESHOLD, BLACK, WHITE};
use crate::spatial::Raster;

/// Map one sample to black (below 127) or white
pub const fn binarize(sample: u8) -> u8 {
    if sample < BINARIZE_THRESHOLD { BLACK } else { WHITE }
}

/// Binarize every sample independently, without diffusing any error
pub fn dither_threshold(raster: &Raster) -> Raster {
    Raster::from_fn(raster.width(), raster.height(), |x, y| {
        raster.get(x, y).map_or(WHITE, binarize)
    })
}
