//! Floyd-Steinberg error diffusion
//!
//! Pixels are visited once in raster order. Each one is binarized and the
//! quantization error, divided by 16 with truncation toward zero, is pushed to
//! the four unvisited neighbours:
//!
//! ```text
//!        X   7
//!    3   5   1
//! ```
//!
//! Neighbour updates are accumulated in `i32` and clamped into `[0, 255]` when
//! stored. Updates that would land outside the raster are dropped.

use crate::algorithm::binarize::binarize;
use crate::io::configuration::{BLACK, DIFFUSION_DIVISOR, WHITE};
use crate::spatial::Raster;

/// Neighbour offsets `(dx, dy)` and their error weights
pub const FLOYD_STEINBERG: [(isize, usize, i32); 4] = [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)];

/// Dither `raster` to black and white with Floyd-Steinberg error diffusion
///
/// The input is left untouched; the result has the same dimensions and only
/// contains 0 and 255.
pub fn dither_error_diffusion(raster: &Raster) -> Raster {
    let mut dithered = raster.clone();
    let (width, height) = (dithered.width(), dithered.height());
    log::debug!("floyd-steinberg over {width}x{height}");

    for y in 0..height {
        for x in 0..width {
            let Some(old) = dithered.get(x, y) else {
                continue;
            };
            let new = binarize(old);
            dithered.set(x, y, new);

            let quant = (i32::from(old) - i32::from(new)) / DIFFUSION_DIVISOR;
            if quant == 0 {
                continue;
            }

            for &(dx, dy, weight) in &FLOYD_STEINBERG {
                let Some(nx) = x.checked_add_signed(dx) else {
                    continue;
                };
                diffuse(&mut dithered, nx, y + dy, weight * quant);
            }
        }
    }

    dithered
}

// Out-of-range targets have no sample to read and are skipped
fn diffuse(raster: &mut Raster, x: usize, y: usize, error: i32) {
    if let Some(current) = raster.get(x, y) {
        raster.set(x, y, clamp_sample(i32::from(current) + error));
    }
}

/// Clamp a signed accumulator into a stored sample
///
/// Values below 1 become black and values above 254 become white.
pub const fn clamp_sample(value: i32) -> u8 {
    if value < 1 {
        BLACK
    } else if value > 254 {
        WHITE
    } else {
        value as u8
    }
}
