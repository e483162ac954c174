//! Single-channel intensity raster shared by every ditherer
//!
//! Samples are stored row-major in an `Array2<u8>` indexed `(y, x)`, with
//! 0 meaning black and 255 meaning white. Coordinates outside the raster are
//! never wrapped: reads return `None` and writes are ignored.

use ndarray::{Array2, ArrayView2, Axis, Slice, Zip};

use crate::io::configuration::{BLACK, WHITE};
use crate::io::error::{HalftoneError, Result};
use crate::spatial::cell::Cell;

/// Fixed-size grayscale raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Array2<u8>,
}

impl Raster {
    /// Create a raster with every sample set to `fill`
    pub fn new(width: usize, height: usize, fill: u8) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), fill),
        }
    }

    /// Create an all-white raster, the starting canvas for stippling
    pub fn white(width: usize, height: usize) -> Self {
        Self::new(width, height, WHITE)
    }

    /// Build a raster from row-major samples
    ///
    /// # Errors
    ///
    /// Returns [`HalftoneError::InvalidDimensions`] if `samples` does not hold
    /// exactly `width * height` values
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        let len = samples.len();
        Array2::from_shape_vec((height, width), samples)
            .map(|pixels| Self { pixels })
            .map_err(|_shape_error| HalftoneError::InvalidDimensions { width, height, len })
    }

    /// Build a raster by evaluating `f(x, y)` for every position
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Sample at `(x, y)`, or `None` outside the raster
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.pixels.get((y, x)).copied()
    }

    /// Store `value` at `(x, y)`
    ///
    /// Returns `false` and leaves the raster untouched when the position is
    /// outside the raster.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        self.pixels.get_mut((y, x)).map(|sample| *sample = value).is_some()
    }

    /// Read-only view of the samples covered by `cell`
    ///
    /// The cell is intersected with the raster first, so a cell built for a
    /// larger raster yields a smaller (possibly empty) view.
    pub fn view(&self, cell: &Cell) -> ArrayView2<'_, u8> {
        let x_end = cell.x_end().min(self.width());
        let y_end = cell.y_end().min(self.height());
        let x_start = cell.x.min(x_end);
        let y_start = cell.y.min(y_end);
        self.pixels
            .slice_axis(Axis(0), Slice::from(y_start..y_end))
            .slice_axis_move(Axis(1), Slice::from(x_start..x_end))
    }

    /// Keep the darker of `self` and `other` at every position
    ///
    /// Returns `false` and changes nothing when the dimensions differ.
    pub fn darken_with(&mut self, other: &Self) -> bool {
        if self.pixels.dim() != other.pixels.dim() {
            return false;
        }
        Zip::from(&mut self.pixels)
            .and(&other.pixels)
            .for_each(|sample, &over| *sample = (*sample).min(over));
        true
    }

    /// Consume the raster and return its row-major samples
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }

    /// Number of samples equal to `value`
    pub fn count_value(&self, value: u8) -> usize {
        self.pixels.iter().filter(|&&sample| sample == value).count()
    }

    /// Whether every sample is pure black or pure white
    pub fn is_bilevel(&self) -> bool {
        self.pixels
            .iter()
            .all(|&sample| sample == BLACK || sample == WHITE)
    }
}
