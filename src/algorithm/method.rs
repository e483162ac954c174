//! Selection of exactly one ditherer per run

use clap::ValueEnum;

use crate::algorithm::binarize::dither_threshold;
use crate::algorithm::diffusion::dither_error_diffusion;
use crate::algorithm::stipple::{StippleParams, dither_stipple_seeded};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::Result;
use crate::spatial::Raster;

/// Available dithering methods
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Floyd-Steinberg error diffusion
    #[default]
    FloydSteinberg,
    /// Random dots scattered per cell
    Stipple,
    /// Plain threshold at mid-gray
    Threshold,
}

/// Parameters consumed by [`Method::apply`]
///
/// Only [`Method::Stipple`] reads them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DitherSettings {
    /// Stipple cell size and response curve
    pub stipple: StippleParams,
    /// Seed for stipple dot placement
    pub seed: u64,
}

impl DitherSettings {
    /// Validate stipple parameters and pair them with a seed
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if [`StippleParams::new`] rejects
    /// the stipple parameters
    pub fn new(cellsize: usize, alpha: f64, gamma: f64, seed: u64) -> Result<Self> {
        Ok(Self {
            stipple: StippleParams::new(cellsize, alpha, gamma)?,
            seed,
        })
    }

    /// Default stipple parameters with a custom seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Method {
    /// Dither `raster` with this method
    pub fn apply(self, raster: &Raster, settings: &DitherSettings) -> Raster {
        match self {
            Self::FloydSteinberg => dither_error_diffusion(raster),
            Self::Stipple => dither_stipple_seeded(raster, &settings.stipple, settings.seed),
            Self::Threshold => dither_threshold(raster),
        }
    }

    /// Human-readable method name used in log output
    pub const fn name(self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Stipple => "stipple",
            Self::Threshold => "threshold",
        }
    }
}

impl Default for DitherSettings {
    fn default() -> Self {
        Self {
            stipple: StippleParams::default(),
            seed: DEFAULT_SEED,
        }
    }
}
