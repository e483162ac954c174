//! Cell-based stochastic stipple dithering
//!
//! The raster is split into square cells of edge `cellsize`. Two workers walk
//! interleaved sub-grids (origins at `0` and `cellsize`, stride
//! `2 * cellsize` on both axes), estimate each cell's intensity response and
//! scatter a matching number of black dots over a white canvas.
//!
//! Each worker owns its random source and draws into its own bilevel mask.
//! Both masks are joined before they are merged, so callers never observe a
//! partial result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::intensity::cell_response;
use crate::io::configuration::{BLACK, DEFAULT_ALPHA, DEFAULT_CELLSIZE, DEFAULT_GAMMA};
use crate::io::error::{Result, invalid_parameter};
use crate::math::response::dot_count;
use crate::spatial::Raster;
use crate::spatial::cell::{Cell, interleaved_cells};

/// Validated stipple parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StippleParams {
    cellsize: usize,
    alpha: f64,
    gamma: f64,
}

impl StippleParams {
    /// Validate and bundle stipple parameters
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `cellsize` is zero or if `alpha`
    /// or `gamma` is negative, NaN or infinite
    pub fn new(cellsize: usize, alpha: f64, gamma: f64) -> Result<Self> {
        if cellsize == 0 {
            return Err(invalid_parameter("cellsize", &cellsize, &"must be at least 1"));
        }
        validate_factor("alpha", alpha)?;
        validate_factor("gamma", gamma)?;

        Ok(Self {
            cellsize,
            alpha,
            gamma,
        })
    }

    /// Cell edge length in pixels
    pub const fn cellsize(&self) -> usize {
        self.cellsize
    }

    /// Dot-count noise floor
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Contrast gain of the dot-count curve
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for StippleParams {
    fn default() -> Self {
        Self {
            cellsize: DEFAULT_CELLSIZE,
            alpha: DEFAULT_ALPHA,
            gamma: DEFAULT_GAMMA,
        }
    }
}

fn validate_factor(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(invalid_parameter(parameter, &value, &"must be a finite number"));
    }
    if value < 0.0 {
        return Err(invalid_parameter(parameter, &value, &"must not be negative"));
    }
    Ok(())
}

/// Stipple `raster` with a seed drawn from the operating system
///
/// # Errors
///
/// Returns an invalid parameter error if the parameters are rejected by
/// [`StippleParams::new`]; no work is done in that case
pub fn dither_stipple(raster: &Raster, cellsize: usize, alpha: f64, gamma: f64) -> Result<Raster> {
    let params = StippleParams::new(cellsize, alpha, gamma)?;
    let seed = rand::random::<u64>();
    Ok(dither_stipple_seeded(raster, &params, seed))
}

/// Reproducible stippling from a single seed
///
/// Two independent worker sources are derived from `seed`.
pub fn dither_stipple_seeded(raster: &Raster, params: &StippleParams, seed: u64) -> Raster {
    log::debug!("stipple seed {seed}");
    let mut master = StdRng::seed_from_u64(seed);
    let sources = [StdRng::from_rng(&mut master), StdRng::from_rng(&mut master)];
    dither_stipple_with_sources(raster, params, sources)
}

/// Stipple `raster` using one caller-supplied random source per worker
///
/// `sources[0]` drives the pass at offset `0`, `sources[1]` the pass at
/// offset `cellsize`. Returns only after both passes finished.
pub fn dither_stipple_with_sources<R>(
    raster: &Raster,
    params: &StippleParams,
    sources: [R; 2],
) -> Raster
where
    R: Rng + Send,
{
    let [mut even_rng, mut odd_rng] = sources;
    let cellsize = params.cellsize();

    let (mut dithered, odd_mask) = rayon::join(
        || stipple_pass(raster, params, 0, &mut even_rng),
        || stipple_pass(raster, params, cellsize, &mut odd_rng),
    );

    let merged = dithered.darken_with(&odd_mask);
    debug_assert!(merged, "pass masks differ in size");

    log::debug!(
        "stippled {}x{} with cellsize {cellsize}: {} black pixels",
        raster.width(),
        raster.height(),
        dithered.count_value(BLACK)
    );
    dithered
}

/// Dots to place in a cell with response `mu` and `cell_area` pixels
///
/// The curve value is truncated toward zero and never exceeds the cell's
/// pixel capacity.
pub fn dot_budget(mu: f64, cell_area: usize, params: &StippleParams) -> usize {
    let n = dot_count(mu, params.alpha(), params.gamma());
    // Saturating float-to-int cast keeps huge gammas in range
    (n as usize).min(cell_area)
}

/// White mask the size of `raster` holding the dots of the pass at `offset`
pub fn stipple_pass<R: Rng>(
    raster: &Raster,
    params: &StippleParams,
    offset: usize,
    rng: &mut R,
) -> Raster {
    let mut mask = Raster::white(raster.width(), raster.height());
    let mut placed = 0_usize;

    for cell in interleaved_cells(raster.width(), raster.height(), params.cellsize(), offset) {
        if cell.is_empty() {
            continue;
        }
        let mu = cell_response(&raster.view(&cell));
        let budget = dot_budget(mu, cell.area(), params);
        for k in 0..budget {
            let (x, y) = place_dot(&cell, k, rng);
            mask.set(x, y, BLACK);
        }
        placed += budget;
    }

    log::trace!("pass at offset {offset} placed {placed} dots");
    mask
}

/// Position of the `k`-th dot inside `cell`
///
/// The window for each axis is `[origin, origin + k)` clipped to the cell,
/// so early dots cluster at the top-left corner; an empty window resolves to
/// the origin.
pub fn place_dot<R: Rng>(cell: &Cell, k: usize, rng: &mut R) -> (usize, usize) {
    let x = draw_in_window(cell.x, cell.x.saturating_add(k).min(cell.x_end()), rng);
    let y = draw_in_window(cell.y, cell.y.saturating_add(k).min(cell.y_end()), rng);
    (x, y)
}

fn draw_in_window<R: Rng>(min: usize, max: usize, rng: &mut R) -> usize {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
