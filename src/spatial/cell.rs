//! Square stipple cells and the interleaved sub-grids they are visited in

/// Axis-aligned window into a raster, clipped to the raster's extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column of the top-left pixel
    pub x: usize,
    /// Row of the top-left pixel
    pub y: usize,
    /// Width in pixels after clipping
    pub width: usize,
    /// Height in pixels after clipping
    pub height: usize,
}

impl Cell {
    /// Square cell of edge `size` at `(x, y)`, clipped to a
    /// `raster_width` x `raster_height` raster
    ///
    /// An origin outside the raster produces an empty cell.
    pub const fn clipped(
        x: usize,
        y: usize,
        size: usize,
        raster_width: usize,
        raster_height: usize,
    ) -> Self {
        Self {
            x,
            y,
            width: clip_extent(x, size, raster_width),
            height: clip_extent(y, size, raster_height),
        }
    }

    /// Exclusive end column
    pub const fn x_end(&self) -> usize {
        self.x + self.width
    }

    /// Exclusive end row
    pub const fn y_end(&self) -> usize {
        self.y + self.height
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the cell covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `(x, y)` lies inside the cell
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x_end() && y >= self.y && y < self.y_end()
    }
}

const fn clip_extent(origin: usize, size: usize, limit: usize) -> usize {
    if origin >= limit {
        0
    } else if limit - origin < size {
        limit - origin
    } else {
        size
    }
}

/// Cells visited by one stipple pass
///
/// Both axes start at `offset` and advance by `2 * cellsize`, so the passes
/// at offsets `0` and `cellsize` never share a pixel. Returns nothing when
/// `cellsize` is zero.
pub fn interleaved_cells(
    width: usize,
    height: usize,
    cellsize: usize,
    offset: usize,
) -> impl Iterator<Item = Cell> {
    let stride = cellsize.saturating_mul(2).max(1);
    let rows = if cellsize == 0 { 0..0 } else { offset..height };
    let cols = if cellsize == 0 { 0..0 } else { offset..width };

    cols.step_by(stride).flat_map(move |x| {
        rows.clone()
            .step_by(stride)
            .map(move |y| Cell::clipped(x, y, cellsize, width, height))
    })
}
