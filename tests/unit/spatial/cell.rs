//! Tests for cell clipping and the interleaved stipple sub-grids

#[cfg(test)]
mod tests {
    use halftone::spatial::Cell;
    use halftone::spatial::cell::interleaved_cells;
    use std::collections::HashSet;

    // Tests clipping at the right and bottom raster edges
    // Verified by returning the unclipped size
    #[test]
    fn test_clipped_cell_at_edge() {
        let cell = Cell::clipped(4, 3, 3, 5, 5);

        assert_eq!((cell.width, cell.height), (1, 2));
        assert_eq!(cell.area(), 2);
        assert_eq!((cell.x_end(), cell.y_end()), (5, 5));
        assert!(!cell.is_empty());
    }

    // Tests an origin outside the raster yields an empty cell
    // Verified by underflowing the remaining extent
    #[test]
    fn test_clipped_cell_outside_raster() {
        let cell = Cell::clipped(6, 0, 2, 5, 5);

        assert!(cell.is_empty());
        assert_eq!(cell.area(), 0);
    }

    // Tests containment uses half-open bounds
    // Verified by making the end inclusive
    #[test]
    fn test_contains() {
        let cell = Cell::clipped(2, 2, 2, 10, 10);

        assert!(cell.contains(2, 2));
        assert!(cell.contains(3, 3));
        assert!(!cell.contains(4, 3));
        assert!(!cell.contains(1, 2));
    }

    // Tests the pass at offset 0 visits origins on a 2*cellsize stride
    // Verified by using cellsize as the stride
    #[test]
    fn test_even_pass_origins() {
        let origins: Vec<(usize, usize)> = interleaved_cells(8, 8, 2, 0)
            .map(|cell| (cell.x, cell.y))
            .collect();

        assert_eq!(
            origins,
            vec![
                (0, 0),
                (0, 4),
                (4, 0),
                (4, 4)
            ]
        );
    }

    // Tests the two passes never share a pixel
    // Verified by starting the second pass at offset 1
    #[test]
    fn test_passes_are_disjoint() {
        let (width, height, cellsize) = (11, 7, 3);
        let mut seen = HashSet::new();

        for offset in [0, cellsize] {
            for cell in interleaved_cells(width, height, cellsize, offset) {
                for x in cell.x..cell.x_end() {
                    for y in cell.y..cell.y_end() {
                        assert!(seen.insert((x, y)), "pixel ({x}, {y}) visited twice");
                    }
                }
            }
        }

        assert!(!seen.is_empty());
    }

    // Tests cells are clipped when the raster is not a multiple of the cell size
    // Verified by removing clipping from the iterator
    #[test]
    fn test_cells_stay_inside_raster() {
        for cell in interleaved_cells(5, 3, 2, 2) {
            assert!(cell.x_end() <= 5);
            assert!(cell.y_end() <= 3);
        }
        assert_eq!(interleaved_cells(5, 3, 2, 2).count(), 1);
    }

    // Tests a zero cell size produces no cells instead of looping
    // Verified by stepping by zero
    #[test]
    fn test_zero_cellsize_yields_nothing() {
        assert_eq!(interleaved_cells(4, 4, 0, 0).count(), 0);
    }
}
