//! Tests for cell intensity estimation

#[cfg(test)]
mod tests {
    use halftone::analysis::intensity::{black_fraction, cell_response, normalized_mean};
    use halftone::spatial::{Cell, Raster};

    fn full_cell(raster: &Raster) -> Cell {
        Cell::clipped(0, 0, raster.width().max(raster.height()), raster.width(), raster.height())
    }

    // Tests the mean divides by 256 per sample rather than 255
    // Verified by dividing by 255
    #[test]
    fn test_normalized_mean_uses_256() {
        let raster = Raster::white(2, 2);
        let mean = normalized_mean(&raster.view(&full_cell(&raster)));

        assert_eq!(mean, Some(255.0 / 256.0));
    }

    // Tests the mean of a mid-gray cell is exactly one half
    // Verified by adding a rounding offset to the sum
    #[test]
    fn test_normalized_mean_mid_gray() {
        let raster = Raster::new(3, 2, 128);
        let mean = normalized_mean(&raster.view(&full_cell(&raster)));

        assert_eq!(mean, Some(0.5));
    }

    // Tests an empty view has no mean and responds with 0.5
    // Verified by dividing by zero samples
    #[test]
    fn test_empty_cell_response() {
        let raster = Raster::white(2, 2);
        let empty = Cell::clipped(5, 5, 2, 2, 2);
        let view = raster.view(&empty);

        assert_eq!(normalized_mean(&view), None);
        assert!((cell_response(&view) - 0.5).abs() < f64::EPSILON);
    }

    // Tests both extremes saturate the response toward opposite ends
    // Verified by inverting the mean before the logistic
    #[test]
    fn test_response_extremes() {
        let black = Raster::new(2, 2, 0);
        let white = Raster::white(2, 2);

        let dark = cell_response(&black.view(&full_cell(&black)));
        let light = cell_response(&white.view(&full_cell(&white)));

        assert!(dark < 0.01, "black cell response {dark}");
        assert!(light > 0.99, "white cell response {light}");
    }

    // Tests black pixel share
    // Verified by counting white pixels instead
    #[test]
    fn test_black_fraction() {
        let mut raster = Raster::white(2, 2);
        raster.set(0, 0, 0);

        assert!((black_fraction(&raster) - 0.25).abs() < f64::EPSILON);
        assert!(black_fraction(&Raster::white(0, 0)).abs() < f64::EPSILON);
    }
}
