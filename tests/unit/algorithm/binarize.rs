//! Tests for fixed-threshold binarization

#[cfg(test)]
mod tests {
    use halftone::algorithm::binarize::{binarize, dither_threshold};
    use halftone::spatial::Raster;

    // Tests the threshold sits at 127
    // Verified by using <= instead of <
    #[test]
    fn test_binarize_threshold() {
        assert_eq!(binarize(0), 0);
        assert_eq!(binarize(126), 0);
        assert_eq!(binarize(127), 255);
        assert_eq!(binarize(255), 255);
    }

    // Tests threshold dithering binarizes each pixel independently
    // Verified by diffusing error to the right neighbour
    #[test]
    fn test_dither_threshold() {
        let raster = Raster::from_raw(4, 1, vec![100, 126, 127, 200]).unwrap();
        let dithered = dither_threshold(&raster);

        assert_eq!(dithered.into_raw(), vec![0, 0, 255, 255]);
    }

    // Tests the source raster is not modified
    // Verified by dithering in place
    #[test]
    fn test_dither_threshold_preserves_input() {
        let raster = Raster::new(3, 3, 90);
        let _dithered = dither_threshold(&raster);

        assert_eq!(raster.count_value(90), 9);
    }
}
