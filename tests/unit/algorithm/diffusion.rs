//! Tests for Floyd-Steinberg error diffusion

#[cfg(test)]
mod tests {
    use halftone::algorithm::diffusion::{FLOYD_STEINBERG, clamp_sample, dither_error_diffusion};
    use halftone::spatial::Raster;

    // Tests the kernel weights sum to the divisor
    // Verified by changing the bottom weight to 4
    #[test]
    fn test_kernel_weights() {
        let total: i32 = FLOYD_STEINBERG.iter().map(|&(_, _, weight)| weight).sum();
        assert_eq!(total, 16);
    }

    // Tests clamp-on-write boundaries
    // Verified by clamping at 0 and 255 inclusive
    #[test]
    fn test_clamp_sample() {
        assert_eq!(clamp_sample(-40), 0);
        assert_eq!(clamp_sample(0), 0);
        assert_eq!(clamp_sample(1), 1);
        assert_eq!(clamp_sample(254), 254);
        assert_eq!(clamp_sample(255), 255);
        assert_eq!(clamp_sample(400), 255);
    }

    // Tests a light 4x4 raster against a hand-traced result
    // Verified by rounding the quantization error instead of truncating
    #[test]
    fn test_light_raster_reference() {
        let raster = Raster::new(4, 4, 200);
        let dithered = dither_error_diffusion(&raster);

        #[rustfmt::skip]
        let expected = vec![
            255, 255, 255, 255,
            255, 255,   0, 255,
            255, 255, 255, 255,
            255,   0, 255, 255,
        ];
        assert_eq!(dithered.into_raw(), expected);
    }

    // Tests mid-gray produces a checkerboard
    // Verified by dropping the bottom-left neighbour
    #[test]
    fn test_mid_gray_checkerboard() {
        let raster = Raster::new(4, 4, 128);
        let dithered = dither_error_diffusion(&raster);

        #[rustfmt::skip]
        let expected = vec![
            255,   0, 255,   0,
              0, 255,   0, 255,
            255,   0, 255,   0,
              0, 255,   0, 255,
        ];
        assert_eq!(dithered.into_raw(), expected);
    }

    // Tests a dark raster with errors leaving through the edges
    // Verified by wrapping the bottom-left neighbour to the previous row
    #[test]
    fn test_dark_raster_edges() {
        let raster = Raster::new(3, 2, 100);
        let dithered = dither_error_diffusion(&raster);

        assert_eq!(dithered.into_raw(), vec![0, 255, 0, 0, 0, 255]);
    }

    // Tests single-pixel and single-line rasters never write out of bounds
    // Verified by removing the neighbour bounds check
    #[test]
    fn test_degenerate_sizes() {
        for (width, height) in [(1, 1), (1, 5), (5, 1), (0, 3), (3, 0)] {
            let raster = Raster::new(width, height, 90);
            let dithered = dither_error_diffusion(&raster);

            assert_eq!(dithered.width(), width);
            assert_eq!(dithered.height(), height);
            assert!(dithered.is_bilevel());
        }
    }

    // Tests the input raster is cloned, not mutated
    // Verified by dithering the source directly
    #[test]
    fn test_input_untouched() {
        let raster = Raster::new(3, 3, 60);
        let _dithered = dither_error_diffusion(&raster);

        assert_eq!(raster.count_value(60), 9);
    }
}
