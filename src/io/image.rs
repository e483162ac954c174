//! Grayscale decoding of source images and PNG export of dithered rasters

use std::path::Path;

use image::GrayImage;

use crate::io::error::{HalftoneError, Result};
use crate::spatial::Raster;

/// Decode any supported image and convert it to an 8-bit luma raster
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded dimensions do not fit in memory as a raster
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path_buf = path.as_ref().to_path_buf();
    let luma = image::open(&path_buf)
        .map_err(|e| HalftoneError::ImageLoad {
            path: path_buf,
            source: e,
        })?
        .to_luma8();

    let (width, height) = luma.dimensions();
    Raster::from_raw(width as usize, height as usize, luma.into_raw())
}

/// Convert a raster into an `image` grayscale buffer
///
/// # Errors
///
/// Returns an error if the raster is larger than `u32::MAX` on either axis
pub fn raster_to_gray_image(raster: &Raster) -> Result<GrayImage> {
    let invalid = || HalftoneError::InvalidDimensions {
        width: raster.width(),
        height: raster.height(),
        len: raster.width() * raster.height(),
    };
    let width = u32::try_from(raster.width()).map_err(|_overflow| invalid())?;
    let height = u32::try_from(raster.height()).map_err(|_overflow| invalid())?;

    GrayImage::from_raw(width, height, raster.clone().into_raw()).ok_or_else(invalid)
}

/// Export a raster as a grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The raster cannot be represented as an image buffer
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster_as_png<P: AsRef<Path>>(raster: &Raster, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = raster_to_gray_image(raster)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| HalftoneError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| HalftoneError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
