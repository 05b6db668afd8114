//! Image loading and saving

use crate::error::AnalysisError;
use crate::Result;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Decode any supported raster format into 8-bit RGB, dropping alpha.
    pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| AnalysisError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(image.to_rgb8())
    }

    /// Encode an image, format chosen from the file extension
    pub fn save_rgb<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
        let path = path.as_ref();
        image.save(path).map_err(|source| AnalysisError::ImageEncode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Alpha-blend `colour` over the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn blend_pixel(image: &mut RgbImage, x: i64, y: i64, colour: Rgb<u8>, alpha: f32) {
        if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height()) {
            return;
        }
        let dst = image.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let blended = f32::from(colour[c]) * alpha + f32::from(dst[c]) * (1.0 - alpha);
            dst[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}
