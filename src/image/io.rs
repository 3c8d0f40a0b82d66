//! Convenience helpers for loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::OwnedImage;
use crate::util::{CorrDetectError, CorrDetectResult};
use image::{DynamicImage, GrayImage, RgbImage};
use std::path::Path;

/// Creates an owned image from a grayscale image buffer.
pub fn owned_from_gray_image(img: &GrayImage) -> CorrDetectResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedImage::new(img.as_raw().clone(), width, height)
}

/// Converts a decoded image of any colour type to an owned grayscale image.
pub fn owned_from_dynamic_image(img: &DynamicImage) -> CorrDetectResult<OwnedImage> {
    owned_from_gray_image(&img.to_luma8())
}

/// Decodes an image from disk, keeping its original colour type.
pub fn load_image<P: AsRef<Path>>(path: P) -> CorrDetectResult<DynamicImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CorrDetectError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|err| CorrDetectError::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Loads an image from disk and converts it to a grayscale owned image.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> CorrDetectResult<OwnedImage> {
    let img = load_image(path)?;
    owned_from_dynamic_image(&img)
}

/// Encodes an RGB image to disk; the format follows the file extension.
pub fn save_rgb_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> CorrDetectResult<()> {
    let path = path.as_ref();
    img.save(path).map_err(|err| CorrDetectError::Encode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
