//! Image decoding and grayscale normalization.

use crate::{AsciiError, Result};
use image::{DynamicImage, GrayImage, ImageError, ImageReader};
use std::path::Path;

/// Open an image file, picking the decoder from its contents rather than its extension.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let decode = || -> std::result::Result<DynamicImage, ImageError> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };
    decode().map_err(|source| AsciiError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Open an image file and convert it to single-channel brightness.
pub fn decode_and_normalize(path: impl AsRef<Path>) -> Result<GrayImage> {
    Ok(normalize(&open_image(path)?))
}

/// Drop color and alpha, keeping luma only.
pub fn normalize(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}
