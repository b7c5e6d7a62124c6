//! Aspect-corrected resize to the output grid.

use crate::{AsciiError, Result};
use image::imageops::{self, FilterType};
use image::GrayImage;

/// Monospace cells are roughly 11:20 (width:height), so rows are squashed.
pub const ASPECT_CORRECTION: f64 = 0.55;

/// Output rows for a source of `src_width` x `src_height` at `target_width` columns.
/// Never less than 1.
pub fn target_height(src_width: u32, src_height: u32, target_width: u32) -> u32 {
    let aspect = f64::from(src_height) / f64::from(src_width);
    let rows = (f64::from(target_width) * aspect * ASPECT_CORRECTION).floor();
    if rows < 1.0 {
        1
    } else {
        rows.min(f64::from(u32::MAX)) as u32
    }
}

/// Resize to exactly `target_width` columns and the aspect-corrected row count.
pub fn resize(image: &GrayImage, target_width: u32) -> Result<GrayImage> {
    if target_width == 0 {
        return Err(AsciiError::InvalidWidth(target_width));
    }
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AsciiError::EmptyImage { width, height });
    }
    let rows = target_height(width, height, target_width);
    Ok(imageops::resize(image, target_width, rows, FilterType::Triangle))
}
