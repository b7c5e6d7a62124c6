//! Thumbnail of the original image for display next to the art.
//!
//! Independent of the conversion pipeline: it works on the full-color source.

use crate::decode::open_image;
use crate::{AsciiError, Result};
use image::DynamicImage;
use std::path::Path;

pub const PREVIEW_MAX_HEIGHT: u32 = 180;
pub const PREVIEW_MIN_PANEL_WIDTH: u32 = 600;

/// Largest size fitting inside `bound` with the same aspect ratio. Never enlarges.
pub fn thumbnail_size((width, height): (u32, u32), (max_w, max_h): (u32, u32)) -> (u32, u32) {
    if width <= max_w && height <= max_h {
        return (width, height);
    }
    let scale = (f64::from(max_w) / f64::from(width)).min(f64::from(max_h) / f64::from(height));
    let fit = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    (fit(width), fit(height))
}

/// Decode `path` and fit it to the preview area of a panel `panel_width` wide.
pub fn render_preview(path: impl AsRef<Path>, panel_width: u32) -> Result<DynamicImage> {
    let image = open_image(path)?;
    let bound = (panel_width.max(PREVIEW_MIN_PANEL_WIDTH), PREVIEW_MAX_HEIGHT);
    let (w, h) = thumbnail_size((image.width(), image.height()), bound);
    if (w, h) == (image.width(), image.height()) {
        return Ok(image);
    }
    Ok(image.thumbnail_exact(w, h))
}

/// Render the preview of `src` and encode it to `dest` (format from extension).
pub fn write_preview(src: impl AsRef<Path>, dest: impl AsRef<Path>, panel_width: u32) -> Result<()> {
    let dest = dest.as_ref();
    let thumb = render_preview(src, panel_width)?;
    thumb.save(dest).map_err(|source| AsciiError::Encode {
        path: dest.to_path_buf(),
        source,
    })?;
    log::info!("preview written to {} ({}x{})", dest.display(), thumb.width(), thumb.height());
    Ok(())
}
