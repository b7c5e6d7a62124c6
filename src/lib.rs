//! Image to ASCII art converter.

pub mod config;
pub mod decode;
pub mod palette;
pub mod preview;
pub mod resize;
pub mod session;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::Config;
pub use decode::{decode_and_normalize, normalize, open_image};
pub use palette::{quantize_to_text, Palette, DEFAULT_PALETTE};
pub use resize::{resize, target_height, ASPECT_CORRECTION};
pub use session::Session;
pub use theme::{Rgb, Theme, ThemeColors};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsciiError {
    #[error("could not open image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("palette must contain at least one character")]
    EmptyPalette,
    #[error("target width must be at least 1, got {0}")]
    InvalidWidth(u32),
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("could not save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("nothing to save, generate ASCII art first")]
    NothingToSave,
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 50;

/// Decode, resize and quantize in one call.
pub struct Converter {
    width: u32,
    palette: Palette,
}

impl Converter {
    pub fn new() -> Self {
        Self { width: DEFAULT_WIDTH, palette: Palette::default() }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn convert(&self, image: &image::DynamicImage) -> Result<String> {
        let gray = normalize(image);
        let resized = resize(&gray, self.width)?;
        Ok(quantize_to_text(&resized, &self.palette))
    }

    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let gray = decode_and_normalize(path)?;
        let resized = resize(&gray, self.width)?;
        Ok(quantize_to_text(&resized, &self.palette))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
