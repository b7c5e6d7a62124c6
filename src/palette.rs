//! Brightness to character quantization.

use crate::{AsciiError, Result};
use image::GrayImage;
use std::fmt;

/// Built-in gradient, darkest first.
pub const DEFAULT_PALETTE: &str = "@%#*+=-:. ";

/// Ordered characters from darkest (index 0) to lightest. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    pub fn new(chars: &str) -> Result<Self> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    /// Empty input falls back to the built-in palette.
    pub fn or_default(chars: &str) -> Self {
        Self::new(chars).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// floor(v / 255 * (len - 1)), computed exactly in integers.
    #[inline]
    pub fn index_for(&self, value: u8) -> usize {
        usize::from(value) * (self.chars.len() - 1) / 255
    }

    #[inline]
    pub fn map(&self, value: u8) -> char {
        self.chars[self.index_for(value)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { chars: DEFAULT_PALETTE.chars().collect() }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Map every sample to a palette character, one line per row.
///
/// Lines are joined by `\n` with no trailing newline.
pub fn quantize_to_text(image: &GrayImage, palette: &Palette) -> String {
    let (width, height) = image.dimensions();
    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for y in 0..height {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..width {
            out.push(palette.map(image.get_pixel(x, y).0[0]));
        }
    }
    out
}
