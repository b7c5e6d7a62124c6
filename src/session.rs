//! Shell-side state: the last result, current theme and user inputs.

use crate::{
    open_image, AsciiError, Converter, Palette, Result, Theme, DEFAULT_PALETTE, DEFAULT_WIDTH,
};
use std::path::Path;

/// Strip whitespace and the `{...}` wrapping that drag-and-drop adds to paths with spaces.
pub fn normalize_dropped_path(raw: &str) -> &str {
    let path = raw.trim();
    path.strip_prefix('{')
        .and_then(|p| p.strip_suffix('}'))
        .unwrap_or(path)
}

#[derive(Debug, Clone)]
pub struct Session {
    pub theme: Theme,
    pub width: u32,
    /// Raw palette text as typed; empty means the built-in palette.
    pub palette_input: String,
    current: Option<String>,
}

impl Session {
    pub fn new(theme: Theme, width: u32, palette_input: impl Into<String>) -> Self {
        Self { theme, width, palette_input: palette_input.into(), current: None }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        log::debug!("theme switched to {:?}", self.theme);
        self.theme
    }

    /// Convert the image at `raw_path`. A failure leaves the previous result in place.
    pub fn process(&mut self, raw_path: &str) -> Result<&str> {
        let path = normalize_dropped_path(raw_path);
        let palette = Palette::or_default(&self.palette_input);
        log::debug!("converting {path} at width {} with palette {palette:?}", self.width);

        let image = open_image(path)?;
        let art = Converter::new().with_width(self.width).with_palette(palette).convert(&image)?;
        log::info!(
            "converted {path}: {}x{} -> {} columns, {} rows",
            image.width(),
            image.height(),
            self.width,
            art.lines().count()
        );
        Ok(self.current.insert(art).as_str())
    }

    /// Write the last result as UTF-8 text.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let art = self.current.as_deref().ok_or(AsciiError::NothingToSave)?;
        std::fs::write(path, art).map_err(|source| AsciiError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("saved ASCII art to {}", path.display());
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Theme::default(), DEFAULT_WIDTH, DEFAULT_PALETTE)
    }
}
