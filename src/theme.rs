//! Dark and light color themes.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb { r: c.0, g: c.1, b: c.2 }
    }
}

/// Every color a themed surface needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Rgb,
    pub fg: Rgb,
    pub entry_bg: Rgb,
    pub entry_fg: Rgb,
    /// Art background.
    pub text_bg: Rgb,
    /// Art foreground.
    pub text_fg: Rgb,
    pub btn_bg: Rgb,
    pub btn_fg: Rgb,
    pub panel_bg: Rgb,
    pub label_bg: Rgb,
    pub label_fg: Rgb,
    pub scale_bg: Rgb,
    pub scale_fg: Rgb,
    pub highlight: Rgb,
}

const DARK: ThemeColors = ThemeColors {
    bg: Rgb(0x1e, 0x1e, 0x1e),
    fg: Rgb(0xe0, 0xe0, 0xe0),
    entry_bg: Rgb(0x2d, 0x2d, 0x2d),
    entry_fg: Rgb(0xe0, 0xe0, 0xe0),
    text_bg: Rgb(0x0d, 0x0d, 0x0d),
    text_fg: Rgb(0x00, 0xff, 0x41),
    btn_bg: Rgb(0x3a, 0x3a, 0x3a),
    btn_fg: Rgb(0xe0, 0xe0, 0xe0),
    panel_bg: Rgb(0x25, 0x25, 0x25),
    label_bg: Rgb(0x25, 0x25, 0x25),
    label_fg: Rgb(0xe0, 0xe0, 0xe0),
    scale_bg: Rgb(0x25, 0x25, 0x25),
    scale_fg: Rgb(0xe0, 0xe0, 0xe0),
    highlight: Rgb(0x55, 0x55, 0x55),
};

const LIGHT: ThemeColors = ThemeColors {
    bg: Rgb(0xf5, 0xf5, 0xf5),
    fg: Rgb(0x1a, 0x1a, 0x1a),
    entry_bg: Rgb(0xff, 0xff, 0xff),
    entry_fg: Rgb(0x1a, 0x1a, 0x1a),
    text_bg: Rgb(0xff, 0xff, 0xff),
    text_fg: Rgb(0x1a, 0x1a, 0x1a),
    btn_bg: Rgb(0xdc, 0xdc, 0xdc),
    btn_fg: Rgb(0x1a, 0x1a, 0x1a),
    panel_bg: Rgb(0xe8, 0xe8, 0xe8),
    label_bg: Rgb(0xe8, 0xe8, 0xe8),
    label_fg: Rgb(0x1a, 0x1a, 0x1a),
    scale_bg: Rgb(0xe8, 0xe8, 0xe8),
    scale_fg: Rgb(0x1a, 0x1a, 0x1a),
    highlight: Rgb(0xc0, 0xc0, 0xc0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn colors(self) -> &'static ThemeColors {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
