//! Configuration file handling.
//!
//! Loads from `<config dir>/asciify/config.toml` or a custom path.

use crate::{AsciiError, Result, Session, Theme, DEFAULT_PALETTE, DEFAULT_WIDTH};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub charset: Option<String>,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, charset: None, theme: Theme::default() }
    }
}

impl Config {
    /// Missing file means defaults; a file that exists must parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => return Err(AsciiError::ConfigRead { path, source }),
        };
        Self::parse(&content).map_err(|source| AsciiError::Config { path, source })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn into_session(self) -> Session {
        let palette = self.charset.unwrap_or_else(|| DEFAULT_PALETTE.to_string());
        Session::new(self.theme, self.width, palette)
    }
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("asciify")
        .join("config.toml")
}
