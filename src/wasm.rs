//! WebAssembly bindings for asciify

use crate::{Converter, Palette};
use image::DynamicImage;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
}

#[wasm_bindgen]
impl WasmConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { converter: Converter::new() }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.converter = std::mem::take(&mut self.converter).with_width(width);
    }

    /// Empty string restores the built-in palette.
    #[wasm_bindgen]
    pub fn set_palette(&mut self, chars: &str) {
        self.converter = std::mem::take(&mut self.converter).with_palette(Palette::or_default(chars));
    }

    /// Convert RGBA pixel data (e.g. from a canvas) to ASCII art
    #[wasm_bindgen]
    pub fn convert(&self, image_data: &[u8], width: u32, height: u32) -> Result<String, JsValue> {
        let img = image::RgbaImage::from_raw(width, height, image_data.to_vec())
            .ok_or_else(|| JsValue::from_str("Invalid image dimensions"))?;
        self.converter
            .convert(&DynamicImage::ImageRgba8(img))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}
