//! End-to-end tests against real image files on disk.

use asciify::preview::write_preview;
use asciify::{
    decode_and_normalize, quantize_to_text, resize, AsciiError, Converter, Palette, Session,
    Theme, DEFAULT_PALETTE,
};
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_gray_png(dir: &TempDir, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.path().join(name);
    GrayImage::from_pixel(width, height, Luma([value])).save(&path).unwrap();
    path
}

#[test]
fn decode_gray_png() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(&dir, "gray.png", 10, 10, 128);
    let gray = decode_and_normalize(&path).unwrap();
    assert_eq!(gray.dimensions(), (10, 10));
    assert!(gray.pixels().all(|p| p.0[0] == 128));
}

#[test]
fn decode_color_png_to_single_channel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("color.png");
    RgbImage::from_pixel(6, 3, Rgb([255, 255, 255])).save(&path).unwrap();
    let gray = decode_and_normalize(&path).unwrap();
    assert_eq!(gray.dimensions(), (6, 3));
    assert!(gray.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn decode_rejects_text_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not_an_image.txt");
    std::fs::write(&path, "this is not an image").unwrap();
    assert!(matches!(decode_and_normalize(&path), Err(AsciiError::Decode { .. })));
}

#[test]
fn decode_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.png");
    assert!(matches!(decode_and_normalize(&path), Err(AsciiError::Decode { .. })));
}

#[test]
fn full_pipeline_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(&dir, "square.png", 100, 100, 0);
    let gray = decode_and_normalize(&path).unwrap();
    let resized = resize(&gray, 50).unwrap();
    assert_eq!(resized.dimensions(), (50, 27));
    let art = quantize_to_text(&resized, &Palette::default());
    let lines: Vec<&str> = art.split('\n').collect();
    assert_eq!(lines.len(), 27);
    assert!(lines.iter().all(|l| l.chars().count() == 50 && l.chars().all(|c| c == '@')));
}

#[test]
fn converter_from_path() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(&dir, "wide.png", 1000, 10, 0);
    let art = Converter::new().with_width(1).convert_path(&path).unwrap();
    assert_eq!(art, "@");
}

#[test]
fn session_process_and_save() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(&dir, "with space.png", 20, 20, 0);
    let mut session = Session::new(Theme::Dark, 10, "");
    let raw = format!("{{{}}}", path.display());
    let art = session.process(&raw).unwrap().to_owned();
    assert_eq!(art.lines().count(), 5);
    assert!(art.chars().all(|c| c == DEFAULT_PALETTE.chars().next().unwrap() || c == '\n'));

    let out = dir.path().join("art.txt");
    session.save(&out).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), art);
}

#[test]
fn session_keeps_previous_result_on_error() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(&dir, "ok.png", 4, 4, 0);
    let mut session = Session::new(Theme::Light, 4, "X");
    session.process(path.to_str().unwrap()).unwrap();
    assert!(session.process("/nonexistent/image.png").is_err());
    assert_eq!(session.current(), Some("XXXX\nXXXX"));
}

#[test]
fn save_to_bad_path_is_write_error() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(&dir, "ok.png", 4, 4, 0);
    let mut session = Session::default();
    session.process(path.to_str().unwrap()).unwrap();
    let bad = dir.path().join("no_such_dir").join("art.txt");
    assert!(matches!(session.save(&bad), Err(AsciiError::Write { .. })));
}

#[test]
fn preview_fits_panel() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("tall.png");
    RgbImage::from_pixel(400, 800, Rgb([10, 20, 30])).save(&src).unwrap();
    let dest = dir.path().join("thumb.png");
    write_preview(&src, &dest, 0).unwrap();
    let thumb = image::open(&dest).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (90, 180));
}

#[test]
fn session_matches_converter_on_extensionless_file() {
    let dir = TempDir::new().unwrap();
    let png = write_gray_png(&dir, "gray.png", 30, 12, 128);
    let upload = dir.path().join("dropped_upload");
    std::fs::copy(&png, &upload).unwrap();

    let mut session = Session::new(Theme::Dark, 12, "");
    let art = session.process(upload.to_str().unwrap()).unwrap().to_owned();
    let expected = Converter::new().with_width(12).convert_path(&upload).unwrap();
    assert_eq!(art, expected);
    assert_eq!(art.lines().count(), 2);
}
