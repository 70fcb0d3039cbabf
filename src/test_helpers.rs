//! Shared test utilities for the coverfit unit suite.
//!
//! Provides synthetic encoded blobs in each supported container plus the
//! one-time environment bring-up the unit tests share.

use std::io::Cursor;
use std::sync::Once;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

// =========================================================================
// Environment
// =========================================================================

/// Bring the engine environment up once for the whole unit-test process.
///
/// The window opens on the first caller and stays open: unit tests never
/// call `env::shutdown`, since the window cannot reopen afterwards. The
/// full lifecycle walk lives in tests/env_lifecycle.rs, which owns its own
/// process.
pub fn ready_env() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        crate::env::init().expect("environment init");
    });
}

// =========================================================================
// Synthetic encoded blobs
// =========================================================================

/// JPEG blob of a `width` x `height` gradient image.
pub fn jpeg_blob(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_with_encoder(JpegEncoder::new_with_quality(&mut cursor, 90))
        .expect("encode jpeg fixture");
    cursor.into_inner()
}

/// PNG blob of a `width` x `height` gradient image with an alpha channel.
pub fn png_blob(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 200, 255])
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("encode png fixture");
    cursor.into_inner()
}

/// GIF blob of a `width` x `height` two-band image.
pub fn gif_blob(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut cursor, ImageFormat::Gif)
        .expect("encode gif fixture");
    cursor.into_inner()
}
