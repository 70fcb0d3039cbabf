//! Bindings to the pixel engine.
//!
//! Every operation that touches pixel data funnels through this module. It
//! wraps the `image` crate's codec and raster APIs in crate vocabulary so
//! the handle and resize layers never name engine types beyond
//! [`DynamicImage`] and [`ImageFormat`].

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat};

use crate::error::{FitError, FitResult};

/// Quality used when serializing to the JPEG canvas format.
pub(crate) const JPEG_QUALITY: u8 = 90;

/// Decode an encoded image from memory.
///
/// The container format is sniffed from the magic bytes, never from a file
/// name. Returns the pixels together with the format they arrived in so the
/// handle can serialize back to the same container.
pub(crate) fn decode_blob(blob: &[u8]) -> FitResult<(DynamicImage, ImageFormat)> {
    let format = image::guess_format(blob).map_err(FitError::Decode)?;
    let image = image::load_from_memory_with_format(blob, format).map_err(FitError::Decode)?;
    Ok((image, format))
}

/// Serialize pixels into `format`.
///
/// JPEG cannot carry an alpha channel, so the image is flattened to RGB
/// first; fully transparent canvas area exports as black.
pub(crate) fn encode_blob(image: &DynamicImage, format: ImageFormat) -> FitResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
            image
                .to_rgb8()
                .write_with_encoder(encoder)
                .map_err(FitError::Encode)?;
        }
        _ => image.write_to(&mut cursor, format).map_err(FitError::Encode)?,
    }
    Ok(cursor.into_inner())
}

/// Strip embedded metadata from a decoded context.
///
/// Decoding keeps pixel data only: profile, Exif and comment chunks are
/// discarded by the decoders, and the encoders in this crate write none, so
/// there is nothing left to remove here.
pub(crate) fn strip(image: &DynamicImage) {
    log::trace!(
        "strip {}x{}: decoded context carries no ancillary chunks",
        image.width(),
        image.height()
    );
}

/// High-quality filtered resize to exact dimensions, ignoring aspect ratio.
pub(crate) fn filtered_resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Blank, fully transparent canvas of exactly the given dimensions.
pub(crate) fn blank_canvas(width: u32, height: u32) -> DynamicImage {
    DynamicImage::new_rgba8(width, height)
}

/// Source-over composite of `top` onto `canvas` with its top-left corner at
/// `(x, y)`. Offsets may be negative; anything outside the canvas bounds is
/// cropped.
pub(crate) fn composite_over(canvas: &mut DynamicImage, top: &DynamicImage, x: i64, y: i64) {
    imageops::overlay(canvas, top, x, y);
}
