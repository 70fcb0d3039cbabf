//! The cover resize: scale to cover, center, crop to the exact frame.

use image::ImageFormat;

use crate::engine;
use crate::env;
use crate::error::{FitError, FitResult};
use crate::geometry;
use crate::pixmap::{Frame, Pixmap};

/// Format of the canvas every resize composites onto. A resized handle
/// serializes in this format regardless of what was decoded into it.
pub const CANVAS_FORMAT: ImageFormat = ImageFormat::Jpeg;

/// Per-axis cap on requested frame dimensions.
///
/// [`CANVAS_FORMAT`] stores dimensions in 16 bits, so any larger frame
/// would survive the composite only to fail the consuming encode. Such
/// targets are rejected up front instead.
pub const MAX_TARGET_DIM: u32 = 65_535;

impl Pixmap {
    /// Resize the current image to exactly `width` x `height`.
    ///
    /// The image is scaled by the larger axis ratio so it covers the frame,
    /// then composited centered onto a blank canvas of the exact frame
    /// size; whatever overhangs is cropped. Aspect ratio is preserved and
    /// the output dimensions are always exactly the requested ones;
    /// embedded metadata does not survive.
    ///
    /// The canvas is [`CANVAS_FORMAT`], so a later
    /// [`encode`](Pixmap::encode) produces JPEG bytes whatever the input
    /// container was. Requesting the current dimensions is not a no-op: the
    /// image still passes through the scale and composite steps.
    ///
    /// Fails with [`FitError::NoImage`] on an empty handle and
    /// [`FitError::InvalidTarget`] when either dimension is zero or above
    /// [`MAX_TARGET_DIM`]; the context is untouched on failure.
    pub fn resize(&mut self, width: u32, height: u32) -> FitResult<()> {
        env::ensure_ready()?;
        if width == 0 || height == 0 || width > MAX_TARGET_DIM || height > MAX_TARGET_DIM {
            return Err(FitError::InvalidTarget { width, height });
        }
        let frame = self.slot.as_mut().ok_or(FitError::NoImage)?;

        let source = (frame.image.width(), frame.image.height());
        let scaled = geometry::scaled_dimensions(source, (width, height));
        let (x, y) = geometry::center_offsets((width, height), scaled);
        log::debug!(
            "resize {}x{} to {width}x{height}: scaled {}x{}, composite at ({x}, {y})",
            source.0,
            source.1,
            scaled.0,
            scaled.1
        );

        engine::strip(&frame.image);
        let resized = engine::filtered_resize(&frame.image, scaled.0, scaled.1);
        let mut canvas = engine::blank_canvas(width, height);
        engine::composite_over(&mut canvas, &resized, x, y);

        // The canvas becomes the handle's context; the previous context is
        // dropped with the assignment.
        *frame = Frame {
            image: canvas,
            format: CANVAS_FORMAT,
        };
        Ok(())
    }
}
