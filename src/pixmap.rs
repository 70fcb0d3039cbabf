//! The image handle: one owned, replaceable decoded context.

use image::{DynamicImage, ImageFormat};

use crate::engine;
use crate::env;
use crate::error::{FitError, FitResult};

/// A decoded image together with the container format it serializes to.
#[derive(Debug)]
pub(crate) struct Frame {
    pub(crate) image: DynamicImage,
    pub(crate) format: ImageFormat,
}

/// An owned image-manipulation handle.
///
/// A `Pixmap` holds at most one decoded context at a time. [`decode`]
/// fills or replaces the context, [`resize`](Pixmap::resize) transforms it
/// in place, and [`encode`] serializes it while consuming the handle, so a
/// handle is never usable after export. Dropping a `Pixmap` releases its
/// context.
///
/// Handles only exist inside the environment window opened by
/// [`env::init`] and closed by [`env::shutdown`].
///
/// [`decode`]: Pixmap::decode
/// [`encode`]: Pixmap::encode
#[derive(Debug)]
pub struct Pixmap {
    pub(crate) slot: Option<Frame>,
}

impl Pixmap {
    /// Create an empty handle with no decoded context.
    ///
    /// Fails with [`FitError::Environment`] outside the environment window.
    pub fn new() -> FitResult<Self> {
        env::ensure_ready()?;
        Ok(Self { slot: None })
    }

    /// Create a handle and decode `blob` into it in one step.
    pub fn from_blob(blob: &[u8]) -> FitResult<Self> {
        let mut pixmap = Self::new()?;
        pixmap.decode(blob)?;
        Ok(pixmap)
    }

    /// Decode an encoded image into the handle, replacing any current
    /// context. On failure the current context is left untouched.
    pub fn decode(&mut self, blob: &[u8]) -> FitResult<()> {
        env::ensure_ready()?;
        let (image, format) = engine::decode_blob(blob)?;
        log::debug!(
            "decoded {} byte blob: {}x{} {format:?}",
            blob.len(),
            image.width(),
            image.height()
        );
        self.slot = Some(Frame { image, format });
        Ok(())
    }

    /// Width of the current image in pixels, or 0 while the handle is
    /// empty.
    pub fn width(&self) -> u32 {
        self.slot.as_ref().map_or(0, |frame| frame.image.width())
    }

    /// Height of the current image in pixels, or 0 while the handle is
    /// empty.
    pub fn height(&self) -> u32 {
        self.slot.as_ref().map_or(0, |frame| frame.image.height())
    }

    /// Container format the current context serializes to, if any.
    ///
    /// Tracks the decoded input format until a resize replaces it with
    /// [`CANVAS_FORMAT`](crate::CANVAS_FORMAT).
    pub fn format(&self) -> Option<ImageFormat> {
        self.slot.as_ref().map(|frame| frame.format)
    }

    /// Serialize the current image and release the handle.
    ///
    /// Consuming `self` is the export contract: producing the bytes
    /// destroys the handle, so use-after-export cannot compile. An empty
    /// handle fails with [`FitError::NoImage`].
    pub fn encode(self) -> FitResult<Vec<u8>> {
        env::ensure_ready()?;
        let frame = self.slot.ok_or(FitError::NoImage)?;
        let blob = engine::encode_blob(&frame.image, frame.format)?;
        log::debug!(
            "encoded {}x{} {:?} into {} bytes",
            frame.image.width(),
            frame.image.height(),
            frame.format,
            blob.len()
        );
        Ok(blob)
    }
}
