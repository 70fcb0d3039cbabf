//! # coverfit
//!
//! Blob-in/blob-out image handles with an exact-frame cover resize.
//! Encoded bytes go in, a [`Pixmap`] handle holds the decoded image, and
//! encoded bytes come back out. Nothing touches the filesystem and no
//! state is shared between handles.
//!
//! # The Cover Resize
//!
//! [`Pixmap::resize`] produces an image of *exactly* the requested
//! dimensions without distorting the source:
//!
//! ```text
//! 1. Scale      by max(target_w / w, target_h / h)   (covers the frame)
//! 2. Composite  centered onto a blank frame-sized canvas
//! 3. Crop       whatever overhangs the frame edges
//! ```
//!
//! Aspect ratio is preserved and embedded metadata never survives into
//! the output. The overflow on the cropped axis is split across the two
//! edges as evenly as the integer offsets allow; an odd leftover pixel
//! comes off the right or bottom edge. The scaling rounds as
//! `floor(scale * (dim + 0.5) + 0.5)`; the exact rules live in
//! [`geometry`].
//!
//! # Example
//!
//! ```no_run
//! use coverfit::{Pixmap, env};
//!
//! fn main() -> coverfit::FitResult<()> {
//!     env::init()?;
//!
//!     let original = std::fs::read("photo.jpg").expect("read input");
//!     let mut pixmap = Pixmap::from_blob(&original)?;
//!     pixmap.resize(1280, 720)?;
//!     let thumb = pixmap.encode()?;
//!     std::fs::write("thumb.jpg", thumb).expect("write output");
//!
//!     env::shutdown()
//! }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`env`] | Once-per-process engine environment window: `init` and `shutdown` |
//! | [`error`] | [`FitError`] and the crate-wide [`FitResult`] alias |
//! | [`geometry`] | Pure cover-scale and centering math, no pixels involved |
//! | `engine` | Private codec and raster bindings; the only module that touches pixel data |
//! | `pixmap` | The [`Pixmap`] handle: decode, query, encode |
//! | `resize` | The cover-resize pipeline on top of `geometry` and `engine` |
//!
//! # Design Decisions
//!
//! ## Export Consumes the Handle
//!
//! [`Pixmap::encode`] takes `self` by value. Producing the output bytes is
//! the end of a handle's life, and encoding that in the signature turns
//! use-after-export into a compile error instead of a runtime check.
//!
//! ## The Canvas Is JPEG
//!
//! Every resize composites onto a canvas in a fixed serialization format,
//! [`CANVAS_FORMAT`]. A resized handle therefore exports JPEG bytes no
//! matter what container was decoded into it. Handles that are never
//! resized export in their input container. JPEG has no alpha channel, so
//! canvas area left uncovered exports as black.
//!
//! ## A Strict Environment Window
//!
//! The engine is brought up and torn down exactly once per process.
//! [`env::init`] and [`env::shutdown`] each fail on a second call, and
//! every handle operation fails outside the window. Misuse surfaces as
//! [`FitError::Environment`] rather than as engine corruption.

pub mod env;
pub mod error;
pub mod geometry;

mod engine;
mod pixmap;
mod resize;

pub use error::{FitError, FitResult};
pub use pixmap::Pixmap;
pub use resize::{CANVAS_FORMAT, MAX_TARGET_DIM};

// The container enum appears in the public surface (`Pixmap::format`), so
// callers get it without depending on the engine crate directly.
pub use image::ImageFormat;

#[cfg(test)]
pub(crate) mod test_helpers;
