//! Crate-wide error type and result alias.
//!
//! Every fallible operation in the crate returns [`FitResult`]. Codec
//! failures from the engine are wrapped rather than re-exported so callers
//! match on what went wrong (decode vs encode) instead of on engine
//! internals.

use thiserror::Error;

/// Errors produced by pixmap operations and the environment lifecycle.
#[derive(Error, Debug)]
pub enum FitError {
    /// The engine environment is not in the state the call requires.
    #[error("engine environment {0}")]
    Environment(&'static str),

    /// The input bytes are not a decodable image in a supported format.
    #[error("decode failed: {0}")]
    Decode(image::ImageError),

    /// Serializing the current image failed.
    #[error("encode failed: {0}")]
    Encode(image::ImageError),

    /// The operation needs a decoded image but the handle is empty.
    #[error("no image decoded into this handle")]
    NoImage,

    /// The requested target dimensions are zero or beyond
    /// [`MAX_TARGET_DIM`](crate::MAX_TARGET_DIM).
    #[error("invalid target dimensions {width}x{height}")]
    InvalidTarget {
        /// Requested frame width.
        width: u32,
        /// Requested frame height.
        height: u32,
    },
}

/// Result alias used across the crate.
pub type FitResult<T> = std::result::Result<T, FitError>;
