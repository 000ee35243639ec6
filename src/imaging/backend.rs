//! Raster backend trait and shared error type.
//!
//! The [`ImageBackend`] trait is the whole contract this crate needs from a
//! raster library: measure an encoded image, resize it, and crop it. Every
//! call takes encoded bytes and returns encoded bytes in the backend's single
//! output encoding.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use crate::types::{PixelRect, Size};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Failed to encode image: {0}")]
    Encode(String),
    #[error("Invalid geometry: {0}")]
    Geometry(String),
}

/// Trait for raster backends.
///
/// Implementations must be stateless with respect to the caller: the same
/// inputs produce the same output, so one backend can serve many concurrent
/// pipeline runs.
pub trait ImageBackend: Sync {
    /// Decode just enough of `bytes` to report the pixel size.
    fn identify(&self, bytes: &[u8]) -> Result<Size, BackendError>;

    /// Scale to exactly `size`, ignoring the source aspect ratio.
    fn resize(&self, bytes: &[u8], size: Size) -> Result<Vec<u8>, BackendError>;

    /// Cut out `rect`, which must lie within the image.
    fn crop(&self, bytes: &[u8], rect: PixelRect) -> Result<Vec<u8>, BackendError>;
}
