//! # imagefit
//!
//! Crop and resize images to an exact target size, reconciling aspect ratios
//! within user-set tolerances instead of distorting or letterboxing.
//!
//! # Architecture: Settings → Pipeline → Backend
//!
//! ```text
//! imagefit.toml + flags  →  ProcessSettings  →  Pipeline [crop?, resize?]  →  PNG bytes
//! ```
//!
//! A [`ProcessSettings`](config::ProcessSettings) bundle decides which
//! operations run. The [`pipeline`] builds an immutable operation list from
//! it and folds an encoded image through that list. All pixel work goes
//! through the [`ImageBackend`](imaging::ImageBackend) trait, so the fit
//! logic can be unit tested against a recording mock without decoding a
//! single image.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared value types: `Size`, `CropSpec`, `FitSpec`, `PixelRect` |
//! | [`config`] | `imagefit.toml` loading, layering, and validation |
//! | [`imaging`] | Geometry calculations, the backend trait, and crop/resize/fit operations |
//! | [`pipeline`] | Builds and runs the crop → resize pipeline for one image |
//! | [`batch`] | Parallel processing of a whole directory tree with a JSON report |
//! | [`output`] | CLI output formatting |
//!
//! # The Fit Algorithm
//!
//! When the source and target aspect ratios differ, a resize runs up to
//! three stages, stopping as soon as the image is exactly the target size:
//!
//! ```text
//! 1. Accommodate  scale uniformly until one dimension matches and the other covers
//! 2. Stretch      squeeze the overhanging dimension, at most `fit.stretch` percent
//! 3. Crop         trim the remaining overhang, at most `fit.crop` percent per edge
//! ```
//!
//! If the overhang still cannot be trimmed within the crop tolerance the
//! resize fails with [`FitError::ResizeUnreachable`](imaging::FitError)
//! rather than producing an image of the wrong size.
//!
//! # Pure-Rust Imaging
//!
//! [`RustBackend`](imaging::RustBackend) decodes with the `image` crate,
//! resamples with Lanczos3, and always encodes PNG. No system libraries are
//! needed.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod output;
pub mod pipeline;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
