//! Pure Rust raster backend on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::load_from_memory` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Crop | `DynamicImage::crop_imm` |
//! | Encode | PNG, always |

use super::backend::{BackendError, ImageBackend};
use crate::types::{PixelRect, Size};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;

/// The single output encoding of every resize and crop.
pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

/// File extension matching [`OUTPUT_FORMAT`].
pub const OUTPUT_EXTENSION: &str = "png";

const INPUT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    INPUT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` has an extension this backend can decode.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            supported_input_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(e))
        })
}

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    filter: FilterType,
}

impl RustBackend {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// Use a different resampling filter (e.g. `Nearest` for pixel art).
    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn load_image(bytes: &[u8]) -> Result<DynamicImage, BackendError> {
    image::load_from_memory(bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

fn encode_image(img: &DynamicImage) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), OUTPUT_FORMAT)
        .map_err(|e| BackendError::Encode(e.to_string()))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, bytes: &[u8]) -> Result<Size, BackendError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| BackendError::Decode(e.to_string()))?
            .into_dimensions()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(Size::new(width, height))
    }

    fn resize(&self, bytes: &[u8], size: Size) -> Result<Vec<u8>, BackendError> {
        if size.has_zero_dimension() {
            return Err(BackendError::Geometry(format!("cannot resize to {size}")));
        }
        let img = load_image(bytes)?;
        encode_image(&img.resize_exact(size.width, size.height, self.filter))
    }

    fn crop(&self, bytes: &[u8], rect: PixelRect) -> Result<Vec<u8>, BackendError> {
        let img = load_image(bytes)?;
        let fits = rect.x.checked_add(rect.width).is_some_and(|r| r <= img.width())
            && rect.y.checked_add(rect.height).is_some_and(|b| b <= img.height());
        if !fits || rect.size().has_zero_dimension() {
            return Err(BackendError::Geometry(format!(
                "crop {rect} does not fit a {}x{} image",
                img.width(),
                img.height()
            )));
        }
        encode_image(&img.crop_imm(rect.x, rect.y, rect.width, rect.height))
    }
}
