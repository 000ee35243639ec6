//! Shared test utilities: synthetic encoded images and size checks.

use crate::types::Size;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Encode a gradient RGB image of the given size as PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_gradient(width, height, ImageFormat::Png)
}

/// Encode a gradient RGB image of the given size as JPEG.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_gradient(width, height, ImageFormat::Jpeg)
}

fn encode_gradient(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

/// Write a gradient image to `path`, choosing the encoding from its extension.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    let format = ImageFormat::from_path(path).unwrap();
    std::fs::write(path, encode_gradient(width, height, format)).unwrap();
}

/// Fully decode `bytes` and return the pixel size.
pub fn decoded_size(bytes: &[u8]) -> Size {
    let img = image::load_from_memory(bytes).unwrap();
    Size::new(img.width(), img.height())
}
