use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Build an RGBA gradient so resized and re-encoded images are not uniform.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ])
    })
}

/// Write a PNG fixture of the given size into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("write PNG fixture");
    path
}

/// Write bytes that no decoder accepts.
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"ftypheic\0\0\0 definitely not an image").expect("write garbage");
    path
}
