use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbaImage;

/// The currently open image.
#[derive(Clone, Debug)]
pub struct Document {
    /// Decoded pixels at full resolution.
    pub bitmap: RgbaImage,
    /// File stem of the source, used for the window title and save dialog.
    pub name: String,
    pub source: PathBuf,
}

impl Document {
    pub fn new(bitmap: RgbaImage, source: &Path) -> Self {
        Self {
            bitmap,
            name: display_name(source),
            source: source.to_path_buf(),
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn base_size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }
}

/// Base name of `path` without its extension.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Pixel dimensions of `base` at `zoom` percent, truncated per axis.
///
/// A zero result is raised to 1 so the raster stays displayable.
pub fn scaled_size(base: [u32; 2], zoom: u32) -> [u32; 2] {
    let scale = |v: u32| ((u64::from(v) * u64::from(zoom)) / 100).clamp(1, u64::from(u32::MAX)) as u32;
    [scale(base[0]), scale(base[1])]
}

/// Shrink `size` uniformly so neither side exceeds `max_side`.
pub fn capped_size(size: [u32; 2], max_side: u32) -> [u32; 2] {
    let longest = size[0].max(size[1]);
    if longest <= max_side {
        return size;
    }
    let scale = |v: u32| ((u64::from(v) * u64::from(max_side)) / u64::from(longest)).max(1) as u32;
    [scale(size[0]), scale(size[1])]
}

/// Render the raster shown for `zoom` percent.
///
/// The logical size is [`scaled_size`]; the returned raster is that size
/// shrunk to fit `max_side`, and is painted stretched to the logical size.
pub fn render_at_zoom(bitmap: &RgbaImage, zoom: u32, max_side: u32) -> RgbaImage {
    let [w, h] = capped_size(scaled_size([bitmap.width(), bitmap.height()], zoom), max_side);
    if [w, h] == [bitmap.width(), bitmap.height()] {
        return bitmap.clone();
    }
    image::imageops::resize(bitmap, w, h, FilterType::Triangle)
}
