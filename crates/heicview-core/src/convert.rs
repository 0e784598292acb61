use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::document::Document;
use crate::error::{Result, ViewerError};

/// Decode `path` into a [`Document`].
///
/// The file is tried regardless of its extension. Every failure, including a
/// missing file, is reported as [`ViewerError::Decode`].
pub fn convert(path: &Path) -> Result<Document> {
    let bitmap = decode(path).map_err(|reason| ViewerError::Decode {
        path: path.to_path_buf(),
        reason,
    })?;
    info!(
        "Decoded {} ({}x{})",
        path.display(),
        bitmap.width(),
        bitmap.height()
    );
    Ok(Document::new(bitmap, path))
}

fn decode(path: &Path) -> std::result::Result<RgbaImage, String> {
    #[cfg(feature = "heif")]
    {
        match heif::decode(path) {
            Ok(bitmap) => return Ok(bitmap),
            Err(e) => debug!("libheif could not read {}: {e}", path.display()),
        }
    }

    decode_raster(path)
}

/// Decode anything the `image` crate understands, sniffing the format from content.
fn decode_raster(path: &Path) -> std::result::Result<RgbaImage, String> {
    let reader = ImageReader::open(path)
        .map_err(|e| e.to_string())?
        .with_guessed_format()
        .map_err(|e| e.to_string())?;
    debug!("Sniffed format {:?} for {}", reader.format(), path.display());
    let image = reader.decode().map_err(|e| e.to_string())?;
    Ok(image.to_rgba8())
}

#[cfg(feature = "heif")]
mod heif {
    use std::path::Path;

    use image::RgbaImage;
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    /// Decode the primary image of a HEIF container into RGBA8.
    pub fn decode(path: &Path) -> Result<RgbaImage, String> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Invalid path: {:?}", path))?;
        let lib = LibHeif::new();
        let ctx = HeifContext::read_from_file(path_str).map_err(|e| e.to_string())?;
        let handle = ctx.primary_image_handle().map_err(|e| e.to_string())?;
        let image = lib
            .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgba), None)
            .map_err(|e| e.to_string())?;

        let plane = image
            .planes()
            .interleaved
            .ok_or_else(|| "No interleaved plane".to_string())?;
        let width = plane.width;
        let height = plane.height;
        let row_bytes = width as usize * 4;

        let mut pixels = Vec::with_capacity(row_bytes * height as usize);
        for row in 0..height as usize {
            let start = row * plane.stride;
            pixels.extend_from_slice(&plane.data[start..start + row_bytes]);
        }

        RgbaImage::from_raw(width, height, pixels)
            .ok_or_else(|| "Decoded plane does not match its dimensions".to_string())
    }
}
