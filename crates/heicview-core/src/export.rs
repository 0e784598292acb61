use std::fmt;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Result, ViewerError};

/// Output formats offered when saving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
    Tiff,
    Wmf,
}

impl SaveFormat {
    /// Filter order of the save dialog.
    pub const DIALOG_ORDER: [SaveFormat; 6] = [
        SaveFormat::Jpeg,
        SaveFormat::Bmp,
        SaveFormat::Gif,
        SaveFormat::Png,
        SaveFormat::Tiff,
        SaveFormat::Wmf,
    ];

    /// Extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Jpeg => "jpg",
            SaveFormat::Png => "png",
            SaveFormat::Bmp => "bmp",
            SaveFormat::Gif => "gif",
            SaveFormat::Tiff => "tiff",
            SaveFormat::Wmf => "wmf",
        }
    }

    /// Case-sensitive lookup; `"JPG"` is not `"jpg"`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jpg" => Some(SaveFormat::Jpeg),
            "png" => Some(SaveFormat::Png),
            "bmp" => Some(SaveFormat::Bmp),
            "gif" => Some(SaveFormat::Gif),
            "tiff" => Some(SaveFormat::Tiff),
            "wmf" => Some(SaveFormat::Wmf),
            _ => None,
        }
    }

    /// Format for `path`, or the rejected extension (with its dot) on failure.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
        ext.as_deref()
            .and_then(Self::from_extension)
            .ok_or_else(|| ViewerError::UnrecognizedSaveFormat {
                extension: ext.map(|e| format!(".{e}")).unwrap_or_default(),
            })
    }

    /// Encoder used for this format. WMF has no raster encoder and carries PNG data.
    fn encoder_format(&self) -> ImageFormat {
        match self {
            SaveFormat::Jpeg => ImageFormat::Jpeg,
            SaveFormat::Png | SaveFormat::Wmf => ImageFormat::Png,
            SaveFormat::Bmp => ImageFormat::Bmp,
            SaveFormat::Gif => ImageFormat::Gif,
            SaveFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveFormat::Jpeg => write!(f, "JPeg Image"),
            SaveFormat::Png => write!(f, "Png Image"),
            SaveFormat::Bmp => write!(f, "Bitmap Image"),
            SaveFormat::Gif => write!(f, "Gif Image"),
            SaveFormat::Tiff => write!(f, "Tiff Image"),
            SaveFormat::Wmf => write!(f, "Wmf Image"),
        }
    }
}

/// Encode `bitmap` to `path`, choosing the format from the extension.
///
/// Nothing is written when the extension is not recognized or encoding fails.
pub fn save(bitmap: &RgbaImage, path: &Path) -> Result<SaveFormat> {
    let format = SaveFormat::from_path(path)?;
    let bytes = encode(bitmap, format)?;
    std::fs::write(path, bytes)?;
    info!("Saved {} as {:?}", path.display(), format);
    Ok(format)
}

/// Encode into memory. JPEG has no alpha channel, so it is dropped first.
pub fn encode(bitmap: &RgbaImage, format: SaveFormat) -> Result<Vec<u8>> {
    let image = match format {
        SaveFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(bitmap.clone()).to_rgb8()),
        _ => DynamicImage::ImageRgba8(bitmap.clone()),
    };
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format.encoder_format())?;
    Ok(buf.into_inner())
}
