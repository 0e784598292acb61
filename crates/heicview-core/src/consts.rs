/// Window title prefix; the document name is appended after `": "`.
pub const TITLE_PREFIX: &str = "HEIC Image View";

/// Zoom percentage of a freshly opened document.
pub const DEFAULT_ZOOM: u32 = 100;

/// Lowest zoom percentage reachable through zoom-out.
pub const MIN_ZOOM: u32 = 10;

/// Zoom step with no modifier held.
pub const ZOOM_STEP: u32 = 10;

/// Zoom step while Control is held.
pub const ZOOM_STEP_FINE: u32 = 1;

/// Zoom step while Shift is held.
pub const ZOOM_STEP_COARSE: u32 = 20;

/// Horizontal window decoration + scrollbar reservation, in pixels.
pub const DEFAULT_CHROME_HORIZONTAL: u32 = 16;

/// Vertical window decoration + scrollbar reservation (excluding the menu bar).
pub const DEFAULT_CHROME_VERTICAL: u32 = 42;

/// US Letter width in hundredths of an inch.
pub const LETTER_WIDTH: u32 = 850;

/// US Letter height in hundredths of an inch.
pub const LETTER_HEIGHT: u32 = 1100;

/// One-inch page margin on all four sides, in hundredths of an inch.
pub const DEFAULT_PAGE_MARGIN: u32 = 100;

/// Resolution used to rasterize a composed page.
pub const DEFAULT_PRINT_DPI: u32 = 150;

/// Largest raster side handed to the display layer unless it reports its own
/// limit. Matches the default 2D texture limit of wgpu.
pub const DEFAULT_MAX_RASTER_SIDE: u32 = 8192;

/// Pixel-precise wheel (touchpad) travel counted as one wheel notch.
pub const WHEEL_POINTS_PER_NOTCH: f32 = 50.0;

/// Largest side of a composed page raster; higher dpi settings are reduced to fit.
pub const MAX_PAGE_SIDE: u32 = 8192;
