//! Page composition and print submission.
//!
//! Page geometry is kept in hundredths of an inch and rasterized at
//! [`PageSetup::dpi`] only when a page is composed.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::consts::{DEFAULT_PAGE_MARGIN, DEFAULT_PRINT_DPI, LETTER_HEIGHT, LETTER_WIDTH, MAX_PAGE_SIDE};
use crate::error::{Result, ViewerError};
use crate::export::{encode, SaveFormat};

/// Paper and margin geometry, in hundredths of an inch (portrait).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub paper_width: u32,
    pub paper_height: u32,
    /// Inset applied to all four sides.
    pub margin: u32,
    pub dpi: u32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_width: LETTER_WIDTH,
            paper_height: LETTER_HEIGHT,
            margin: DEFAULT_PAGE_MARGIN,
            dpi: DEFAULT_PRINT_DPI,
        }
    }
}

/// Axis-aligned rectangle in hundredths of an inch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PageSetup {
    /// Paper size for the given orientation.
    pub fn paper_size(&self, landscape: bool) -> [u32; 2] {
        if landscape {
            [self.paper_height, self.paper_width]
        } else {
            [self.paper_width, self.paper_height]
        }
    }

    /// Printable area after the margin inset.
    pub fn margin_bounds(&self, landscape: bool) -> PageRect {
        let [w, h] = self.paper_size(landscape);
        PageRect {
            x: self.margin,
            y: self.margin,
            width: w.saturating_sub(self.margin.saturating_mul(2)),
            height: h.saturating_sub(self.margin.saturating_mul(2)),
        }
    }

    /// Resolution a page is rasterized at: [`dpi`](Self::dpi), lowered so
    /// neither side of the page exceeds [`MAX_PAGE_SIDE`] pixels.
    pub fn raster_dpi(&self, landscape: bool) -> u32 {
        let [w, h] = self.paper_size(landscape);
        let longest = u64::from(w.max(h).max(1));
        let limit = u64::from(MAX_PAGE_SIDE) * 100 / longest;
        u64::from(self.dpi).min(limit) as u32
    }
}

fn to_pixels(hundredths: u32, dpi: u32) -> u32 {
    u32::try_from(u64::from(hundredths) * u64::from(dpi) / 100).unwrap_or(u32::MAX)
}

/// A rasterized page ready for the spooler.
#[derive(Clone, Debug)]
pub struct ComposedPage {
    pub raster: RgbaImage,
    pub landscape: bool,
    /// Where the image landed on the raster, in pixels.
    pub image_rect: PageRect,
}

/// Scale `image` to exactly fill the margin bounds and draw it on a white page.
///
/// The aspect ratio of `image` is not preserved.
pub fn compose_page(image: &RgbaImage, setup: &PageSetup, landscape: bool) -> ComposedPage {
    let [paper_w, paper_h] = setup.paper_size(landscape);
    let bounds = setup.margin_bounds(landscape);
    let dpi = setup.raster_dpi(landscape);
    if dpi != setup.dpi {
        debug!("Page rasterized at {dpi} dpi instead of {}", setup.dpi);
    }

    let mut raster = RgbaImage::from_pixel(
        to_pixels(paper_w, dpi).max(1),
        to_pixels(paper_h, dpi).max(1),
        Rgba([255, 255, 255, 255]),
    );

    let image_rect = PageRect {
        x: to_pixels(bounds.x, dpi),
        y: to_pixels(bounds.y, dpi),
        width: to_pixels(bounds.width, dpi),
        height: to_pixels(bounds.height, dpi),
    };

    if image_rect.width > 0 && image_rect.height > 0 {
        let scaled = imageops::resize(image, image_rect.width, image_rect.height, FilterType::Triangle);
        imageops::overlay(
            &mut raster,
            &scaled,
            i64::from(image_rect.x),
            i64::from(image_rect.y),
        );
    }

    ComposedPage {
        raster,
        landscape,
        image_rect,
    }
}

/// Outcome of the print dialog step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintDecision {
    Confirm,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintOutcome {
    Submitted,
    Cancelled,
}

/// Device output for composed pages.
pub trait PrintSpooler {
    fn submit(&mut self, page: &ComposedPage, job_name: &str) -> Result<()>;
}

/// Compose and, if confirmed, submit one page.
pub fn print(
    image: &RgbaImage,
    setup: &PageSetup,
    landscape: bool,
    decision: PrintDecision,
    job_name: &str,
    spooler: &mut dyn PrintSpooler,
) -> Result<PrintOutcome> {
    if decision == PrintDecision::Cancel {
        info!("Print of {job_name} cancelled");
        return Ok(PrintOutcome::Cancelled);
    }
    let page = compose_page(image, setup, landscape);
    spooler.submit(&page, job_name)?;
    info!("Submitted {job_name} to the printer");
    Ok(PrintOutcome::Submitted)
}

/// Hands pages to an external print command (e.g. `lp`) as PNG files.
///
/// Each page goes to its own temporary file in `spool_dir`, removed once the
/// command returns.
pub struct CommandSpooler {
    /// Program followed by its leading arguments; the page file is appended.
    pub command: Vec<String>,
    pub spool_dir: PathBuf,
}

impl CommandSpooler {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            spool_dir: std::env::temp_dir(),
        }
    }
}

impl PrintSpooler for CommandSpooler {
    fn submit(&mut self, page: &ComposedPage, job_name: &str) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| ViewerError::Print("No print command configured".into()))?;

        let mut file = tempfile::Builder::new()
            .prefix(&format!("{job_name}-"))
            .suffix(".png")
            .tempfile_in(&self.spool_dir)?;
        file.write_all(&encode(&page.raster, SaveFormat::Png)?)?;
        file.flush()?;
        debug!("Spooling {} to {program}", file.path().display());

        let status = Command::new(program)
            .args(args)
            .arg(file.path())
            .status()
            .map_err(|e| ViewerError::Print(format!("Failed to run {program}: {e}")))?;

        if !status.success() {
            warn!("{program} exited with {status}");
            return Err(ViewerError::Print(format!("{program} exited with {status}")));
        }
        Ok(())
    }
}
