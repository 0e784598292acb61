use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::consts::{DEFAULT_MAX_RASTER_SIDE, TITLE_PREFIX};
use crate::convert::convert;
use crate::document::{render_at_zoom, scaled_size, Document};
use crate::error::{Result, ViewerError};
use crate::export::{save, SaveFormat};
use crate::layout::{layout, ChromeInsets, Layout, ScrollOffset};
use crate::print::{self, compose_page, ComposedPage, PageSetup, PrintDecision, PrintOutcome, PrintSpooler};
use crate::zoom::{ZoomController, ZoomDirection, ZoomModifiers};

/// Zoom, scroll and viewport of the open document.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub zoom: ZoomController,
    pub scroll: ScrollOffset,
    /// Last outer window size passed to [`ViewerSession::relayout`].
    pub viewport: Option<[u32; 2]>,
    pub layout: Option<Layout>,
    /// Visible area of the scrolling container, when it differs from the panel.
    pub scroll_client: Option<[u32; 2]>,
}

/// Where to draw the displayed bitmap after a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub layout: Layout,
    pub image_size: [u32; 2],
    pub content_size: [u32; 2],
    pub scroll: ScrollOffset,
}

/// What the UI should show for the current session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affordances {
    pub title: String,
    pub zoom_controls_visible: bool,
    pub save_visible: bool,
    pub print_visible: bool,
    pub zoom_label: Option<String>,
}

/// One viewer window: the open document, its displayed bitmap and view state.
pub struct ViewerSession {
    document: Option<Document>,
    /// Raster for the current zoom, at most `max_raster_side` on either side.
    displayed: Option<RgbaImage>,
    /// Logical size of the displayed bitmap: floor(base * zoom / 100).
    displayed_size: Option<[u32; 2]>,
    view: ViewState,
    chrome: ChromeInsets,
    max_raster_side: u32,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ChromeInsets::default())
    }
}

impl ViewerSession {
    pub fn new(chrome: ChromeInsets) -> Self {
        Self {
            document: None,
            displayed: None,
            displayed_size: None,
            view: ViewState::default(),
            chrome,
            max_raster_side: DEFAULT_MAX_RASTER_SIDE,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Raster to upload for display. It may be smaller than
    /// [`displayed_size`](Self::displayed_size) when that exceeds the raster cap.
    pub fn displayed(&self) -> Option<&RgbaImage> {
        self.displayed.as_ref()
    }

    /// Size the displayed bitmap occupies in the layout.
    pub fn displayed_size(&self) -> Option<[u32; 2]> {
        self.displayed_size
    }

    pub fn max_raster_side(&self) -> u32 {
        self.max_raster_side
    }

    /// Limit the side length of the displayed raster, e.g. to the GPU's
    /// texture limit. Re-renders the open document.
    pub fn set_max_raster_side(&mut self, max_side: u32) {
        self.max_raster_side = max_side.max(1);
        self.render();
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn zoom_level(&self) -> u32 {
        self.view.zoom.level()
    }

    pub fn chrome(&self) -> &ChromeInsets {
        &self.chrome
    }

    pub fn set_chrome(&mut self, chrome: ChromeInsets) {
        self.chrome = chrome;
    }

    /// Open `path`, replacing the current document.
    ///
    /// On failure the previous document and view are left untouched.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let document = match convert(path) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("{e}");
                return Err(e);
            }
        };
        info!("Opened {} as \"{}\"", path.display(), document.name);

        self.document = Some(document);
        self.view.zoom.reset();
        self.view.scroll = ScrollOffset::ZERO;
        self.view.layout = None;
        self.render();
        if let Some(outer) = self.view.viewport {
            self.relayout(outer);
        }
        Ok(())
    }

    /// Apply a zoom action, re-render the displayed bitmap and re-run layout.
    ///
    /// Returns `None` when no document is open.
    pub fn adjust_zoom(&mut self, direction: ZoomDirection, modifiers: ZoomModifiers) -> Option<u32> {
        self.adjust_zoom_steps(direction, modifiers, 1)
    }

    /// Apply `count` zoom actions in one go, rendering only the final level.
    ///
    /// Equivalent to calling [`adjust_zoom`](Self::adjust_zoom) `count` times.
    pub fn adjust_zoom_steps(
        &mut self,
        direction: ZoomDirection,
        modifiers: ZoomModifiers,
        count: u32,
    ) -> Option<u32> {
        self.document.as_ref()?;
        for _ in 0..count {
            self.view.zoom.adjust(direction, modifiers);
        }
        let level = self.view.zoom.level();
        if count > 0 {
            self.render();
            debug!(
                "Zoom {direction:?} by {} x{count} -> {level}% ({:?})",
                modifiers.step(),
                self.displayed_size
            );
            if let Some(outer) = self.view.viewport {
                self.relayout(outer);
            }
        }
        Some(level)
    }

    /// Rebuild the displayed raster for the current zoom level.
    fn render(&mut self) {
        let Some(document) = self.document.as_ref() else {
            return;
        };
        let level = self.view.zoom.level();
        self.displayed_size = Some(scaled_size(document.base_size(), level));
        self.displayed = Some(render_at_zoom(&document.bitmap, level, self.max_raster_side));
    }

    /// Lay the displayed bitmap out for an outer window size, keeping the
    /// current scroll offset (clamped to the new scroll range).
    pub fn relayout(&mut self, outer: [u32; 2]) -> Option<Placement> {
        self.view.viewport = Some(outer);
        let image_size = self.displayed_size?;

        let previous = self.view.scroll;
        let layout = layout(outer, image_size, &self.chrome);
        let content_size = layout.content_size(image_size);
        let client = self.view.scroll_client.unwrap_or(layout.panel_size);
        let scroll = previous.clamped(content_size, client);

        self.view.layout = Some(layout);
        self.view.scroll = scroll;
        Some(Placement {
            layout,
            image_size,
            content_size,
            scroll,
        })
    }

    /// Record the scroll offset reported by the scrolling container.
    pub fn set_scroll_offset(&mut self, offset: ScrollOffset) {
        self.view.scroll = offset;
    }

    /// Record the visible size of the scrolling container. Scroll offsets are
    /// clamped against it instead of the computed panel size.
    pub fn set_scroll_client(&mut self, client: [u32; 2]) {
        self.view.scroll_client = Some(client);
    }

    /// Pan by a pointer drag of `delta` pixels, clamped to the scroll range of
    /// the last layout. Does nothing before the first layout.
    pub fn drag(&mut self, delta: [f32; 2]) -> ScrollOffset {
        let (Some(layout), Some(image_size)) = (self.view.layout, self.displayed_size) else {
            return self.view.scroll;
        };
        let content_size = layout.content_size(image_size);
        let client = self.view.scroll_client.unwrap_or(layout.panel_size);
        self.view.scroll = self.view.scroll.dragged(delta).clamped(content_size, client);
        self.view.scroll
    }

    /// Save the full-resolution document bitmap; the zoom level is ignored.
    pub fn save_as(&self, path: &Path) -> Result<SaveFormat> {
        let document = self.document.as_ref().ok_or(ViewerError::NoDocument)?;
        save(&document.bitmap, path)
    }

    /// Default file name offered by the save dialog.
    pub fn suggested_file_name(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.name.as_str())
    }

    pub fn compose_page(&self, setup: &PageSetup, landscape: bool) -> Option<ComposedPage> {
        self.document
            .as_ref()
            .map(|d| compose_page(&d.bitmap, setup, landscape))
    }

    pub fn print(
        &self,
        setup: &PageSetup,
        landscape: bool,
        decision: PrintDecision,
        spooler: &mut dyn PrintSpooler,
    ) -> Result<PrintOutcome> {
        let document = self.document.as_ref().ok_or(ViewerError::NoDocument)?;
        print::print(&document.bitmap, setup, landscape, decision, &document.name, spooler)
    }

    pub fn affordances(&self) -> Affordances {
        let loaded = self.document.is_some();
        Affordances {
            title: window_title(self.document.as_ref().map(|d| d.name.as_str())),
            zoom_controls_visible: loaded,
            save_visible: loaded,
            print_visible: loaded,
            zoom_label: loaded.then(|| self.view.zoom.to_string()),
        }
    }
}

pub fn window_title(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{TITLE_PREFIX}: {name}"),
        None => TITLE_PREFIX.to_string(),
    }
}
