use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CHROME_HORIZONTAL, DEFAULT_CHROME_VERTICAL};

/// Space the host window reserves around the scrollable panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeInsets {
    /// Subtracted from the outer width.
    pub horizontal: u32,
    /// Subtracted from the outer height in addition to the menu bar.
    pub vertical: u32,
    /// Menu bar height; the GUI overwrites this with the measured value.
    pub menu_bar: u32,
    /// Status bar height below the panel; measured like `menu_bar`.
    pub status_bar: u32,
}

impl Default for ChromeInsets {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_CHROME_HORIZONTAL,
            vertical: DEFAULT_CHROME_VERTICAL,
            menu_bar: 0,
            status_bar: 0,
        }
    }
}

impl ChromeInsets {
    pub fn with_menu_bar(self, menu_bar: u32) -> Self {
        Self { menu_bar, ..self }
    }

    pub fn with_status_bar(self, status_bar: u32) -> Self {
        Self { status_bar, ..self }
    }

    /// Panel size left after removing the chrome from `outer`.
    pub fn panel_size(&self, outer: [u32; 2]) -> [u32; 2] {
        [
            outer[0].saturating_sub(self.horizontal),
            outer[1]
                .saturating_sub(self.menu_bar)
                .saturating_sub(self.status_bar)
                .saturating_sub(self.vertical),
        ]
    }
}

/// Result of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub panel_size: [u32; 2],
    /// Top-left of the image inside the panel's scrollable content.
    pub image_position: [u32; 2],
}

impl Layout {
    /// Size of the scrollable content: the panel, grown to hold the placed image.
    pub fn content_size(&self, image: [u32; 2]) -> [u32; 2] {
        [
            (self.image_position[0] + image[0]).max(self.panel_size[0]),
            (self.image_position[1] + image[1]).max(self.panel_size[1]),
        ]
    }
}

/// Compute panel size and image placement for an outer window size.
pub fn layout(outer: [u32; 2], image: [u32; 2], chrome: &ChromeInsets) -> Layout {
    let panel_size = chrome.panel_size(outer);
    Layout {
        panel_size,
        image_position: center_in(panel_size, image),
    }
}

/// Center `image` in `client`, anchoring to the top/left on any axis where it
/// does not fit.
pub fn center_in(client: [u32; 2], image: [u32; 2]) -> [u32; 2] {
    [
        client[0].saturating_sub(image[0]) / 2,
        client[1].saturating_sub(image[1]) / 2,
    ]
}

/// Scroll position of the panel, in content pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp to the valid scroll range of `content` shown through `client`.
    pub fn clamped(self, content: [u32; 2], client: [u32; 2]) -> Self {
        let max_x = content[0].saturating_sub(client[0]) as f32;
        let max_y = content[1].saturating_sub(client[1]) as f32;
        Self {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }

    /// Offset after the pointer moved by `delta` while grabbing the image.
    pub fn dragged(self, delta: [f32; 2]) -> Self {
        Self {
            x: self.x - delta[0],
            y: self.y - delta[1],
        }
    }
}
