use heicview_core::layout::ScrollOffset;
use heicview_core::zoom::WheelAccumulator;

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    /// The displayed (zoom-scaled) bitmap uploaded to the GPU.
    pub texture: Option<egui::TextureHandle>,
    /// Offset to force onto the scroll area on the next frame.
    pub restore_scroll: Option<ScrollOffset>,
    /// Measured height of the menu bar panel.
    pub menu_bar_height: f32,
    /// Measured height of the status bar panel.
    pub status_bar_height: f32,
    /// Partial wheel notches carried between frames.
    pub wheel: WheelAccumulator,
}
