/// State of the open print dialog.
#[derive(Default)]
pub struct PrintDialogState {
    pub landscape: bool,
    pub preview: Option<egui::TextureHandle>,
    /// Orientation the preview was composed for.
    pub preview_landscape: Option<bool>,
}

impl PrintDialogState {
    pub fn preview_is_stale(&self) -> bool {
        self.preview.is_none() || self.preview_landscape != Some(self.landscape)
    }
}
