use std::path::PathBuf;

use heicview_core::export::SaveFormat;

/// Modal error box; blocks until dismissed.
pub fn show_error(title: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("HEIF images", &["heic", "heif", "HEIC", "HEIF"])
        .add_filter("All files", &["*"])
        .pick_file()
}

/// Save dialog listing the supported formats, defaulting to `file_name`.
pub fn pick_save_path(file_name: &str) -> Option<PathBuf> {
    SaveFormat::DIALOG_ORDER
        .iter()
        .fold(rfd::FileDialog::new(), |dialog, format| {
            dialog.add_filter(format.to_string(), &[format.extension()])
        })
        .set_title("Saving Image")
        .set_file_name(file_name)
        .save_file()
}
