use heicview_core::print::PrintDecision;

use crate::app::HeicViewApp;
use crate::convert::load_texture;

/// Height of the page preview inside the dialog.
const PREVIEW_HEIGHT: f32 = 320.0;

pub fn show(ctx: &egui::Context, app: &mut HeicViewApp) {
    let Some(dialog) = app.print_dialog.as_mut() else {
        return;
    };

    // Orientation changes recompose from the decoded bitmap; nothing is re-read.
    if dialog.preview_is_stale() {
        dialog.preview = app
            .session
            .compose_page(&app.config.page, dialog.landscape)
            .map(|page| load_texture(ctx, "print_preview", &page.raster));
        dialog.preview_landscape = Some(dialog.landscape);
    }

    let mut decision = None;
    egui::Window::new("Print")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.checkbox(&mut dialog.landscape, "Landscape");
            ui.add_space(4.0);

            if let Some(ref preview) = dialog.preview {
                let [w, h] = preview.size();
                let scale = PREVIEW_HEIGHT / h.max(1) as f32;
                ui.image((preview.id(), egui::vec2(w as f32 * scale, PREVIEW_HEIGHT)));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Print").clicked() {
                    decision = Some(PrintDecision::Confirm);
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(PrintDecision::Cancel);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        decision = Some(PrintDecision::Cancel);
    }
    if let Some(decision) = decision {
        app.finish_print(decision);
    }
}
