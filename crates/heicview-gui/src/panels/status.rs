use crate::app::HeicViewApp;

pub fn show(ctx: &egui::Context, app: &mut HeicViewApp) {
    let affordances = app.session.affordances();

    let response = egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(doc) = app.session.document() {
                ui.label(format!("{}x{}", doc.width(), doc.height()));
                ui.separator();
            }
            if let Some(zoom) = affordances.zoom_label {
                ui.label(format!("Zoom: {zoom}"));
                ui.separator();
            }
            ui.label(&app.status);
        });
    });

    app.viewport.status_bar_height = response.response.rect.height();
}
