use heicview_core::layout::ScrollOffset;
use heicview_core::zoom::{WheelUnit, ZoomDirection};

use crate::app::HeicViewApp;

pub fn show(ctx: &egui::Context, app: &mut HeicViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(30)))
        .show(ctx, |ui| {
            if app.viewport.texture.is_none() {
                show_placeholder(ui);
                return;
            }

            handle_wheel_zoom(ctx, ui, app);

            let chrome = app
                .session
                .chrome()
                .with_menu_bar(app.viewport.menu_bar_height.round() as u32)
                .with_status_bar(app.viewport.status_bar_height.round() as u32);
            app.session.set_chrome(chrome);

            let Some(placement) = app.session.relayout(outer_size(ctx)) else {
                return;
            };
            let Some(texture_id) = app.viewport.texture.as_ref().map(|t| t.id()) else {
                return;
            };

            let [panel_w, panel_h] = placement.layout.panel_size;
            let mut area = egui::ScrollArea::both()
                .max_width(panel_w as f32)
                .max_height(panel_h as f32)
                .auto_shrink([false, false])
                .drag_to_scroll(false);
            if let Some(offset) = app.viewport.restore_scroll.take() {
                area = area.scroll_offset(egui::vec2(offset.x, offset.y));
            }

            let output = area.show(ui, |ui| {
                let [content_w, content_h] = placement.content_size;
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(content_w as f32, content_h as f32),
                    egui::Sense::drag(),
                );
                let [x, y] = placement.layout.image_position;
                let [w, h] = placement.image_size;
                let img_rect = egui::Rect::from_min_size(
                    rect.min + egui::vec2(x as f32, y as f32),
                    egui::vec2(w as f32, h as f32),
                );
                draw_image(ui, texture_id, img_rect);

                response
                    .dragged_by(egui::PointerButton::Primary)
                    .then(|| response.drag_delta())
            });

            let offset = output.state.offset;
            let client = output.inner_rect.size();
            app.session.set_scroll_offset(ScrollOffset::new(offset.x, offset.y));
            app.session
                .set_scroll_client([client.x.max(0.0) as u32, client.y.max(0.0) as u32]);

            if let Some(delta) = output.inner {
                if delta != egui::Vec2::ZERO {
                    let scroll = app.session.drag([delta.x, delta.y]);
                    app.viewport.restore_scroll = Some(scroll);
                    ctx.request_repaint();
                }
            }
        });
}

/// Outer window size in points, falling back to the content area.
fn outer_size(ctx: &egui::Context) -> [u32; 2] {
    let size = ctx.input(|i| {
        i.viewport()
            .outer_rect
            .map(|r| r.size())
            .unwrap_or_else(|| i.screen_rect().size())
    });
    [size.x.max(0.0) as u32, size.y.max(0.0) as u32]
}

/// Mouse wheel zooms instead of scrolling: up zooms in, down zooms out.
/// Each whole wheel notch is one zoom step; touchpad deltas accumulate.
fn handle_wheel_zoom(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut HeicViewApp) {
    if !ui.ui_contains_pointer() {
        return;
    }

    let wheel: Vec<(f32, WheelUnit, egui::Modifiers)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                // Shift+wheel arrives as horizontal scroll on some platforms.
                egui::Event::MouseWheel {
                    unit,
                    delta,
                    modifiers,
                    ..
                } => Some((
                    if delta.y != 0.0 { delta.y } else { delta.x },
                    wheel_unit(*unit),
                    *modifiers,
                )),
                _ => None,
            })
            .collect()
    });
    let Some(&(_, _, modifiers)) = wheel.last() else {
        return;
    };

    ctx.input_mut(|i| i.smooth_scroll_delta = egui::Vec2::ZERO);
    let notches: i32 = wheel
        .into_iter()
        .map(|(delta, unit, _)| app.viewport.wheel.feed(delta, unit))
        .sum();
    if let Some(direction) = ZoomDirection::from_wheel(notches as f32) {
        app.zoom_steps(ctx, direction, modifiers, notches.unsigned_abs());
    }
}

fn wheel_unit(unit: egui::MouseWheelUnit) -> WheelUnit {
    match unit {
        egui::MouseWheelUnit::Point => WheelUnit::Point,
        egui::MouseWheelUnit::Line => WheelUnit::Line,
        egui::MouseWheelUnit::Page => WheelUnit::Page,
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
