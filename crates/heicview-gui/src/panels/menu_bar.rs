use heicview_core::zoom::ZoomDirection;

use crate::app::HeicViewApp;
use crate::dialogs;

const OPEN: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const PRINT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::P);
const QUIT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut HeicViewApp) {
    let affordances = app.session.affordances();

    let response = egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&OPEN))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                if affordances.save_visible
                    && ui.add(egui::Button::new("Save As...").shortcut_text(ctx.format_shortcut(&SAVE))).clicked()
                {
                    ui.close();
                    app.save_as();
                }

                if affordances.print_visible
                    && ui.add(egui::Button::new("Print...").shortcut_text(ctx.format_shortcut(&PRINT))).clicked()
                {
                    ui.close();
                    app.begin_print();
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            if affordances.zoom_controls_visible {
                let modifiers = ui.input(|i| i.modifiers);
                if ui.button("Zoom In").on_hover_text("Ctrl: 1%, Shift: 20%").clicked() {
                    app.zoom(ctx, ZoomDirection::In, modifiers);
                }
                if ui.button("Zoom Out").on_hover_text("Ctrl: 1%, Shift: 20%").clicked() {
                    app.zoom(ctx, ZoomDirection::Out, modifiers);
                }
            }

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            open_file(ctx, app);
        }
        if affordances.save_visible && ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            app.save_as();
        }
        if affordances.print_visible && ctx.input_mut(|i| i.consume_shortcut(&PRINT)) {
            app.begin_print();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });

    app.viewport.menu_bar_height = response.response.rect.height();
}

fn open_file(ctx: &egui::Context, app: &mut HeicViewApp) {
    if let Some(path) = dialogs::pick_image() {
        app.open_path(ctx, &path);
    }
}
