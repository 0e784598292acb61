use std::path::{Path, PathBuf};

use heicview_core::config::ViewerConfig;
use heicview_core::error::ViewerError;
use heicview_core::print::{CommandSpooler, PrintDecision, PrintOutcome};
use heicview_core::session::ViewerSession;
use heicview_core::zoom::{ZoomDirection, ZoomModifiers};
use tracing::{debug, error, warn};

use crate::convert::load_texture;
use crate::dialogs;
use crate::panels;
use crate::states::{PrintDialogState, ViewportState};

pub struct HeicViewApp {
    pub session: ViewerSession,
    pub config: ViewerConfig,
    pub viewport: ViewportState,
    pub print_dialog: Option<PrintDialogState>,
    pub status: String,
    pub show_about: bool,
    title: String,
}

impl HeicViewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig, startup_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            session: ViewerSession::new(config.chrome),
            config,
            viewport: ViewportState::default(),
            print_dialog: None,
            status: String::new(),
            show_about: false,
            title: String::new(),
        };
        app.session
            .set_max_raster_side(ctx.input(|i| i.max_texture_side) as u32);
        if let Some(path) = startup_path {
            app.open_path(ctx, &path);
        }
        app
    }

    pub fn open_path(&mut self, ctx: &egui::Context, path: &Path) {
        match self.session.open(path) {
            Ok(()) => {
                self.refresh_texture(ctx);
                self.viewport.restore_scroll = Some(self.session.view().scroll);
                self.viewport.wheel.reset();
                self.print_dialog = None;
                if let Some(doc) = self.session.document() {
                    self.status = format!("Opened {} ({}x{})", path.display(), doc.width(), doc.height());
                }
            }
            Err(e) => {
                self.status = e.to_string();
                dialogs::show_error(
                    "Invalid Image",
                    &format!("{} is not a valid image", path.display()),
                );
            }
        }
    }

    /// Menu zoom: one step.
    pub fn zoom(&mut self, ctx: &egui::Context, direction: ZoomDirection, modifiers: egui::Modifiers) {
        self.zoom_steps(ctx, direction, modifiers, 1);
    }

    /// Wheel zoom lands here with the number of notches turned this frame.
    pub fn zoom_steps(
        &mut self,
        ctx: &egui::Context,
        direction: ZoomDirection,
        modifiers: egui::Modifiers,
        count: u32,
    ) {
        let modifiers = ZoomModifiers {
            control: modifiers.ctrl,
            shift: modifiers.shift,
        };
        if count > 0 && self.session.adjust_zoom_steps(direction, modifiers, count).is_some() {
            self.refresh_texture(ctx);
            self.viewport.restore_scroll = Some(self.session.view().scroll);
        }
    }

    pub fn save_as(&mut self) {
        let Some(name) = self.session.suggested_file_name().map(str::to_owned) else {
            return;
        };
        let Some(path) = dialogs::pick_save_path(&name) else {
            return;
        };
        match self.session.save_as(&path) {
            Ok(format) => self.status = format!("Saved {} ({format})", path.display()),
            Err(e @ ViewerError::UnrecognizedSaveFormat { .. }) => {
                warn!("{e}");
                self.status = e.to_string();
                dialogs::show_error("Failed to Save File", &e.to_string());
            }
            Err(e) => {
                error!("Saving {} failed: {e}", path.display());
                self.status = e.to_string();
                dialogs::show_error("Failed to Save File", &e.to_string());
            }
        }
    }

    pub fn begin_print(&mut self) {
        if self.session.document().is_some() {
            self.print_dialog = Some(PrintDialogState::default());
        }
    }

    /// Close the print dialog, submitting the page only when confirmed.
    pub fn finish_print(&mut self, decision: PrintDecision) {
        let Some(dialog) = self.print_dialog.take() else {
            return;
        };
        let mut spooler = CommandSpooler::new(self.config.print_command.clone());
        match self
            .session
            .print(&self.config.page, dialog.landscape, decision, &mut spooler)
        {
            Ok(PrintOutcome::Submitted) => self.status = "Sent to printer".into(),
            Ok(PrintOutcome::Cancelled) => {}
            Err(e) => {
                error!("{e}");
                self.status = e.to_string();
            }
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        self.viewport.texture = self
            .session
            .displayed()
            .map(|bitmap| load_texture(ctx, "viewport", bitmap));
    }

    /// Keep the displayed raster within the backend's texture limit.
    fn sync_texture_limit(&mut self, ctx: &egui::Context) {
        let max_side = ctx.input(|i| i.max_texture_side) as u32;
        if max_side != self.session.max_raster_side() {
            debug!("Texture limit {max_side}px");
            self.session.set_max_raster_side(max_side);
            self.refresh_texture(ctx);
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.session.affordances().title;
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for HeicViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_texture_limit(ctx);
        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::print_dialog::show(ctx, self);
        self.sync_title(ctx);

        if self.show_about {
            egui::Window::new("About HEIC Image View")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("HEIC Image View");
                        ui.label("Open, zoom, save and print HEIC photos");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
