mod app;
mod convert;
mod dialogs;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use heicview_core::config::ViewerConfig;
use heicview_core::consts::TITLE_PREFIX;

#[derive(Parser)]
#[command(name = "heicview-gui", about = "HEIC image viewer")]
#[command(version)]
struct Cli {
    /// Image to open at startup
    path: Option<PathBuf>,

    /// Viewer config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 240.0])
            .with_title(TITLE_PREFIX),
        ..Default::default()
    };

    let startup_path = cli.path;
    eframe::run_native(
        "HeicView",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::HeicViewApp::new(
                &cc.egui_ctx,
                config,
                startup_path,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
