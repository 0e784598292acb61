mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "heicview", about = "Inspect, convert and print HEIC images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and the viewer title
    Info(commands::info::InfoArgs),
    /// Convert an image to JPEG, PNG, BMP, GIF, TIFF or WMF
    Convert(commands::convert::ConvertArgs),
    /// Render the printable page for an image
    Page(commands::page::PageArgs),
    /// Print the default viewer config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Page(args) => commands::page::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
