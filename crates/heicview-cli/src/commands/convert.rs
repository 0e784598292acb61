use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use heicview_core::convert::convert;
use heicview_core::export::save;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input image
    pub file: PathBuf,

    /// Output file; the extension picks the format (jpg, png, bmp, gif, tiff, wmf)
    pub output: PathBuf,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let doc = convert(&args.file)?;
    let format = save(&doc.bitmap, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved {} ({format})", args.output.display());
    Ok(())
}
