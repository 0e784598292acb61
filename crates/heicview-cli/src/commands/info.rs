use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use heicview_core::convert::convert;

use crate::summary::print_document_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let doc = convert(&args.file)?;
    print_document_summary(&doc);
    Ok(())
}
