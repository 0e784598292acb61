use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Term;
use heicview_core::config::ViewerConfig;
use heicview_core::convert::convert;
use heicview_core::export::save;
use heicview_core::print::{compose_page, print, CommandSpooler, PrintDecision, PrintOutcome};

#[derive(Args)]
pub struct PageArgs {
    /// Input image
    pub file: PathBuf,

    /// Write the composed page here (format from extension)
    #[arg(short, long, default_value = "page.png")]
    pub output: PathBuf,

    /// Landscape orientation
    #[arg(long)]
    pub landscape: bool,

    /// Send the page to the configured print command instead of writing a file
    #[arg(long)]
    pub print: bool,

    /// Print without asking for confirmation
    #[arg(short, long, requires = "print")]
    pub yes: bool,

    /// Viewer config (TOML) with page setup and print command
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &PageArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    let doc = convert(&args.file)?;

    if args.print {
        let command = config.print_command.join(" ");
        let decision = if args.yes {
            PrintDecision::Confirm
        } else {
            confirm(&format!("Print {} to `{command}`? [y/N] ", doc.name))?
        };
        let mut spooler = CommandSpooler::new(config.print_command.clone());
        match print(
            &doc.bitmap,
            &config.page,
            args.landscape,
            decision,
            &doc.name,
            &mut spooler,
        )? {
            PrintOutcome::Submitted => println!("Sent {} to {command}", doc.name),
            PrintOutcome::Cancelled => println!("Cancelled"),
        }
        return Ok(());
    }

    let page = compose_page(&doc.bitmap, &config.page, args.landscape);
    save(&page.raster, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!(
        "Page {}x{} px written to {}",
        page.raster.width(),
        page.raster.height(),
        args.output.display()
    );
    Ok(())
}

/// Ask on the terminal; anything but an explicit yes cancels.
fn confirm(prompt: &str) -> Result<PrintDecision> {
    let term = Term::stderr();
    term.write_str(prompt)?;
    let answer = term.read_line()?;
    Ok(decision_from_answer(&answer))
}

fn decision_from_answer(answer: &str) -> PrintDecision {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => PrintDecision::Confirm,
        _ => PrintDecision::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_yes_confirms() {
        assert_eq!(decision_from_answer("y\n"), PrintDecision::Confirm);
        assert_eq!(decision_from_answer(" YES "), PrintDecision::Confirm);
        assert_eq!(decision_from_answer(""), PrintDecision::Cancel);
        assert_eq!(decision_from_answer("n"), PrintDecision::Cancel);
        assert_eq!(decision_from_answer("yep"), PrintDecision::Cancel);
    }
}
