use anyhow::{Context, Result};
use clap::Parser;
use day5::CLIArgs;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = CLIArgs::parse();
    let inventory = day5::read_inventory(&args.input_path).with_context(|| {
        format!(
            "Failed to read inventory from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The fresh ID ranges cover {} ingredient ID(s).",
        inventory.fresh_id_n()
    );

    Ok(())
}
