use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = CLIArgs::parse();
    let mut floor = day4::read_floor(&args.input_path).with_context(|| {
        format!(
            "Failed to read floor from given file({}).",
            args.input_path.display()
        )
    })?;

    let clearing = floor.clear();
    println!(
        "{} paper roll(s) can be removed in {} round(s), {} left.",
        clearing.removed_n(),
        clearing.rounds_n(),
        floor.roll_n()
    );

    Ok(())
}
