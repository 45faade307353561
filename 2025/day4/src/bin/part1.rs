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
    let floor = day4::read_floor(&args.input_path).with_context(|| {
        format!(
            "Failed to read floor from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "{} of {} paper roll(s) can be accessed by forklift.",
        floor.accessible_n(),
        floor.roll_n()
    );

    Ok(())
}
