use anyhow::{Context, Result};
use clap::Parser;
use day2::{CLIArgs, RepeatRule};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = CLIArgs::parse();
    let ranges = day2::read_ranges(&args.input_path).with_context(|| {
        format!(
            "Failed to read ID ranges from given file({}).",
            args.input_path.display()
        )
    })?;

    let id_sum = day2::invalid_id_sum(&ranges, RepeatRule::AtLeastTwice);
    println!(
        "The sum of IDs made of a digit sequence repeated at least twice is {}.",
        id_sum
    );

    Ok(())
}
