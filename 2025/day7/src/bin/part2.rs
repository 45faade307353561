use anyhow::{Context, Result};
use clap::Parser;
use day7::Part2CLIArgs;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = Part2CLIArgs::parse();
    let manifold = day7::read_manifold(&args.input_path).with_context(|| {
        format!(
            "Failed to read manifold from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "A single particle ends up on {} timeline(s).",
        manifold.trace().timelines_n()
    );

    Ok(())
}
