use anyhow::{Context, Result};
use clap::Parser;
use day7::Part1CLIArgs;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = Part1CLIArgs::parse();
    let manifold = day7::read_manifold(&args.input_path).with_context(|| {
        format!(
            "Failed to read manifold from given file({}).",
            args.input_path.display()
        )
    })?;

    let trace = manifold.trace();
    if args.show {
        print!("{}", manifold.render(&trace));
    }
    println!("The beam is split {} time(s).", trace.splits_n());

    Ok(())
}
