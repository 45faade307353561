use anyhow::{Context, Result};
use clap::Parser;
use day1::{CLIArgs, Dial};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = CLIArgs::parse();
    let rotations = day1::read_rotations(&args.input_path).with_context(|| {
        format!(
            "Failed to read rotations from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut dial = Dial::new(args.start, args.size).context("Failed to set up dial.")?;
    let zero_pass_n = rotations
        .iter()
        .map(|rotation| dial.rotate(rotation))
        .sum::<usize>();
    println!(
        "The dial points at 0 for {} time(s) in all, the password is {}.",
        zero_pass_n, zero_pass_n
    );

    Ok(())
}
