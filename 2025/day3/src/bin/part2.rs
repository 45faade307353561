use anyhow::{Context, Result};
use clap::Parser;
use day3::Part2CLIArgs;
use log::{warn, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = Part2CLIArgs::parse();
    let banks = day3::read_banks(&args.input_path).with_context(|| {
        format!(
            "Failed to read battery banks from given file({}).",
            args.input_path.display()
        )
    })?;

    let joltage_sum = banks
        .iter()
        .enumerate()
        .filter_map(|(ind, bank)| {
            let joltage = bank.max_joltage(args.digits);
            if joltage.is_none() {
                warn!(
                    "Bank {} has less than {} batteries, skip it.",
                    ind + 1,
                    args.digits
                );
            }
            joltage
        })
        .sum::<u64>();
    println!(
        "The total output joltage with {} batteries on per bank is {}.",
        args.digits, joltage_sum
    );

    Ok(())
}
