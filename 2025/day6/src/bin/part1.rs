use anyhow::{Context, Result};
use clap::Parser;
use day6::{CLIArgs, Reading};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = CLIArgs::parse();
    let worksheet = day6::read_worksheet(&args.input_path).with_context(|| {
        format!(
            "Failed to read worksheet from given file({}).",
            args.input_path.display()
        )
    })?;

    let problems = worksheet
        .problems(Reading::Rows)
        .context("Failed to find problems in worksheet.")?;
    println!(
        "The grand total of {} problem(s) read row by row is {}.",
        problems.len(),
        day6::grand_total(&problems)
    );

    Ok(())
}
