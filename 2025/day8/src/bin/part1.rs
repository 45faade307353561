use anyhow::{Context, Result};
use clap::Parser;
use day8::{ClusterEngine, Part1CLIArgs};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = Part1CLIArgs::parse();
    let points = day8::read_points(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction box positions from given file({}).",
            args.input_path.display()
        )
    })?;

    let edges = day8::sorted_edges(&points);
    let mut engine = ClusterEngine::new(points.len());
    let connected_n = engine
        .process(&edges, args.limit)
        .context("Failed to connect the closest junction boxes.")?;
    engine
        .verify()
        .context("Circuits are inconsistent after connecting.")?;

    let sizes = engine.largest_sizes(args.top);
    println!(
        "After {} connection(s), the {} largest circuit(s) have size(s) {:?}, their product is {}.",
        connected_n,
        sizes.len(),
        sizes,
        day8::size_product(&sizes)
    );

    Ok(())
}
