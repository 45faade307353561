use anyhow::{Context, Result};
use clap::Parser;
use day8::{ClusterEngine, Part2CLIArgs};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialize logger.")?;
    let args = Part2CLIArgs::parse();
    let points = day8::read_points(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction box positions from given file({}).",
            args.input_path.display()
        )
    })?;

    let edges = day8::sorted_edges(&points);
    let mut engine = ClusterEngine::new(points.len());
    let last_edge = engine
        .connect_until_single(&edges)
        .context("Failed to connect junction boxes into one circuit.")?;
    engine
        .verify()
        .context("Circuits are inconsistent after connecting.")?;

    if let Some(edge) = last_edge {
        let (from, to) = edge.ends();
        println!(
            "The last connection joins {} and {}, the product of their X coordinates is {}.",
            points[from],
            points[to],
            points[from].x() * points[to].x()
        );
    } else {
        eprintln!("Given junction boxes are never joined into one circuit by a connection.");
    }

    Ok(())
}
