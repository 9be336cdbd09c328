//! Standalone validator: re-parses a hex-encoded maze file and checks
//! that it describes a connected (and ideally perfect) maze.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use mazecarve::{solvers, storage};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(file), Some(width), Some(height)) = (args.next(), args.next(), args.next())
    else {
        bail!("Usage: check <file> <width> <height>");
    };
    let width = width
        .parse::<u16>()
        .with_context(|| format!("invalid width `{width}`"))?;
    let height = height
        .parse::<u16>()
        .with_context(|| format!("invalid height `{height}`"))?;

    let maze = storage::load(&PathBuf::from(&file), width, height)?;

    let cells = maze.cell_count();
    let passages = maze.passage_count();
    let reachable = solvers::reachable_cells(&maze, (0, 0));
    println!("{file}: {cells} cells, {passages} passages, {reachable} reachable from the origin");

    if reachable != cells {
        bail!("maze is not connected: only {reachable} of {cells} cells are reachable");
    }
    if passages == cells - 1 {
        println!("ok: passage graph is a spanning tree");
    } else {
        println!(
            "connected, but {} passages beyond a spanning tree",
            passages - (cells - 1)
        );
    }
    Ok(())
}
