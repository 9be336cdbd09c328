use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use mazecarve::{Generator, codec, generate, render, solvers, storage};

const USAGE: &str = "Usage: mazecarve <width> <height> [options]

Options:
  --algorithm <backtrack|kruskal|prim>  generation algorithm (default: backtrack)
  --seed <N>                            seed the generator for a reproducible maze
  --solve                               overlay the shortest path from (0,0) to the far corner
  --hex                                 print the hex encoding instead of ASCII art
  --out <FILE>                          also write the hex encoding to FILE
";

struct Args {
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<u64>,
    solve: bool,
    hex: bool,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut raw = std::env::args().skip(1);
    let mut positionals: Vec<String> = Vec::new();
    let mut generator = Generator::Backtrack;
    let mut seed = None;
    let mut solve = false;
    let mut hex = false;
    let mut out = None;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--algorithm" => {
                let name = raw.next().context("--algorithm needs a value")?;
                generator = name.parse::<Generator>()?;
            }
            "--seed" => {
                let value = raw.next().context("--seed needs a value")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("invalid seed `{value}`"))?,
                );
            }
            "--solve" => solve = true,
            "--hex" => hex = true,
            "--out" => {
                out = Some(PathBuf::from(raw.next().context("--out needs a value")?));
            }
            "--help" | "-h" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unrecognized option `{other}`\n{USAGE}"),
            _ => positionals.push(arg),
        }
    }

    let [width, height] = positionals.as_slice() else {
        bail!("expected <width> and <height>\n{USAGE}");
    };
    let width = width
        .parse::<u16>()
        .with_context(|| format!("invalid width `{width}`"))?;
    let height = height
        .parse::<u16>()
        .with_context(|| format!("invalid height `{height}`"))?;

    Ok(Args {
        width,
        height,
        generator,
        seed,
        solve,
        hex,
        out,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    // Dimension validation happens here, before any grid exists
    let maze = generate(args.width, args.height, args.generator, args.seed)?;

    let path = if args.solve {
        solvers::solve_maze(&maze, (0, 0), (args.width - 1, args.height - 1))?
    } else {
        Vec::new()
    };

    if args.hex {
        println!("{}", codec::encode(&maze));
    } else {
        // Only color the overlay when stdout is a real terminal
        let styled = std::io::stdout().is_terminal();
        print!("{}", render::render(&maze, &path, styled));
    }

    if let Some(out) = &args.out {
        storage::save(out, &maze)?;
    }

    Ok(())
}
