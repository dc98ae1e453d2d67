//! Random Art CLI
//!
//! Writes an HTML page of randomly sampled shapes, or the fixed demo art.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_art::{fixed_art, ArtConfig, CanvasSize, HtmlCanvas, Shape};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Random Art - Generate SVG shapes in an HTML page
#[derive(Parser, Debug)]
#[command(name = "random-art")]
#[command(about = "Generate random SVG circles and rectangles in an HTML page", long_about = None)]
#[command(version)]
struct Args {
    /// HTML file to write
    output: PathBuf,

    /// Number of shapes to sample
    #[arg(conflicts_with = "fixed")]
    count: Option<usize>,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(conflicts_with = "fixed")]
    canvas: Option<CanvasSize>,

    /// Print the sampled table to stdout
    #[arg(long)]
    table: bool,

    /// Write the fixed demo art instead of sampling
    #[arg(long, conflicts_with = "table")]
    fixed: bool,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Window title of the page
    #[arg(long, default_value = "Random Art")]
    title: String,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let (size, shapes, indent) = if args.fixed {
        (CanvasSize::new(500, 300), fixed_art(), 2)
    } else {
        let defaults = ArtConfig::default();
        let config = ArtConfig::new(
            args.count.unwrap_or(defaults.count),
            args.canvas.unwrap_or(defaults.viewport),
        );

        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let rows = config.gen_table(&mut rng);
        log::debug!("Sampled {} shapes", rows.len());

        if args.table {
            print!("{}", ArtConfig::format_table(&rows));
        }
        let shapes: Vec<Shape> = rows.iter().map(|row| row.to_shape()).collect();
        (config.viewport, shapes, 1)
    };

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {:?}", args.output))?;
    HtmlCanvas::new(BufWriter::new(file), args.title.as_str(), size)
        .render(indent, &shapes)
        .with_context(|| format!("Failed to write art: {:?}", args.output))?;

    log::info!("Wrote {} shapes to {:?}", shapes.len(), args.output);
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
