//! Race Calendar CLI Application
//!
//! Command-line front end for the race-cal-decoder library. It adds:
//! - Argument parsing (`--start=YYYY/MM/DD --end=... --events=...`)
//! - Optional TOML configuration
//! - Logging setup
//! - Writing the report file, or printing the single-file listing (`--file`)

use anyhow::{Context, Result};
use clap::Parser;
use race_cal_decoder::{listing, Calendar};
use std::path::PathBuf;

mod config;

use config::{AppConfig, ListingSettings, Overrides, RunMode, RunSettings};

/// Process Calendar - Convert tagged race calendars into a dated report
#[derive(Parser, Debug)]
#[command(name = "process-cal")]
#[command(about = "Convert tagged race calendars into a dated report", long_about = None)]
#[command(version)]
struct Args {
    /// First day of the range, exclusive (inclusive with --file) (YYYY/MM/DD)
    #[arg(long, value_name = "DATE")]
    start: Option<String>,

    /// Last day of the range, exclusive (inclusive with --file) (YYYY/MM/DD)
    #[arg(long, value_name = "DATE")]
    end: Option<String>,

    /// Single-file calendar; prints a day listing to stdout
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["events", "circuits", "broadcasters"]
    )]
    file: Option<PathBuf>,

    /// Path to the events file
    #[arg(long, value_name = "FILE")]
    events: Option<PathBuf>,

    /// Path to the circuits file
    #[arg(long, value_name = "FILE")]
    circuits: Option<PathBuf>,

    /// Path to the broadcasters file
    #[arg(long, value_name = "FILE")]
    broadcasters: Option<PathBuf>,

    /// Report file to write (default: output.yaml)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            start: self.start.clone(),
            end: self.end.clone(),
            file: self.file.clone(),
            events: self.events.clone(),
            circuits: self.circuits.clone(),
            broadcasters: self.broadcasters.clone(),
            output: self.output.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Process Calendar v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", race_cal_decoder::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    match app_config.resolve_mode(args.overrides())? {
        RunMode::Report(settings) => run(&settings),
        RunMode::Listing(settings) => run_listing(&settings),
    }
}

/// Print the single-file listing for the selected days
fn run_listing(settings: &ListingSettings) -> Result<()> {
    let events = listing::load_listing(&settings.file, &settings.grammar)
        .with_context(|| format!("Failed to load calendar: {:?}", settings.file))?;
    log::info!("Loaded {} events", events.len());

    let selected = listing::select(events, &settings.range);
    log::debug!(
        "{} events inside {} ..= {}",
        selected.len(),
        settings.range.first,
        settings.range.last
    );

    let text = listing::render_listing(&selected);
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

/// Load the three inputs and write the report
fn run(settings: &RunSettings) -> Result<()> {
    let mut calendar = Calendar::with_grammar(settings.grammar.clone());

    calendar
        .add_events(&settings.events)
        .with_context(|| format!("Failed to load events: {:?}", settings.events))?;
    calendar
        .add_circuits(&settings.circuits)
        .with_context(|| format!("Failed to load circuits: {:?}", settings.circuits))?;
    calendar
        .add_broadcasters(&settings.broadcasters)
        .with_context(|| format!("Failed to load broadcasters: {:?}", settings.broadcasters))?;

    let stats = calendar.stats();
    log::info!(
        "Loaded {} events, {} circuits, {} broadcasters",
        stats.num_events,
        stats.num_circuits,
        stats.num_broadcasters
    );

    calendar
        .write(&settings.range, &settings.output)
        .with_context(|| format!("Failed to write report: {:?}", settings.output))?;

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
