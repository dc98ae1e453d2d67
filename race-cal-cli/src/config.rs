//! Configuration loading and merging
//!
//! Every run needs a date range and three input files. They can come from
//! the command line, from a `config.toml`, or a mix of both; command-line
//! values win.
//!
//! Giving a single `file` instead selects the single-file listing, which
//! prints to stdout and needs only the date range.

use anyhow::{Context, Result};
use race_cal_decoder::{CalError, DateRange, DayRange, TagGrammar};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default report location, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "output.yaml";

/// Application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub grammar: Option<TagGrammar>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Single-file calendar (listing mode)
    pub file: Option<PathBuf>,
    pub events: Option<PathBuf>,
    pub circuits: Option<PathBuf>,
    pub broadcasters: Option<PathBuf>,
}

/// Date bounds as `YYYY/MM/DD` strings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RangeConfig {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub start: Option<String>,
    pub end: Option<String>,
    pub file: Option<PathBuf>,
    pub events: Option<PathBuf>,
    pub circuits: Option<PathBuf>,
    pub broadcasters: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub range: DateRange,
    pub events: PathBuf,
    pub circuits: PathBuf,
    pub broadcasters: PathBuf,
    pub output: PathBuf,
    pub grammar: TagGrammar,
}

/// Settings for a single-file listing run
#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub range: DayRange,
    pub file: PathBuf,
    pub grammar: TagGrammar,
}

/// What a run produces
#[derive(Debug, Clone)]
pub enum RunMode {
    /// Report file from events, circuits and broadcasters
    Report(RunSettings),
    /// Listing of a single-file calendar on stdout
    Listing(ListingSettings),
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

fn required<T>(value: Option<T>, name: &str) -> std::result::Result<T, CalError> {
    value.ok_or_else(|| CalError::Argument(format!("missing --{}", name)))
}

impl AppConfig {
    /// Pick the run mode, then merge command-line overrides into it
    pub fn resolve_mode(self, overrides: Overrides) -> std::result::Result<RunMode, CalError> {
        let file = overrides.file.clone().or_else(|| self.input.file.clone());
        match file {
            Some(file) => {
                if overrides.events.is_some()
                    || overrides.circuits.is_some()
                    || overrides.broadcasters.is_some()
                {
                    return Err(CalError::Argument(
                        "--file cannot be combined with --events/--circuits/--broadcasters"
                            .to_string(),
                    ));
                }
                let start = required(overrides.start.or(self.range.start), "start")?;
                let end = required(overrides.end.or(self.range.end), "end")?;
                Ok(RunMode::Listing(ListingSettings {
                    range: DayRange::parse(&start, &end)?,
                    file,
                    grammar: self.grammar.unwrap_or_default(),
                }))
            }
            None => self.resolve(overrides).map(RunMode::Report),
        }
    }

    /// Merge command-line overrides into this configuration
    pub fn resolve(self, overrides: Overrides) -> std::result::Result<RunSettings, CalError> {
        let start = required(overrides.start.or(self.range.start), "start")?;
        let end = required(overrides.end.or(self.range.end), "end")?;

        Ok(RunSettings {
            range: DateRange::parse(&start, &end)?,
            events: required(overrides.events.or(self.input.events), "events")?,
            circuits: required(overrides.circuits.or(self.input.circuits), "circuits")?,
            broadcasters: required(
                overrides.broadcasters.or(self.input.broadcasters),
                "broadcasters",
            )?,
            output: overrides
                .output
                .or(self.output.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            grammar: self.grammar.unwrap_or_default(),
        })
    }
}
