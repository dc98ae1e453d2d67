//! Race Calendar Decoder Library
//!
//! Reads the tag-delimited calendar inputs (events, circuits, broadcasters)
//! and renders a date-grouped text report.
//!
//! # Architecture
//!
//! - Parses each input into flat records (field name → raw string)
//! - Normalizes event records into typed [`Event`]s
//! - Filters events to an exclusive date range and sorts them by date
//! - Resolves circuits by id and broadcasters by position
//! - Writes the report
//!
//! The [`listing`] module handles the older single-file calendar layout.
//!
//! Argument handling, configuration files and logging setup live in the
//! application layer (race-cal-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use race_cal_decoder::{Calendar, DateRange};
//! use std::path::Path;
//!
//! let mut calendar = Calendar::new();
//! calendar.add_circuits(Path::new("circuits.xml")).unwrap();
//! calendar.add_broadcasters(Path::new("broadcasters.xml")).unwrap();
//! calendar.add_events(Path::new("events.xml")).unwrap();
//!
//! let range = DateRange::parse("2022/04/01", "2022/06/01").unwrap();
//! calendar.write(&range, Path::new("output.yaml")).unwrap();
//! ```

// Public modules
pub mod calendar;
pub mod config;
pub mod formats;
pub mod listing;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod schedule;
pub mod types;

// Re-export main types for convenience
pub use calendar::{Calendar, CalendarStats};
pub use config::TagGrammar;
pub use formats::TagFileParser;
pub use listing::{DayRange, ListingEvent};
pub use registry::{Registry, RegistryStats};
pub use schedule::{parse_date_bound, DateRange};
pub use types::{
    Broadcaster, CalError, Circuit, ConversionFailure, Event, Record, Result,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: ensure we can create a calendar
        let calendar = Calendar::new();
        let stats = calendar.stats();
        assert_eq!(stats.num_events, 0);
    }
}
