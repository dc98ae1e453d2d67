//! Calendar report generation
//!
//! Produces the indented, YAML-looking text report:
//!
//! ```text
//! events:
//!   - 01-05-2022:
//!     - id: E1
//!       description: Race
//!       circuit: Speedway (CW)
//!       location: City
//!       when: 02:00 PM - 04:00 PM Sunday, May 01, 2022 (EST)
//!       broadcasters:
//!         - ChannelA
//! ```
//!
//! The output only looks like YAML; values are written verbatim without
//! quoting. The report carries no trailing newline.

use crate::registry::Registry;
use crate::types::{Event, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

const HEADING_FORMAT: &str = "%d-%m-%Y:";
const CLOCK_FORMAT: &str = "%I:%M %p";
const DAY_FORMAT: &str = "%A, %B %d, %Y";

/// Accumulates report lines in memory
struct ReportWriter {
    out: String,
    last_day: Option<NaiveDate>,
}

impl ReportWriter {
    fn new() -> Self {
        Self {
            out: String::from("events:"),
            last_day: None,
        }
    }

    fn line(&mut self, indent: usize, text: &str) {
        self.out.push('\n');
        self.out.extend(std::iter::repeat(' ').take(indent));
        self.out.push_str(text);
    }

    fn write_event(&mut self, event: &Event, registry: &Registry) -> Result<()> {
        let circuit = registry.circuit_for(event)?;
        let broadcasters = registry.broadcasters_for(event)?;

        let day = event.day();
        if self.last_day != Some(day) {
            self.line(2, &format!("- {}", event.date.format(HEADING_FORMAT)));
            self.last_day = Some(day);
        }

        self.line(4, &format!("- id: {}", event.id));
        self.line(6, &format!("description: {}", event.description));
        self.line(6, &format!("circuit: {} ({})", circuit.name, circuit.direction));
        self.line(6, &format!("location: {}", circuit.location));
        self.line(
            6,
            &format!(
                "when: {} - {} {} ({})",
                event.date.format(CLOCK_FORMAT),
                event.end.format(CLOCK_FORMAT),
                event.date.format(DAY_FORMAT),
                circuit.timezone
            ),
        );
        self.line(6, "broadcasters:");
        for broadcaster in broadcasters {
            self.line(8, &format!("- {}", broadcaster.name));
        }

        Ok(())
    }
}

/// Render the report for already filtered and sorted events
pub fn render_report(events: &[Event], registry: &Registry) -> Result<String> {
    let mut writer = ReportWriter::new();
    for event in events {
        writer.write_event(event, registry)?;
    }
    Ok(writer.out)
}

/// Render the report and write it to `path`, replacing any existing file
///
/// Nothing is written unless every event resolves.
pub fn write_report(path: &Path, events: &[Event], registry: &Registry) -> Result<()> {
    let report = render_report(events, registry)?;
    fs::write(path, report)?;
    log::info!("Wrote {} events to {:?}", events.len(), path);
    Ok(())
}
