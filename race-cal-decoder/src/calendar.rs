//! Main calendar API
//!
//! The [`Calendar`] struct is the entry point for loading the three input
//! files and producing the report.

use crate::config::TagGrammar;
use crate::formats::TagFileParser;
use crate::normalize::normalize_events;
use crate::registry::{Registry, RegistryStats};
use crate::report::{render_report, write_report};
use crate::schedule::{filter_and_sort, DateRange};
use crate::types::{Broadcaster, Circuit, Event, Result};
use std::path::Path;

/// Loaded events plus the reference data they point at
pub struct Calendar {
    grammar: TagGrammar,
    /// Normalized events, in parse order
    events: Vec<Event>,
    registry: Registry,
}

impl Calendar {
    /// Create an empty calendar using the default tag grammar
    pub fn new() -> Self {
        Self::with_grammar(TagGrammar::default())
    }

    /// Create an empty calendar with a custom tag grammar
    pub fn with_grammar(grammar: TagGrammar) -> Self {
        Self {
            grammar,
            events: Vec::new(),
            registry: Registry::new(),
        }
    }

    /// Load and normalize an events file
    ///
    /// # Example
    /// ```no_run
    /// use race_cal_decoder::Calendar;
    /// use std::path::Path;
    ///
    /// let mut calendar = Calendar::new();
    /// calendar.add_events(Path::new("events.xml")).unwrap();
    /// ```
    pub fn add_events(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading events file: {:?}", path);

        let records = TagFileParser::parse(path, &self.grammar)?;
        let events = normalize_events(records)?;
        self.events.extend(events);

        log::info!("Events file loaded successfully: {:?}", path);
        Ok(())
    }

    /// Load a circuits file
    pub fn add_circuits(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading circuits file: {:?}", path);

        for record in TagFileParser::parse(path, &self.grammar)? {
            self.registry.add_circuit(Circuit::try_from(record)?);
        }

        log::info!("Circuits file loaded successfully: {:?}", path);
        Ok(())
    }

    /// Load a broadcasters file
    ///
    /// Broadcaster codes are positional, so files loaded later continue the
    /// numbering of earlier ones.
    pub fn add_broadcasters(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading broadcasters file: {:?}", path);

        for record in TagFileParser::parse(path, &self.grammar)? {
            self.registry.add_broadcaster(Broadcaster::try_from(record)?);
        }

        log::info!("Broadcasters file loaded successfully: {:?}", path);
        Ok(())
    }

    /// Add an already normalized event
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Events strictly inside `range`, ordered by date
    pub fn schedule(&self, range: &DateRange) -> Vec<Event> {
        filter_and_sort(self.events.clone(), range)
    }

    /// Render the report for `range` in memory
    pub fn render(&self, range: &DateRange) -> Result<String> {
        render_report(&self.schedule(range), &self.registry)
    }

    /// Render the report for `range` and write it to `path`
    pub fn write(&self, range: &DateRange, path: &Path) -> Result<()> {
        write_report(path, &self.schedule(range), &self.registry)
    }

    /// Get statistics about the loaded data
    pub fn stats(&self) -> CalendarStats {
        let RegistryStats {
            num_circuits,
            num_broadcasters,
        } = self.registry.stats();

        CalendarStats {
            num_events: self.events.len(),
            num_circuits,
            num_broadcasters,
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStats {
    /// Total number of normalized events
    pub num_events: usize,
    /// Total number of circuits
    pub num_circuits: usize,
    /// Total number of broadcasters
    pub num_broadcasters: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalError;

    #[test]
    fn test_calendar_creation() {
        let calendar = Calendar::new();
        let stats = calendar.stats();
        assert_eq!(stats.num_events, 0);
        assert_eq!(stats.num_circuits, 0);
        assert_eq!(stats.num_broadcasters, 0);
    }

    #[test]
    fn test_missing_events_file() {
        let mut calendar = Calendar::new();
        let result = calendar.add_events(Path::new("missing-events.xml"));
        assert!(matches!(result, Err(CalError::Io(_))));
    }

    #[test]
    fn test_empty_calendar_renders_header_only() {
        let calendar = Calendar::new();
        let range = DateRange::parse("2022/01/01", "2023/01/01").unwrap();
        assert_eq!(calendar.render(&range).unwrap(), "events:");
    }
}
