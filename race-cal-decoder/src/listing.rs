//! Single-file calendar listing
//!
//! The older calendar layout keeps everything in one file; each event carries
//! its own `timezone`, `location` text and weekday name (`dweek`):
//!
//! ```text
//! <calendar>
//!     <event>
//!         <description>Race</description>
//!         <timezone>EST</timezone>
//!         <location>City</location>
//!         <day>1</day>
//!         <month>5</month>
//!         <year>2022</year>
//!         <dweek>Sunday</dweek>
//!         <start>14:00</start>
//!         <end>16:00</end>
//!     </event>
//! </calendar>
//! ```
//!
//! Days are filtered inclusively and printed as an underlined listing:
//!
//! ```text
//! May 1, 2022 (Sunday)
//! --------------------
//! 02:00 PM to 04:00 PM: Race {{City}} | EST
//! ```

use crate::config::TagGrammar;
use crate::formats::TagFileParser;
use crate::normalize::{parse_date, parse_time};
use crate::types::{Record, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

const KIND: &str = "event";
const CLOCK_FORMAT: &str = "%I:%M %p";

/// An event from a single-file calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEvent {
    pub description: String,
    pub timezone: String,
    pub location: String,
    /// Weekday name as written in the file, never recomputed
    pub weekday: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ListingEvent {
    fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }
}

impl TryFrom<Record> for ListingEvent {
    type Error = crate::types::CalError;

    fn try_from(mut record: Record) -> Result<Self> {
        let year = record.take("year", KIND)?;
        let month = record.take("month", KIND)?;
        let day = record.take("day", KIND)?;
        let start = record.take("start", KIND)?;
        let end = record.take("end", KIND)?;

        Ok(Self {
            description: record.take("description", KIND)?,
            timezone: record.take("timezone", KIND)?,
            location: record.take("location", KIND)?,
            weekday: record.take("dweek", KIND)?,
            date: parse_date(&year, &month, &day)?,
            start: parse_time("start", &start)?,
            end: parse_time("end", &end)?,
        })
    }
}

/// An inclusive range of days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DayRange {
    pub fn new(first: NaiveDate, last: NaiveDate) -> Self {
        if last < first {
            log::warn!("Day range {} ..= {} is empty", first, last);
        }
        Self { first, last }
    }

    /// Create a range from two `YYYY/MM/DD` arguments
    pub fn parse(first: &str, last: &str) -> Result<Self> {
        Ok(Self::new(
            crate::schedule::parse_date_bound(first)?.date(),
            crate::schedule::parse_date_bound(last)?.date(),
        ))
    }

    /// Both ends are included
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first <= day && day <= self.last
    }
}

/// Load every event of a single-file calendar, in file order
pub fn load_listing(path: &Path, grammar: &TagGrammar) -> Result<Vec<ListingEvent>> {
    TagFileParser::parse(path, grammar)?
        .into_iter()
        .map(ListingEvent::try_from)
        .collect()
}

/// Keep the events on days inside `range`, ordered by day then start time
pub fn select(events: Vec<ListingEvent>, range: &DayRange) -> Vec<ListingEvent> {
    let mut kept: Vec<ListingEvent> = events
        .into_iter()
        .filter(|event| range.contains(event.date))
        .collect();
    kept.sort_by_key(ListingEvent::starts_at);
    kept
}

/// Render the listing; day groups are separated by a blank line
///
/// The listing carries no trailing newline.
pub fn render_listing(events: &[ListingEvent]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut last_day = None;

    for event in events {
        if last_day != Some(event.date) {
            if last_day.is_some() {
                lines.push(String::new());
            }
            let heading = format!(
                "{} ({})",
                event.date.format("%B %-d, %Y"),
                event.weekday
            );
            let underline = "-".repeat(heading.chars().count());
            lines.push(heading);
            lines.push(underline);
            last_day = Some(event.date);
        }

        lines.push(format!(
            "{} to {}: {} {{{{{}}}}} | {}",
            event.start.format(CLOCK_FORMAT),
            event.end.format(CLOCK_FORMAT),
            event.description,
            event.location,
            event.timezone
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CalError, ConversionFailure};

    fn record(description: &str, day: &str, weekday: &str, start: &str) -> Record {
        [
            ("description", description),
            ("timezone", "EST"),
            ("location", "City"),
            ("day", day),
            ("month", "5"),
            ("year", "2022"),
            ("dweek", weekday),
            ("start", start),
            ("end", "16:00"),
        ]
        .into_iter()
        .collect()
    }

    fn event(description: &str, day: &str, weekday: &str, start: &str) -> ListingEvent {
        ListingEvent::try_from(record(description, day, weekday, start)).unwrap()
    }

    #[test]
    fn test_event_from_record() {
        let event = event("Race", "1", "Sunday", "14:00");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2022, 5, 1).unwrap());
        assert_eq!(event.start, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(event.weekday, "Sunday");
    }

    #[test]
    fn test_event_errors() {
        let mut missing = record("Race", "1", "Sunday", "14:00");
        missing.remove("dweek");
        assert!(matches!(
            ListingEvent::try_from(missing),
            Err(CalError::MalformedRecord(_))
        ));

        let bad_day = record("Race", "32", "Sunday", "14:00");
        assert!(matches!(
            ListingEvent::try_from(bad_day),
            Err(CalError::FieldConversion { reason: ConversionFailure::OutOfRange, .. })
        ));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DayRange::parse("2022/05/01", "2022/05/02").unwrap();
        let events = vec![
            event("last", "2", "Monday", "23:00"),
            event("outside", "3", "Tuesday", "00:00"),
            event("first", "1", "Sunday", "00:00"),
        ];

        let kept = select(events, &range);
        let names: Vec<&str> = kept.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["first", "last"]);
    }

    #[test]
    fn test_same_day_ordered_by_start() {
        let range = DayRange::parse("2022/01/01", "2022/12/31").unwrap();
        let events = vec![
            event("late", "1", "Sunday", "18:00"),
            event("early", "1", "Sunday", "09:30"),
        ];

        let kept = select(events, &range);
        assert_eq!(kept[0].description, "early");
        assert_eq!(kept[1].description, "late");
    }

    #[test]
    fn test_render_listing() {
        let events = vec![
            event("Practice", "1", "Sunday", "09:00"),
            event("Race", "1", "Sunday", "14:00"),
            event("Qualifying", "12", "Thursday", "10:15"),
        ];

        let expected = "May 1, 2022 (Sunday)
--------------------
09:00 AM to 04:00 PM: Practice {{City}} | EST
02:00 PM to 04:00 PM: Race {{City}} | EST

May 12, 2022 (Thursday)
-----------------------
10:15 AM to 04:00 PM: Qualifying {{City}} | EST";
        assert_eq!(render_listing(&events), expected);
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_listing(&[]), "");
    }
}
