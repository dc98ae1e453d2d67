//! Date-range filtering and ordering of events

use crate::types::{CalError, Event, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// An exclusive date range; both bounds are midnight of their day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Create a range from two instants
    ///
    /// An inverted range is accepted and simply matches nothing.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end <= start {
            log::warn!("Date range {} .. {} is empty", start, end);
        }
        Self { start, end }
    }

    /// Create a range from two `YYYY/MM/DD` arguments
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date_bound(start)?, parse_date_bound(end)?))
    }

    /// Strict containment: events exactly on a bound are excluded
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start < instant && instant < self.end
    }
}

/// Parse a `YYYY/MM/DD` date argument into midnight of that day
pub fn parse_date_bound(value: &str) -> Result<NaiveDateTime> {
    let invalid = || CalError::Argument(format!("expected YYYY/MM/DD, got {:?}", value));

    let mut parts = value.trim().split('/');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
    let m = m.trim().parse::<u32>().map_err(|_| invalid())?;
    let d = d.trim().parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(invalid)
}

/// Keep the events inside `range` and order them by date
///
/// The sort is stable, so events sharing an instant keep their parse order.
pub fn filter_and_sort(events: Vec<Event>, range: &DateRange) -> Vec<Event> {
    let total = events.len();
    let mut kept: Vec<Event> = events
        .into_iter()
        .filter(|event| range.contains(event.date))
        .collect();
    kept.sort_by_key(|event| event.date);

    log::info!("{} of {} events fall within the date range", kept.len(), total);
    kept
}
