//! Event record normalization
//!
//! Turns a raw event record into an [`Event`]: `year`/`month`/`day`/`start`
//! become `date`, the raw `end` string becomes a time. The five raw fields are
//! consumed in the process.

use crate::types::{CalError, ConversionFailure, Event, Record, Result};
use chrono::{NaiveDate, NaiveTime};

const KIND: &str = "event";

/// Four-digit years only
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

fn not_numeric(field: &str, value: &str) -> CalError {
    CalError::FieldConversion {
        field: field.to_string(),
        value: value.to_string(),
        reason: ConversionFailure::NotNumeric,
    }
}

fn out_of_range(field: &str, value: &str) -> CalError {
    CalError::FieldConversion {
        field: field.to_string(),
        value: value.to_string(),
        reason: ConversionFailure::OutOfRange,
    }
}

/// Parse an integer component, allowing surrounding whitespace
fn parse_component(field: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| not_numeric(field, value))
}

/// Parse an `HH:MM` (24-hour) time
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime> {
    let (hour, minute) = value
        .split_once(':')
        .ok_or_else(|| not_numeric(field, value))?;
    if minute.contains(':') {
        return Err(not_numeric(field, value));
    }

    let hour = parse_component(field, hour)?;
    let minute = parse_component(field, minute)?;

    let hour = u32::try_from(hour).map_err(|_| out_of_range(field, value))?;
    let minute = u32::try_from(minute).map_err(|_| out_of_range(field, value))?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| out_of_range(field, value))
}

/// Build the calendar date from raw `year`, `month` and `day` strings
pub(crate) fn parse_date(year: &str, month: &str, day: &str) -> Result<NaiveDate> {
    let y = parse_component("year", year)?;
    let m = parse_component("month", month)?;
    let d = parse_component("day", day)?;

    let y = i32::try_from(y)
        .ok()
        .filter(|y| YEARS.contains(y))
        .ok_or_else(|| out_of_range("year", year))?;
    let m = u32::try_from(m)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| out_of_range("month", month))?;
    let d = u32::try_from(d).map_err(|_| out_of_range("day", day))?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| out_of_range("day", day))
}

/// Normalize one event record
pub fn normalize_event(mut record: Record) -> Result<Event> {
    let year = record.take("year", KIND)?;
    let month = record.take("month", KIND)?;
    let day = record.take("day", KIND)?;
    let start = record.take("start", KIND)?;
    let end = record.take("end", KIND)?;

    let date = parse_date(&year, &month, &day)?.and_time(parse_time("start", &start)?);
    let end = parse_time("end", &end)?;

    let event = Event {
        id: record.take("id", KIND)?,
        description: record.take("description", KIND)?,
        location: record.take("location", KIND)?,
        broadcaster: record.take("broadcaster", KIND)?,
        date,
        end,
        extra: record,
    };

    log::debug!("Normalized event {} at {}", event.id, event.date);
    Ok(event)
}

/// Normalize every event record, stopping at the first failure
pub fn normalize_events(records: Vec<Record>) -> Result<Vec<Event>> {
    records.into_iter().map(normalize_event).collect()
}
