//! Core types for the race calendar decoder library
//!
//! This module defines the records produced by the tag-file parser and the
//! typed entities built from them: events (after normalization), circuits and
//! broadcasters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;
use std::fmt;

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, CalError>;

/// Why a raw date/time component could not be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionFailure {
    /// The component is not an integer (or a time is not `HH:MM`)
    NotNumeric,
    /// The component is an integer outside the calendar's valid range
    OutOfRange,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionFailure::NotNumeric => write!(f, "not numeric"),
            ConversionFailure::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Errors that can occur while loading, normalizing or reporting a calendar
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Cannot convert field `{field}` (value {value:?}): {reason}")]
    FieldConversion {
        field: String,
        value: String,
        reason: ConversionFailure,
    },

    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A flat record parsed from one block of tagged lines
///
/// Keys are the lowercase tag names; values are the raw text between the
/// opening and closing tag. A repeated tag overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(tag.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields.get(tag).map(String::as_str)
    }

    /// Remove a field and return its value
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.fields.remove(tag)
    }

    /// Remove a field that must be present
    pub fn take(&mut self, tag: &str, kind: &str) -> Result<String> {
        self.remove(tag).ok_or_else(|| {
            CalError::MalformedRecord(format!("{} record is missing field `{}`", kind, tag))
        })
    }

    /// Borrow a field that must be present
    pub fn require(&self, tag: &str, kind: &str) -> Result<&str> {
        self.get(tag).ok_or_else(|| {
            CalError::MalformedRecord(format!("{} record is missing field `{}`", kind, tag))
        })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.fields.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (tag, value) in iter {
            record.insert(tag, value);
        }
        record
    }
}

/// A scheduled event, produced by normalizing an event record
///
/// Can only be built by consuming a [`Record`], so the raw date fields are
/// converted exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event identifier
    pub id: String,
    /// Free-text description
    pub description: String,
    /// Identifier of the circuit hosting the event
    pub location: String,
    /// Comma-separated broadcaster codes (`BR1,BR2`)
    pub broadcaster: String,
    /// Calendar date combined with the start time
    pub date: NaiveDateTime,
    /// End time (same day as `date`)
    pub end: NaiveTime,
    /// Remaining raw fields, carried through untouched
    pub extra: Record,
}

impl Event {
    /// Calendar day of the event, ignoring the start time
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Individual broadcaster codes in the order listed
    pub fn broadcaster_codes(&self) -> impl Iterator<Item = &str> {
        self.broadcaster.split(',')
    }
}

/// A racing circuit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    pub id: String,
    pub name: String,
    /// Human-readable place (city, country)
    pub location: String,
    pub timezone: String,
    /// Racing direction, e.g. `Clockwise`
    pub direction: String,
}

impl TryFrom<Record> for Circuit {
    type Error = CalError;

    fn try_from(mut record: Record) -> Result<Self> {
        Ok(Self {
            id: record.take("id", "circuit")?,
            name: record.take("name", "circuit")?,
            location: record.take("location", "circuit")?,
            timezone: record.take("timezone", "circuit")?,
            direction: record.take("direction", "circuit")?,
        })
    }
}

/// A broadcaster, addressed by its position in the broadcasters file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcaster {
    pub name: String,
    /// Any other fields (e.g. `id`, `cost`), never used for lookup
    pub extra: Record,
}

impl TryFrom<Record> for Broadcaster {
    type Error = CalError;

    fn try_from(mut record: Record) -> Result<Self> {
        let name = record.take("name", "broadcaster")?;
        Ok(Self { name, extra: record })
    }
}
