//! Tag-file parser
//!
//! Reads the line-oriented tag format used by the calendar inputs:
//!
//! ```text
//! <broadcasters>
//!     <broadcaster>
//!         <name>ChannelA</name>
//!     </broadcaster>
//! </broadcasters>
//! ```
//!
//! The first line names the container. Every later line holds at most one
//! tag; a record-start tag opens a new record, any other tag sets a field on
//! the current record. Lines without a lowercase opening tag (closing tags,
//! blank lines) are skipped. There is no nesting, no attributes and no
//! escaping.

use crate::config::TagGrammar;
use crate::types::{CalError, Record, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn tag_re() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"<([a-z]*)>").expect("valid tag regex"))
}

fn data_re() -> &'static Regex {
    static DATA_RE: OnceLock<Regex> = OnceLock::new();
    DATA_RE.get_or_init(|| Regex::new(r">(.*?)<").expect("valid tag data regex"))
}

/// First lowercase opening tag on a line, without the angle brackets
fn find_tag(line: &str) -> Option<&str> {
    tag_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text strictly between the first `>` and the following `<`
fn find_data(line: &str) -> Option<&str> {
    data_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Tag-file parser
pub struct TagFileParser;

impl TagFileParser {
    /// Parse a tag file into its records, in file order
    pub fn parse(path: &Path, grammar: &TagGrammar) -> Result<Vec<Record>> {
        log::info!("Parsing tag file: {:?}", path);

        let content = fs::read_to_string(path)?;
        let records = Self::parse_str(&content, grammar)?;

        log::info!("Parsed {} records from {:?}", records.len(), path);
        Ok(records)
    }

    /// Parse tag-file content already held in memory
    pub fn parse_str(content: &str, grammar: &TagGrammar) -> Result<Vec<Record>> {
        let mut lines = content.lines().enumerate();

        let container = match lines.next() {
            Some((_, first)) => find_tag(first).ok_or_else(|| {
                CalError::MalformedRecord("first line carries no container tag".to_string())
            })?,
            None => {
                return Err(CalError::MalformedRecord(
                    "empty file, missing container line".to_string(),
                ))
            }
        };
        log::debug!("Container tag: <{}>", container);

        let state = lines.try_fold(ParseState::new(container, grammar), |state, (idx, line)| {
            state.feed(idx + 1, line)
        })?;

        Ok(state.records)
    }
}

/// Accumulator threaded through the line fold
///
/// The last element of `records` is the record currently being filled.
struct ParseState<'a> {
    container: &'a str,
    grammar: &'a TagGrammar,
    records: Vec<Record>,
}

impl<'a> ParseState<'a> {
    fn new(container: &'a str, grammar: &'a TagGrammar) -> Self {
        Self {
            container,
            grammar,
            records: Vec::new(),
        }
    }

    /// Consume one line (`line_no` is 1-based)
    fn feed(mut self, line_no: usize, line: &str) -> Result<Self> {
        let Some(tag) = find_tag(line) else {
            log::trace!("line {}: no tag, skipped", line_no);
            return Ok(self);
        };

        if self.grammar.is_record_start(self.container, tag) {
            log::debug!("line {}: record start <{}>", line_no, tag);
            self.records.push(Record::new());
            return Ok(self);
        }

        let data = find_data(line).ok_or_else(|| {
            CalError::MalformedRecord(format!(
                "line {}: cannot locate data for tag <{}>",
                line_no, tag
            ))
        })?;

        let current = self.records.last_mut().ok_or_else(|| {
            CalError::MalformedRecord(format!(
                "line {}: field <{}> appears before any record start",
                line_no, tag
            ))
        })?;
        current.insert(tag, data);

        Ok(self)
    }
}
