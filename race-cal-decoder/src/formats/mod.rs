//! Input file format parsers
//!
//! The calendar inputs (events, circuits, broadcasters) all share one
//! line-oriented tag grammar.

pub mod tagfile;

// Re-export parser types
pub use tagfile::TagFileParser;
