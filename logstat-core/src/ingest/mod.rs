//! Access log ingestion
//!
//! Turns a log file into a lazy sequence of [`LogRecord`]s:
//!
//! file (plain / .gz / .br)
//! LineStream
//! RawLine
//! parse_raw
//! LogRecord
//!
//! Nothing in here ever fails because of a bad line. A line that cannot be
//! decoded or whose response time cannot be read becomes a malformed record,
//! and it is up to the aggregator to count it.

mod constants;
mod parse;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use constants::{REQUEST_METHODS, UNPARSED_PATH};
pub use parse::{parse_line, parse_raw};
pub use source::{Compression, LineStream, open};
pub use types::{LogRecord, RawLine};
