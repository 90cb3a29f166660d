/// One parsed access log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub path: String,
    /// Seconds; only meaningful when `parse_ok` is set.
    pub response_time: f64,
    /// The trailing response time was a non-negative finite number.
    pub parse_ok: bool,
    /// The quoted request field was found and matched `"METHOD path HTTP/x"`.
    pub request_ok: bool,
}

impl LogRecord {
    /// Record for a line that carries nothing usable.
    pub fn malformed() -> Self {
        Self {
            path: String::new(),
            response_time: 0.0,
            parse_ok: false,
            request_ok: false,
        }
    }
}

/// A line as read from the source, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine {
    Text(String),
    /// The bytes were not valid UTF-8.
    Undecodable,
}
