use crate::ingest::constants::{REQUEST_METHODS, UNPARSED_PATH};
use crate::ingest::types::{LogRecord, RawLine};

pub fn parse_raw(line: RawLine) -> LogRecord {
    match line {
        RawLine::Text(text) => parse_line(&text),
        RawLine::Undecodable => LogRecord::malformed(),
    }
}

/// Parse one access log line.
///
/// The response time is the last whitespace-delimited token. The path comes
/// from the first quoted field shaped like `"GET /path HTTP/1.1"`; when there
/// is none the path is [`UNPARSED_PATH`] and `request_ok` is false. The two
/// outcomes are independent of each other.
pub fn parse_line(line: &str) -> LogRecord {
    let response_time = parse_response_time(line);
    let path = parse_request_path(line);

    LogRecord {
        path: path.unwrap_or(UNPARSED_PATH).to_string(),
        response_time: response_time.unwrap_or(0.0),
        parse_ok: response_time.is_some(),
        request_ok: path.is_some(),
    }
}

fn parse_response_time(line: &str) -> Option<f64> {
    let token = line.split_whitespace().next_back()?;
    let value = token.parse::<f64>().ok()?;

    // "-0" parses fine; normalize it so it never shows up as a max.
    (value.is_finite() && value >= 0.0).then_some(value + 0.0)
}

fn parse_request_path(line: &str) -> Option<&str> {
    let mut segments = line.split('"');

    // text before the first quote
    segments.next();

    let mut segments = segments.peekable();
    while let Some(quoted) = segments.next() {
        // an unterminated quote runs to the end of the line
        if segments.peek().is_none() {
            break;
        }

        if let Some(path) = parse_request(quoted) {
            return Some(path);
        }

        // unquoted text between two quoted fields
        segments.next();
    }

    None
}

/// `METHOD path HTTP/version`, where the path runs up to the first
/// whitespace followed by `HTTP/`. Anything after the version is ignored.
///
/// A bare `-` target is nginx's marker for an absent field and is treated as
/// unparsed, so the placeholder group only ever holds unparsed requests.
fn parse_request(field: &str) -> Option<&str> {
    let (method, rest) = field.split_once(char::is_whitespace)?;
    if !REQUEST_METHODS.contains(&method) {
        return None;
    }

    rest.match_indices("HTTP/").find_map(|(at, marker)| {
        let path = rest[..at].strip_suffix(char::is_whitespace)?.trim();
        let version = rest[at + marker.len()..].trim_end();

        if version.is_empty() || path.is_empty() || path == UNPARSED_PATH {
            return None;
        }
        Some(path)
    })
}
