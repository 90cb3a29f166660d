/// Methods accepted in the quoted request field.
pub const REQUEST_METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

/// Path recorded for lines whose request field could not be parsed.
pub const UNPARSED_PATH: &str = "-";
