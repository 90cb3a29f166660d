use crate::ingest::{LogRecord, RawLine, UNPARSED_PATH, parse_line, parse_raw};

const NGINX_LINE: &str = r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390"#;

#[test]
fn parses_nginx_line() {
    let record = parse_line(NGINX_LINE);

    assert_eq!(
        record,
        LogRecord {
            path: "/api/v2/banner/25019354".to_string(),
            response_time: 0.390,
            parse_ok: true,
            request_ok: true,
        }
    );
}

#[test]
fn parses_minimal_line() {
    let record = parse_line(r#""GET /a HTTP/1.1" 200 ... 0.5"#);

    assert_eq!(record.path, "/a");
    assert_eq!(record.response_time, 0.5);
    assert!(record.parse_ok);
    assert!(record.request_ok);
}

#[test]
fn accepts_every_allowed_method() {
    for method in [
        "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
    ] {
        let line = format!(r#""{method} /x HTTP/1.0" 200 1 0.1"#);
        let record = parse_line(&line);
        assert!(record.request_ok, "{method} should be accepted");
        assert_eq!(record.path, "/x");
    }
}

#[test]
fn unknown_method_yields_placeholder_path() {
    let record = parse_line(r#""FETCH /x HTTP/1.1" 200 1 0.25"#);

    assert_eq!(record.path, UNPARSED_PATH);
    assert!(!record.request_ok);
    // time is still usable
    assert!(record.parse_ok);
    assert_eq!(record.response_time, 0.25);
}

#[test]
fn lowercase_method_is_rejected() {
    let record = parse_line(r#""get /x HTTP/1.1" 200 1 0.25"#);
    assert!(!record.request_ok);
}

#[test]
fn missing_protocol_yields_placeholder_path() {
    let record = parse_line(r#""GET /x" 200 1 0.25"#);
    assert_eq!(record.path, UNPARSED_PATH);
    assert!(!record.request_ok);
}

#[test]
fn bare_protocol_without_version_is_rejected() {
    let record = parse_line(r#""GET /x HTTP/" 200 1 0.25"#);
    assert!(!record.request_ok);
}

#[test]
fn request_field_must_be_quoted() {
    let record = parse_line("GET /x HTTP/1.1 200 1 0.25");
    assert!(!record.request_ok);
    assert!(record.parse_ok);
}

#[test]
fn unterminated_quote_is_not_a_request() {
    let record = parse_line(r#"- - "GET /x HTTP/1.1 0.25"#);
    assert!(!record.request_ok);
    assert!(record.parse_ok);
}

#[test]
fn skips_quoted_fields_that_are_not_requests() {
    let record = parse_line(r#""-" "GET /second HTTP/1.1" 200 0.3"#);
    assert_eq!(record.path, "/second");
}

#[test]
fn keeps_query_string_in_path() {
    let record = parse_line(r#""GET /search?q=rust&page=2 HTTP/2.0" 200 1 1.0"#);
    assert_eq!(record.path, "/search?q=rust&page=2");
}

#[test]
fn non_numeric_time_is_malformed() {
    let record = parse_line(r#""GET /x HTTP/1.1" 200 1 "-""#);

    assert!(!record.parse_ok);
    // request side still parsed independently
    assert!(record.request_ok);
    assert_eq!(record.path, "/x");
}

#[test]
fn negative_time_is_malformed() {
    let record = parse_line(r#""GET /x HTTP/1.1" 200 1 -0.5"#);
    assert!(!record.parse_ok);
}

#[test]
fn non_finite_time_is_malformed() {
    for token in ["NaN", "inf", "-inf", "infinity"] {
        let line = format!(r#""GET /x HTTP/1.1" 200 1 {token}"#);
        assert!(!parse_line(&line).parse_ok, "{token} should be rejected");
    }
}

#[test]
fn negative_zero_is_normalized() {
    let record = parse_line(r#""GET /x HTTP/1.1" 200 1 -0"#);

    assert!(record.parse_ok);
    assert!(record.response_time.is_sign_positive());
}

#[test]
fn zero_time_is_well_formed() {
    let record = parse_line(r#""GET /x HTTP/1.1" 200 1 0.000"#);
    assert!(record.parse_ok);
    assert_eq!(record.response_time, 0.0);
}

#[test]
fn trailing_whitespace_is_ignored() {
    let record = parse_line("\"GET /x HTTP/1.1\" 200 1 0.75   \t");
    assert!(record.parse_ok);
    assert_eq!(record.response_time, 0.75);
}

#[test]
fn empty_line_is_malformed() {
    let record = parse_line("");

    assert!(!record.parse_ok);
    assert!(!record.request_ok);
    assert_eq!(record.path, UNPARSED_PATH);
}

#[test]
fn undecodable_line_is_malformed() {
    let record = parse_raw(RawLine::Undecodable);

    assert_eq!(record, LogRecord::malformed());
    assert!(!record.parse_ok);
}

#[test]
fn text_after_protocol_is_ignored() {
    let record = parse_line(r#""GET /a HTTP/1.1 extra" 200 1 0.2"#);

    assert!(record.request_ok);
    assert_eq!(record.path, "/a");
}

#[test]
fn protocol_marker_inside_path_is_kept() {
    let record = parse_line(r#""GET /proxy/HTTP/1.0/x HTTP/1.1" 200 1 0.2"#);

    assert_eq!(record.path, "/proxy/HTTP/1.0/x");
}

#[test]
fn dash_target_is_treated_as_unparsed() {
    let record = parse_line(r#""GET - HTTP/1.1" 400 0 0.001"#);

    assert!(!record.request_ok);
    assert!(record.parse_ok);
    assert_eq!(record.path, UNPARSED_PATH);
}
