use crate::error::ErrorKind;
use crate::ingest::{Compression, RawLine, open};
use flate2::Compression as GzLevel;
use flate2::write::GzEncoder;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::tempdir;

fn text(lines: &[&str]) -> Vec<RawLine> {
    lines.iter().map(|l| RawLine::Text(l.to_string())).collect()
}

fn collect(path: &Path) -> Vec<RawLine> {
    open(path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), GzLevel::fast());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn brotli(data: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    let params = brotli::enc::BrotliEncoderParams::default();
    brotli::enc::BrotliCompress(&mut Cursor::new(data), &mut output, &params).unwrap();
    output
}

#[test]
fn compression_is_detected_by_extension() {
    assert_eq!(
        Compression::from_path(Path::new("access.log-20170630.gz")),
        Compression::Gzip
    );
    assert_eq!(
        Compression::from_path(Path::new("access.log-20170630.GZ")),
        Compression::Gzip
    );
    assert_eq!(
        Compression::from_path(Path::new("access.log-20170630.br")),
        Compression::Brotli
    );
    assert_eq!(
        Compression::from_path(Path::new("access.log-20170630")),
        Compression::Plain
    );
    assert_eq!(
        Compression::from_path(Path::new("access.log")),
        Compression::Plain
    );
}

#[test]
fn reads_plain_lines() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "first\nsecond\r\nthird").unwrap();

    // Act
    let lines = collect(&path);

    // Assert
    assert_eq!(lines, text(&["first", "second", "third"]));
}

#[test]
fn keeps_empty_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "a\n\nb\n").unwrap();

    assert_eq!(collect(&path), text(&["a", "", "b"]));
}

#[test]
fn reads_gzip_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.gz");
    fs::write(&path, gzip(b"first\nsecond\n")).unwrap();

    assert_eq!(collect(&path), text(&["first", "second"]));
}

#[test]
fn reads_concatenated_gzip_members() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.gz");
    let mut data = gzip(b"first\n");
    data.extend(gzip(b"second\n"));
    fs::write(&path, data).unwrap();

    assert_eq!(collect(&path), text(&["first", "second"]));
}

#[test]
fn reads_brotli_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.br");
    fs::write(&path, brotli(b"first\nsecond\n")).unwrap();

    assert_eq!(collect(&path), text(&["first", "second"]));
}

#[test]
fn invalid_utf8_line_is_yielded_as_undecodable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, b"ok\n\xff\xfe broken\nalso ok\n").unwrap();

    let lines = collect(&path);

    assert_eq!(
        lines,
        vec![
            RawLine::Text("ok".to_string()),
            RawLine::Undecodable,
            RawLine::Text("also ok".to_string()),
        ]
    );
}

#[test]
fn missing_file_is_source_open_error() {
    let dir = tempdir().unwrap();

    let Err(err) = open(&dir.path().join("nope.log")) else {
        panic!("expected open to fail");
    };

    assert_eq!(err.kind(), ErrorKind::SourceOpen);
}

#[test]
fn corrupt_gzip_is_source_open_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.gz");
    fs::write(&path, b"this is not gzip at all\n").unwrap();

    let result: Result<Vec<_>, _> = open(&path).unwrap().collect();

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceOpen);
}

#[test]
fn stream_is_single_pass_and_fused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "a\nb\n").unwrap();

    let mut stream = open(&path).unwrap();

    assert_eq!(stream.path(), path);
    assert_eq!(stream.by_ref().count(), 2);
    assert_eq!(stream.lines_read(), 2);
    assert!(stream.is_exhausted());
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn stream_stops_after_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.gz");
    fs::write(&path, b"garbage").unwrap();

    let mut stream = open(&path).unwrap();

    assert!(matches!(stream.next(), Some(Err(_))));
    assert!(stream.is_exhausted());
    assert!(stream.next().is_none());
}

#[test]
fn early_drop_releases_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "a\nb\nc\n").unwrap();

    {
        let mut stream = open(&path).unwrap();
        assert!(stream.next().is_some());
    }

    // the file can be removed once the stream is gone
    fs::remove_file(&path).unwrap();
    assert!(!path.exists());
}
