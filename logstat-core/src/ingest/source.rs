use crate::error::PipelineError;
use crate::ingest::types::RawLine;
use flate2::read::MultiGzDecoder;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

const BROTLI_BUFFER_SIZE: usize = 4096;

/// Compression of a log source, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
    Brotli,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Self::Gzip,
            Some(ext) if ext.eq_ignore_ascii_case("br") => Self::Brotli,
            _ => Self::Plain,
        }
    }
}

/// Open a log source for a single pass over its lines.
pub fn open(path: &Path) -> Result<LineStream, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::source_open(path, e))?;
    let compression = Compression::from_path(path);

    let reader: Box<dyn BufRead> = match compression {
        Compression::Plain => Box::new(BufReader::new(file)),
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        Compression::Brotli => Box::new(BufReader::new(brotli::Decompressor::new(
            file,
            BROTLI_BUFFER_SIZE,
        ))),
    };

    tracing::debug!(path = %path.display(), ?compression, "opened log source");

    Ok(LineStream {
        path: path.to_path_buf(),
        reader: Some(reader),
        lines_read: 0,
    })
}

/// Lazy, single-pass sequence of lines from one log source.
///
/// The stream owns the underlying file handle. The handle is closed as soon
/// as the stream reaches the end, hits a read error, or is dropped. Once it
/// has returned `None` it keeps returning `None`.
pub struct LineStream {
    path: PathBuf,
    reader: Option<Box<dyn BufRead>>,
    lines_read: u64,
}

impl LineStream {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }
}

impl Iterator for LineStream {
    type Item = Result<RawLine, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut buf = Vec::new();

        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => {
                self.lines_read += 1;
                Some(Ok(decode_line(buf)))
            }
            Err(e) => {
                self.reader = None;
                Some(Err(PipelineError::source_open(&self.path, e)))
            }
        }
    }
}

impl FusedIterator for LineStream {}

fn decode_line(mut buf: Vec<u8>) -> RawLine {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    match String::from_utf8(buf) {
        Ok(text) => RawLine::Text(text),
        Err(_) => RawLine::Undecodable,
    }
}
