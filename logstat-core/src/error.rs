use std::path::PathBuf;
use thiserror::Error;

/// Fatal outcomes of a single pipeline run.
///
/// Per-line parse failures never show up here: they are recovered where they
/// happen and folded into [`PipelineTotals`](crate::stats::PipelineTotals).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read log source {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no well-formed records in log source ({total} lines read)")]
    NoData { total: u64 },

    #[error(
        "malformed line ratio {ratio:.4} exceeds threshold {threshold} ({malformed} of {total} lines)"
    )]
    ParseQuality {
        ratio: f64,
        malformed: u64,
        total: u64,
        threshold: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceOpen,
    NoData,
    ParseQuality,
}

impl PipelineError {
    pub fn source_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceOpen {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceOpen { .. } => ErrorKind::SourceOpen,
            Self::NoData { .. } => ErrorKind::NoData,
            Self::ParseQuality { .. } => ErrorKind::ParseQuality,
        }
    }
}
