//! One pass over one log source
//!
//! LineStream
//! parse_raw
//! Aggregator
//! ErrorBudget
//! select_top
//! Analysis

use crate::error::PipelineError;
use crate::ingest::{self, RawLine, parse_raw};
use crate::report::{ReportRow, select_top};
use crate::stats::{Aggregator, ErrorBudget, PipelineTotals, UnparsedPathPolicy, malformed_ratio};
use std::path::Path;
use std::time::Instant;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    /// Number of rows kept after ranking.
    pub report_size: usize,
    pub budget: ErrorBudget,
    pub unparsed_path: UnparsedPathPolicy,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            report_size: 1000,
            budget: ErrorBudget::default(),
            unparsed_path: UnparsedPathPolicy::default(),
        }
    }
}

/// Ranked rows plus the counters they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub rows: Vec<ReportRow>,
    pub totals: PipelineTotals,
    pub malformed_ratio: f64,
    /// Distinct paths before truncation.
    pub groups: usize,
}

/// Analyze a single log file.
///
/// # Errors
///
/// - `SourceOpen` if the file cannot be opened or fails mid-read.
/// - `ParseQuality` if too many lines are malformed.
/// - `NoData` if nothing well-formed was read.
pub fn analyze(path: &Path, settings: &PipelineSettings) -> Result<Analysis, PipelineError> {
    tracing::info!(path = %path.display(), "analyzing log");

    let mut stream = ingest::open(path)?;
    let analysis = analyze_lines(&mut stream, settings);

    tracing::debug!(
        path = %stream.path().display(),
        lines = stream.lines_read(),
        exhausted = stream.is_exhausted(),
        "finished reading log source"
    );

    analysis
}

/// Analyze an already opened sequence of lines.
pub fn analyze_lines<I>(lines: I, settings: &PipelineSettings) -> Result<Analysis, PipelineError>
where
    I: IntoIterator<Item = Result<RawLine, PipelineError>>,
{
    let started = Instant::now();
    let mut aggregator = Aggregator::new(settings.unparsed_path);

    for line in lines {
        aggregator.push(parse_raw(line?));
    }

    let totals = aggregator.totals();
    tracing::info!(
        records = totals.total_records,
        malformed = totals.malformed_count,
        unparsed_paths = totals.unparsed_path_count,
        groups = aggregator.group_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "parsed log"
    );

    if let Err(e) = settings.budget.check(totals) {
        tracing::warn!(error = %e, "log rejected");
        return Err(e);
    }

    let aggregation = aggregator.finish();
    let totals = aggregation.totals;
    let groups = aggregation.groups.len();

    let rows: Vec<ReportRow> = select_top(aggregation.groups.into_values(), settings.report_size)
        .iter()
        .map(ReportRow::from)
        .collect();

    let ratio = malformed_ratio(totals.malformed_count, totals.total_records);

    tracing::info!(
        malformed_ratio = ratio,
        threshold = settings.budget.threshold(),
        groups,
        rows = rows.len(),
        "selected report rows"
    );

    Ok(Analysis {
        rows,
        totals,
        malformed_ratio: ratio,
        groups,
    })
}
