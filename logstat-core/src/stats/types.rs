use crate::stats::median::median;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with a line whose response time is fine but whose request
/// field could not be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnparsedPathPolicy {
    /// Count it as well-formed and group it under the placeholder path.
    #[default]
    Group,
    /// Count it against the error budget and leave it out of every group.
    Malformed,
}

/// Statistics for one request path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlStats {
    pub path: String,
    pub count: u64,
    pub time_sum: f64,
    pub time_max: f64,
    /// Raw samples; sorted ascending once finalized.
    #[serde(skip)]
    pub time_values: Vec<f64>,
    pub time_avg: f64,
    pub time_med: f64,
    pub count_pct: f64,
    pub time_pct: f64,
}

impl UrlStats {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            count: 0,
            time_sum: 0.0,
            time_max: 0.0,
            time_values: Vec::new(),
            time_avg: 0.0,
            time_med: 0.0,
            count_pct: 0.0,
            time_pct: 0.0,
        }
    }

    pub(crate) fn record(&mut self, time: f64) {
        self.count += 1;
        self.time_sum += time;
        self.time_max = self.time_max.max(time);
        self.time_values.push(time);
    }

    pub(crate) fn finalize(&mut self, well_formed: u64, total_time: f64) {
        self.time_avg = if self.count == 0 {
            0.0
        } else {
            self.time_sum / self.count as f64
        };
        self.time_med = median(&mut self.time_values).unwrap_or(0.0);
        self.count_pct = ratio(self.count as f64, well_formed as f64);
        self.time_pct = ratio(self.time_sum, total_time);
    }
}

/// `part / whole`, or 0 when there is nothing to divide by.
fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole } else { 0.0 }
}

/// Counters for one pass over one log source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineTotals {
    /// Every line read, malformed or not.
    pub total_records: u64,
    /// Sum of response times over well-formed records.
    pub total_time: f64,
    pub malformed_count: u64,
    /// Well-formed lines grouped under the placeholder path.
    pub unparsed_path_count: u64,
}

impl PipelineTotals {
    pub fn well_formed(&self) -> u64 {
        self.total_records - self.malformed_count
    }
}

/// Finalized output of the aggregator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub groups: BTreeMap<String, UrlStats>,
    pub totals: PipelineTotals,
}
