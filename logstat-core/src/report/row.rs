use crate::stats::UrlStats;
use serde::{Deserialize, Serialize};

/// One line of the rendered report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_max: f64,
    pub time_avg: f64,
    pub time_med: f64,
    pub time_perc: f64,
}

impl From<&UrlStats> for ReportRow {
    fn from(stats: &UrlStats) -> Self {
        Self {
            url: stats.path.clone(),
            count: stats.count,
            count_perc: stats.count_pct,
            time_sum: stats.time_sum,
            time_max: stats.time_max,
            time_avg: stats.time_avg,
            time_med: stats.time_med,
            time_perc: stats.time_pct,
        }
    }
}
