use crate::discover::DEFAULT_LOG_PREFIX;
use crate::logging::LoggingConfig;
use crate::pipeline::PipelineSettings;
use crate::report::ReportFormat;
use crate::stats::{DEFAULT_ERROR_THRESHOLD, ErrorBudget, UnparsedPathPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved analyzer configuration.
///
/// Every key has a default, so a file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Number of paths kept in the report.
    #[serde(default = "default_report_size")]
    pub report_size: usize,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,

    /// Maximum tolerated fraction of malformed lines.
    #[serde(default = "default_error_threshold")]
    pub error_threshold: f64,

    #[serde(default)]
    pub unparsed_path: UnparsedPathPolicy,

    #[serde(default)]
    pub report_format: ReportFormat,

    /// HTML template overriding the embedded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_template: Option<PathBuf>,

    /// Receives the Unix time of the last successful run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_file: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_size: default_report_size(),
            report_dir: default_report_dir(),
            log_dir: default_log_dir(),
            log_prefix: default_log_prefix(),
            error_threshold: default_error_threshold(),
            unparsed_path: UnparsedPathPolicy::default(),
            report_format: ReportFormat::default(),
            report_template: None,
            timestamp_file: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            report_size: self.report_size,
            budget: ErrorBudget::new(self.error_threshold),
            unparsed_path: self.unparsed_path,
        }
    }
}

fn default_report_size() -> usize {
    1000
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("./reports")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./log")
}

fn default_log_prefix() -> String {
    DEFAULT_LOG_PREFIX.to_string()
}

fn default_error_threshold() -> f64 {
    DEFAULT_ERROR_THRESHOLD
}
