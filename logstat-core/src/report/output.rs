use crate::report::error::RenderError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// `report-YYYY.MM.DD.<ext>` for the log of the given date.
pub fn report_file_name(date: NaiveDate, format: ReportFormat) -> String {
    format!("report-{}.{}", date.format("%Y.%m.%d"), format.extension())
}

/// Whether the report for `date` has already been rendered.
pub fn report_exists(report_dir: &Path, date: NaiveDate, format: ReportFormat) -> bool {
    report_dir.join(report_file_name(date, format)).is_file()
}

/// Write `contents` to `report_dir/name`.
///
/// The report is written to a temporary file in the same directory first and
/// then moved into place, so a report file is either complete or absent.
pub fn write_report(report_dir: &Path, name: &str, contents: &str) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(report_dir).map_err(|e| RenderError::write(report_dir, e))?;

    let target = report_dir.join(name);

    let mut tmp = NamedTempFile::new_in(report_dir).map_err(|e| RenderError::write(&target, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| RenderError::write(&target, e))?;
    tmp.persist(&target)
        .map_err(|e| RenderError::write(&target, e.error))?;

    Ok(target)
}
