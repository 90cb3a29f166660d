use crate::conf::AnalyzerConfig;
use crate::discover::find_latest_log;
use crate::pipeline::{Analysis, analyze};
use crate::report::{
    ReportFormat, load_template, render_html, render_json, report_exists, report_file_name,
    write_report,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing matching `log_prefix` in `log_dir`.
    NoLogs,
    /// The newest log already has a report.
    AlreadyReported { report: PathBuf },
    Rendered { report: PathBuf, analysis: Analysis },
}

/// Report on the newest log in `log_dir`, unless that was already done.
pub fn run(config: &AnalyzerConfig) -> Result<RunOutcome> {
    let Some(latest) = find_latest_log(&config.log_dir, &config.log_prefix)? else {
        tracing::info!(log_dir = %config.log_dir.display(), "no logs to analyze");
        return Ok(RunOutcome::NoLogs);
    };

    let name = report_file_name(latest.date, config.report_format);
    let report = config.report_dir.join(&name);

    if report_exists(&config.report_dir, latest.date, config.report_format) {
        tracing::info!(
            log = %latest.path.display(),
            report = %report.display(),
            "report already exists, skipping"
        );
        write_timestamp(config.timestamp_file.as_deref())?;
        return Ok(RunOutcome::AlreadyReported { report });
    }

    let template = match config.report_format {
        ReportFormat::Html => Some(load_template(config.report_template.as_deref())?),
        ReportFormat::Json => None,
    };

    let analysis = analyze(&latest.path, &config.pipeline_settings())
        .with_context(|| format!("failed to analyze {}", latest.path.display()))?;

    let contents = match &template {
        Some(template) => render_html(template, &analysis.rows)?,
        None => render_json(&analysis.rows)?,
    };

    let report = write_report(&config.report_dir, &name, &contents)?;
    tracing::info!(report = %report.display(), rows = analysis.rows.len(), "report written");

    write_timestamp(config.timestamp_file.as_deref())?;

    Ok(RunOutcome::Rendered { report, analysis })
}

fn write_timestamp(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let now = Utc::now().timestamp();
    fs::write(path, now.to_string())
        .with_context(|| format!("failed to write timestamp file {}", path.display()))?;

    tracing::debug!(path = %path.display(), timestamp = now, "timestamp updated");
    Ok(())
}
