use crate::pipeline::{Analysis, PipelineSettings};
use crate::report::{render_json, render_table};
use crate::stats::{DEFAULT_ERROR_THRESHOLD, ErrorBudget, UnparsedPathPolicy};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Access log to analyze (.gz and .br are decompressed)
    pub file: PathBuf,

    /// Number of paths to show
    #[arg(long, default_value_t = 1000)]
    pub top: usize,

    /// Maximum tolerated fraction of malformed lines
    #[arg(long, default_value_t = DEFAULT_ERROR_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How to treat lines whose request field cannot be read
    #[arg(long, value_enum, default_value_t = UnparsedPathPolicy::Group)]
    pub unparsed: UnparsedPathPolicy,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl AnalyzeArgs {
    pub fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            report_size: self.top,
            budget: ErrorBudget::new(self.threshold),
            unparsed_path: self.unparsed,
        }
    }
}

/// Analyze one file and render the result for stdout.
pub fn analyze(args: &AnalyzeArgs, color: bool) -> Result<String> {
    let analysis = crate::pipeline::analyze(&args.file, &args.settings())?;
    render(&analysis, args.format, color && !args.no_color)
}

pub fn render(analysis: &Analysis, format: OutputFormat, color: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_table(&analysis.rows, &analysis.totals, color),
        OutputFormat::Json => render_json(&analysis.rows)?,
    })
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be within [0, 1], got {value}"))
    }
}
