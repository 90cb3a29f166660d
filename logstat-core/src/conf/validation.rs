use crate::conf::error::{ConfigError, ValidationIssue};
use crate::conf::types::AnalyzerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct ValidationCtx {
    issues: Vec<ValidationIssue>,
}

impl ValidationCtx {
    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    fn into_result(self) -> Result<(), ConfigError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation {
                issues: self.issues,
            })
        }
    }
}

/// Check a parsed config, reporting every problem at once.
pub fn validate_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    let mut ctx = ValidationCtx::default();

    if !(0.0..=1.0).contains(&config.error_threshold) {
        ctx.push(ValidationIssue::ThresholdOutOfRange {
            threshold: config.error_threshold,
        });
    }

    if config.report_size == 0 {
        ctx.push(ValidationIssue::ZeroReportSize);
    }

    if config.log_prefix.is_empty() {
        ctx.push(ValidationIssue::EmptyLogPrefix);
    }

    if !config.log_dir.is_dir() {
        ctx.push(ValidationIssue::MissingLogDir {
            path: config.log_dir.clone(),
        });
    }

    if let Some(template) = config.report_template.as_ref().filter(|t| !t.is_file()) {
        ctx.push(ValidationIssue::MissingTemplate {
            path: template.clone(),
        });
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.level) {
        ctx.push(ValidationIssue::InvalidLogLevel {
            level: config.logging.level.clone(),
            reason: e.to_string(),
        });
    }

    ctx.into_result()
}
