use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Semantic validation
    //-------------------------------------------------------------------------
    #[error("config validation failed\n{}", IssueList(.issues))]
    Validation { issues: Vec<ValidationIssue> },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("error_threshold must be within [0, 1], got {threshold}")]
    ThresholdOutOfRange { threshold: f64 },

    #[error("report_size must be greater than zero")]
    ZeroReportSize,

    #[error("log_prefix must not be empty")]
    EmptyLogPrefix,

    #[error("log directory does not exist or is not a directory: {path}")]
    MissingLogDir { path: PathBuf },

    #[error("report template does not exist: {path}")]
    MissingTemplate { path: PathBuf },

    #[error("invalid log level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },
}

impl ConfigError {
    /// Short remediation text shown by `config check`.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::ReadFile { .. } => Some(
                "Create a configuration with `logstat config init`, or run without\n\
                 --config to use the built-in defaults.",
            ),
            ConfigError::Parse { .. } => Some(
                "The configuration is HCL. Keys are plain assignments:\n\
                 \n\
                 report_size = 1000\n\
                 log_dir     = \"./log\"",
            ),
            ConfigError::Validation { .. } => None,
        }
    }
}

struct IssueList<'a>(&'a [ValidationIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in self.0 {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}
