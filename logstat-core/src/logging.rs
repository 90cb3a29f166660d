use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Pretty on a terminal, JSON otherwise.
    #[default]
    Auto,
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Append log events to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Resolve `Auto` against the output the events will go to.
///
/// Files always get JSON so they stay machine readable.
pub fn resolve_format(format: LogFormat, to_file: bool, is_terminal: bool) -> LogFormat {
    match format {
        _ if to_file => LogFormat::Json,
        LogFormat::Auto if is_terminal => LogFormat::Pretty,
        LogFormat::Auto => LogFormat::Json,
        other => other,
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When a log file is
/// configured the returned guard must be held until exit so buffered events
/// are flushed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level '{}'", config.level))?;

    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }

            let (dir, name) = match (path.parent(), path.file_name()) {
                (Some(dir), Some(name)) => (dir.to_path_buf(), name.to_owned()),
                _ => return Err(anyhow!("invalid log file path {}", path.display())),
            };

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .json()
                .flatten_event(true)
                .try_init()
                .map_err(|e| anyhow!(e))?;

            Ok(Some(guard))
        }
        None => {
            let format = resolve_format(config.format, false, io::stderr().is_terminal());
            let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

            match format {
                LogFormat::Pretty => builder.pretty().try_init(),
                _ => builder.json().flatten_event(true).try_init(),
            }
            .map_err(|e| anyhow!(e))?;

            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_terminal() {
        assert_eq!(resolve_format(LogFormat::Auto, false, true), LogFormat::Pretty);
        assert_eq!(resolve_format(LogFormat::Auto, false, false), LogFormat::Json);
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(resolve_format(LogFormat::Pretty, false, false), LogFormat::Pretty);
        assert_eq!(resolve_format(LogFormat::Json, false, true), LogFormat::Json);
    }

    #[test]
    fn file_output_is_always_json() {
        assert_eq!(resolve_format(LogFormat::Pretty, true, true), LogFormat::Json);
        assert_eq!(resolve_format(LogFormat::Auto, true, true), LogFormat::Json);
    }
}
