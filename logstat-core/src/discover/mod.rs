use chrono::NaiveDate;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};
use thiserror::Error;


pub const DEFAULT_LOG_PREFIX: &str = "nginx-access-ui.log-";

const DATE_DIGITS: usize = 8;
const LOG_EXTENSIONS: &[&str] = &["", ".gz", ".br"];

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read log directory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The most recent access log in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestLog {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// Finds the log with the greatest embedded date.
///
/// Only files named `<prefix>YYYYMMDD`, optionally followed by `.gz` or
/// `.br`, are considered; names whose digits are not a calendar date are
/// skipped. When two files carry the same date the greater file name wins.
///
/// # Returns
///
/// `None` when no file matches, including when `log_dir` does not exist.
///
/// # Errors
///
/// - `DiscoverError::Glob` if the resulting pattern cannot be parsed.
/// - `DiscoverError::Read` if `log_dir` exists but cannot be listed.
pub fn find_latest_log(log_dir: &Path, prefix: &str) -> Result<Option<LatestLog>, DiscoverError> {
    let pattern = resolve_glob(log_dir, prefix);

    let candidates = glob(&pattern)
        .map_err(|e| DiscoverError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .collect::<Result<Vec<PathBuf>, _>>()
        .map_err(|e| DiscoverError::Read {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;

    let latest = candidates
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let date = log_date(path.file_name()?.to_str()?, prefix)?;
            Some(LatestLog { path, date })
        })
        .max_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));

    Ok(latest)
}

/// Glob matching every file in `log_dir` that starts with `prefix`.
///
/// Both parts are escaped, so brackets or stars in a directory name are
/// matched literally.
pub fn resolve_glob(log_dir: &Path, prefix: &str) -> String {
    let dir = Pattern::escape(&log_dir.to_string_lossy());
    let file = format!("{}*", Pattern::escape(prefix));
    Path::new(&dir).join(file).to_string_lossy().into_owned()
}

/// The date embedded in a log file name, if the name has the expected shape.
pub fn log_date(file_name: &str, prefix: &str) -> Option<NaiveDate> {
    let rest = file_name.strip_prefix(prefix)?;
    let (digits, extension) = rest.split_at_checked(DATE_DIGITS)?;

    if !digits.bytes().all(|b| b.is_ascii_digit()) || !LOG_EXTENSIONS.contains(&extension) {
        return None;
    }

    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}
