use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use crate::conf::validation::validate_config;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "logstat.hcl";

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let source = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse_config_str(path, &source)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    validate_config(&config)?;

    tracing::debug!(path = %path.display(), "loaded configuration");

    Ok(config)
}

/// Parse HCL source without semantic validation.
///
/// `origin` only labels errors.
pub fn parse_config_str(origin: &Path, source: &str) -> Result<AnalyzerConfig, ConfigError> {
    hcl::from_str(source).map_err(|e| ConfigError::Parse {
        path: origin.to_path_buf(),
        source: e,
    })
}

/// Pick the configuration for a run.
///
/// An explicit path must exist. Without one, `./logstat.hcl` is used when
/// present and the built-in defaults otherwise. Defaults are validated too.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return load_config(local);
    }

    tracing::debug!("no config file found, using defaults");

    let config = AnalyzerConfig::default();
    validate_config(&config)?;
    Ok(config)
}
