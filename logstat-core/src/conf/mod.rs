mod error;
mod loader;
mod types;
mod validation;


pub use error::{ConfigError, ValidationIssue};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_str, resolve_config};
pub use types::AnalyzerConfig;
pub use validation::validate_config;
