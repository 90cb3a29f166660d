use crate::conf::{AnalyzerConfig, ConfigError, resolve_config};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    let cfg = resolve_config(path)?;

    println!("✔ Config loaded successfully");
    println!("✔ logs: {}/{}*", cfg.log_dir.display(), cfg.log_prefix);
    println!("✔ reports: {}", cfg.report_dir.display());
    println!(
        "✔ top {} paths, error threshold {}",
        cfg.report_size, cfg.error_threshold
    );

    Ok(cfg)
}

pub fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{err}");
    } else {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
}
