use crate::conf::{AnalyzerConfig, resolve_config};
use anyhow::Result;
use std::path::Path;

pub fn dump(path: Option<&Path>, yaml: bool) -> Result<()> {
    let cfg = resolve_config(path)?;
    println!("{}", render_dump(&cfg, yaml)?);
    Ok(())
}

/// JSON unless `yaml` is set.
pub fn render_dump(cfg: &AnalyzerConfig, yaml: bool) -> Result<String> {
    if yaml {
        Ok(serde_yaml::to_string(cfg)?)
    } else {
        Ok(serde_json::to_string_pretty(cfg)?)
    }
}
