use crate::assets::Templates;
use crate::conf::DEFAULT_CONFIG_FILE;
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::Path;

pub fn init(path: &Path) -> Result<()> {
    let config_file = path.join(DEFAULT_CONFIG_FILE);

    if path.is_file() {
        bail!("{} exists and is not a directory", path.display());
    }
    if config_file.exists() {
        bail!("{} already exists", config_file.display());
    }

    let contents = Templates::text(DEFAULT_CONFIG_FILE)
        .ok_or_else(|| anyhow!("embedded template {DEFAULT_CONFIG_FILE} is missing"))?;

    for dir in [path.join("log"), path.join("reports")] {
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    fs::write(&config_file, contents)
        .with_context(|| format!("failed to create {}", config_file.display()))?;

    println!("✔ Initialized logstat in {}", path.display());
    println!("✔ Created:");
    println!("  - {DEFAULT_CONFIG_FILE}");
    println!("  - log/");
    println!("  - reports/");

    println!();
    println!("Next steps:");
    println!("  logstat config check");
    println!("  logstat run");

    Ok(())
}
