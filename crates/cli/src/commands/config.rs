use anyhow::{Context, Result};
use std::path::Path;
use synapsis_engine::EngineConfig;

/// Load the configuration file if one was given, otherwise the defaults.
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

pub fn show_config(config: &EngineConfig) -> Result<()> {
    let json = config
        .to_json_pretty()
        .context("Failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}
