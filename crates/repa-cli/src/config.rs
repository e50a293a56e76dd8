//! Configuration management for Repa CLI.

use anyhow::{Context, Result};
use repa::prelude::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "repa.toml";

/// Repa project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Default input files, overridden by `--triples` and `--specific`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_top")]
    pub top: usize,
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions
fn default_top() -> usize { 20 }
fn default_format() -> String { "csv".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top: default_top(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Load config from repa.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "using config file");
                Self::load_from(&path)
            }
            None => {
                debug!("no {CONFIG_FILE} found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .engine
            .validate()
            .with_context(|| format!("Invalid engine settings in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find repa.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
