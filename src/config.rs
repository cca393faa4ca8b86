//! Runtime configuration for the pricing binary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Names the YAML config file to load
pub const CONFIG_ENV: &str = "PROPERTY_PRICING_CONFIG";
/// Overrides `catalog_path`
pub const CATALOG_ENV: &str = "PROPERTY_PRICING_CATALOG";
/// Overrides `export_dir`
pub const EXPORT_DIR_ENV: &str = "PROPERTY_PRICING_EXPORT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to load; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Directory the quote exports are written to
    pub export_dir: PathBuf,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            export_dir: PathBuf::from("exports"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Invalid configuration")?;
        Ok(config)
    }

    /// Resolve configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        if let Some(catalog) = lookup(CATALOG_ENV) {
            config.catalog_path = Some(PathBuf::from(catalog));
        }
        if let Some(dir) = lookup(EXPORT_DIR_ENV) {
            config.export_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}
