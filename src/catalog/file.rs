use crate::catalog::traits::CatalogSource;
use crate::catalog::Catalog;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog read from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog> {
        debug!("Reading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let catalog = Catalog::from_json_str(&json)
            .with_context(|| format!("Invalid catalog in {}", self.path.display()))?;

        info!(
            "Loaded {} properties from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
