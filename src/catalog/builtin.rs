use crate::catalog::traits::CatalogSource;
use crate::catalog::Catalog;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../../data/properties.json");

/// Listings compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous variant for callers without a runtime
    pub fn catalog() -> Result<Catalog> {
        Catalog::from_json_str(BUILTIN_CATALOG).context("Built-in catalog is invalid")
    }
}

#[async_trait]
impl CatalogSource for BuiltinSource {
    async fn load(&self) -> Result<Catalog> {
        let catalog = Self::catalog()?;
        info!("Loaded {} built-in properties", catalog.len());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "built-in"
    }
}
