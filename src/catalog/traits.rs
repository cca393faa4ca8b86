use crate::catalog::Catalog;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everywhere a catalog can be loaded from.
/// New sources (a CMS export, a remote feed) plug in without touching callers.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    async fn load(&self) -> Result<Catalog>;

    /// Get the name of the source, for logs
    fn source_name(&self) -> &'static str;
}
