use crate::adapters::schema::CatalogDocument;
use crate::core::catalog::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalog stored as a JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        CatalogDocument::from_json(&content)?.into_catalog()
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
