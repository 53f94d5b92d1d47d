use crate::adapters::schema::CatalogDocument;
use crate::core::catalog::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

const MENU_JSON: &str = include_str!("../../data/menu.json");

/// The house menu shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self) -> Result<Catalog> {
        CatalogDocument::from_json(MENU_JSON)?.into_catalog()
    }
}

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    async fn fetch(&self) -> Result<Catalog> {
        self.load()
    }

    fn describe(&self) -> String {
        "embedded menu".to_string()
    }
}
