use crate::core::catalog::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Catalog>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Embedded,
    File(String),
    Remote {
        categories_url: String,
        items_url: String,
    },
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_location(&self) -> CatalogLocation;
    fn request_timeout(&self) -> Duration;
    fn currency_symbol(&self) -> &str;
    fn viewport_width(&self) -> u32;
    fn default_category(&self) -> Option<&str>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    async fn fetch(&self) -> Result<Catalog> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
