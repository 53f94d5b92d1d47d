// Adapters layer: concrete catalog sources behind the `CatalogSource` port.

pub mod embedded;
pub mod file;
pub mod http;
pub mod schema;

use crate::domain::ports::{CatalogLocation, CatalogSource, ConfigProvider};
use crate::utils::error::Result;

pub use embedded::EmbeddedCatalog;
pub use file::FileCatalog;
pub use http::HttpCatalog;

/// Picks the catalog source named by the configuration.
pub fn source_from_config<C: ConfigProvider>(config: &C) -> Result<Box<dyn CatalogSource>> {
    Ok(match config.catalog_location() {
        CatalogLocation::Embedded => Box::new(EmbeddedCatalog::new()),
        CatalogLocation::File(path) => Box::new(FileCatalog::new(path)),
        CatalogLocation::Remote {
            categories_url,
            items_url,
        } => Box::new(HttpCatalog::new(
            categories_url,
            items_url,
            config.request_timeout(),
        )?),
    })
}
