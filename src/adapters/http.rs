use crate::adapters::schema::{build_catalog, RawCategory, RawMenuItem};
use crate::core::catalog::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{MenuError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Remote catalog read with two GETs: categories, then items.
///
/// There is no retry and no partial fallback. Any failure, whether
/// transport, status or decoding, becomes [`MenuError::CatalogFetch`].
pub struct HttpCatalog {
    categories_url: String,
    items_url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(categories_url: String, items_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            categories_url,
            items_url,
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making catalog request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MenuError::catalog_fetch(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(MenuError::catalog_fetch(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MenuError::catalog_fetch(format!("GET {}: invalid body: {}", url, e)))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> Result<Catalog> {
        let categories: Vec<RawCategory> = self.get_json(&self.categories_url).await?;
        let items: Vec<RawMenuItem> = self.get_json(&self.items_url).await?;
        tracing::debug!(
            "Fetched {} categories and {} items",
            categories.len(),
            items.len()
        );

        build_catalog(categories, items).map_err(|e| MenuError::catalog_fetch(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("remote {} + {}", self.categories_url, self.items_url)
    }
}
