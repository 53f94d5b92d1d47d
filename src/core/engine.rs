use crate::core::catalog::Catalog;
use crate::core::session::{Intent, MenuSession};
use crate::domain::model::OrderSummary;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

pub struct MenuEngine<S: CatalogSource> {
    source: S,
    currency_symbol: String,
}

impl<S: CatalogSource> MenuEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_currency(source, "$")
    }

    pub fn with_currency(source: S, currency_symbol: impl Into<String>) -> Self {
        Self {
            source,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub async fn load(&self) -> Result<Catalog> {
        tracing::info!("Loading catalog from {}", self.source.describe());
        let catalog = self.source.fetch().await?;
        tracing::info!(
            "Loaded {} items in {} categories",
            catalog.len(),
            catalog.categories().len()
        );
        Ok(catalog)
    }

    /// Loads the catalog, opens a session and replays `intents` in order.
    /// Stops at the first rejected intent.
    pub async fn run(
        &self,
        default_category: Option<&str>,
        intents: &[Intent],
    ) -> Result<(Catalog, MenuSession)> {
        let catalog = self.load().await?;
        let mut session = MenuSession::open(&catalog, default_category)?;

        for intent in intents {
            session.apply(&catalog, intent.clone())?;
        }

        tracing::info!(
            "Session ended with {} items, total {}",
            session.cart.total_item_count(),
            session.cart.total_price().format(&self.currency_symbol)
        );
        Ok((catalog, session))
    }

    pub fn summarize(&self, session: &MenuSession) -> OrderSummary {
        session.cart.summary(&self.currency_symbol)
    }
}
