//! JSON shapes accepted from catalog sources.
//!
//! Remote catalogs send either a numeric `price` in major units or a
//! pre-formatted `formatted_price` string. Both end up as [`Money`].

use crate::core::catalog::Catalog;
use crate::domain::model::{Category, ItemId, ItemSize, MenuItem, Money, Position};
use crate::utils::error::{MenuError, Result};
use crate::utils::money::{money_from_major, parse_formatted_price};
use serde::Deserialize;

/// Ids that may arrive as numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(u64),
    Text(String),
}

impl FlexibleId {
    fn into_string(self) -> String {
        match self {
            FlexibleId::Number(n) => n.to_string(),
            FlexibleId::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: FlexibleId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Category {
            id: raw.id.into_string(),
            name: raw.name,
            icon: raw.icon,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub formatted_price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub category: FlexibleId,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub size: Option<ItemSize>,
}

impl RawMenuItem {
    fn price(&self) -> Result<Money> {
        match (self.price, self.formatted_price.as_deref()) {
            (Some(amount), _) => money_from_major(amount),
            (None, Some(text)) => parse_formatted_price(text),
            (None, None) => Err(MenuError::InvalidPrice {
                value: String::new(),
                reason: format!("item {} has neither price nor formatted_price", self.id),
            }),
        }
    }

    pub fn into_menu_item(self) -> Result<MenuItem> {
        let price = self.price()?;
        Ok(MenuItem {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            price,
            image: self.image.filter(|url| !url.trim().is_empty()),
            category: self.category.into_string(),
            position: self.position.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
        })
    }
}

/// A whole catalog in one document, as embedded or stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<RawCategory>,
    pub items: Vec<RawMenuItem>,
}

impl CatalogDocument {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        build_catalog(self.categories, self.items)
    }
}

pub fn build_catalog(categories: Vec<RawCategory>, items: Vec<RawMenuItem>) -> Result<Catalog> {
    let categories = categories.into_iter().map(Category::from).collect();
    let items = items
        .into_iter()
        .map(RawMenuItem::into_menu_item)
        .collect::<Result<Vec<_>>>()?;
    Catalog::new(categories, items)
}
