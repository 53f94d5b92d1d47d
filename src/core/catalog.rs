use crate::domain::model::{Category, ItemId, MenuItem};
use crate::utils::error::{MenuError, Result};
use std::collections::{HashMap, HashSet};

/// Validated, read-only menu: categories in display order and their items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<MenuItem>,
    by_id: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and items whose category
    /// does not exist. The cart merges lines by item id, so ids must be
    /// unique across all categories.
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> Result<Self> {
        if categories.is_empty() {
            return Err(MenuError::CatalogValidation {
                message: "catalog has no categories".to_string(),
            });
        }

        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(MenuError::CatalogValidation {
                    message: format!("duplicate category id '{}'", category.id),
                });
            }
        }

        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.position.x > 100 || item.position.y > 100 {
                return Err(MenuError::CatalogValidation {
                    message: format!(
                        "item {} ('{}') has position ({}, {}) outside 0..=100",
                        item.id, item.name, item.position.x, item.position.y
                    ),
                });
            }
            if !category_ids.contains(item.category.as_str()) {
                return Err(MenuError::CatalogValidation {
                    message: format!(
                        "item {} ('{}') references unknown category '{}'",
                        item.id, item.name, item.category
                    ),
                });
            }
            if let Some(previous) = by_id.insert(item.id, index) {
                return Err(MenuError::CatalogValidation {
                    message: format!(
                        "item id {} is used by both '{}' and '{}'",
                        item.id, items[previous].name, item.name
                    ),
                });
            }
        }

        Ok(Self {
            categories,
            items,
            by_id,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn first_category(&self) -> &Category {
        // Non-empty by construction.
        &self.categories[0]
    }

    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.by_id.get(&id).map(|&index| &self.items[index])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
