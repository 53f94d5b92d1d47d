use crate::core::cart::Cart;
use crate::core::catalog::Catalog;
use crate::domain::model::{CategoryId, ItemId, MenuItem};
use crate::utils::error::{MenuError, Result};
use std::fmt;
use std::str::FromStr;

/// A guest gesture on the menu page, expressed as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectCategory(CategoryId),
    ToggleItem(ItemId),
    CloseDetail,
    Add(ItemId),
    AddSelected,
    Increment(ItemId),
    Remove(ItemId),
    ToggleCart,
    SetNavOpen(bool),
}

impl FromStr for Intent {
    type Err = MenuError;

    /// Accepts `add:12`, `remove:12`, `inc:12`, `select:3`, `category:mains`,
    /// `close`, `add-selected`, `cart`, `nav:open` and `nav:close`.
    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason: &str| MenuError::InvalidIntent {
            input: input.to_string(),
            reason: reason.to_string(),
        };
        let parse_id = |raw: &str| {
            raw.trim()
                .parse::<ItemId>()
                .map_err(|_| invalid("expected a numeric item id"))
        };

        let (verb, arg) = match input.trim().split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg.trim())),
            None => (input.trim(), None),
        };

        match (verb, arg) {
            ("add", Some(id)) => Ok(Intent::Add(parse_id(id)?)),
            ("remove", Some(id)) => Ok(Intent::Remove(parse_id(id)?)),
            ("inc", Some(id)) => Ok(Intent::Increment(parse_id(id)?)),
            ("select", Some(id)) => Ok(Intent::ToggleItem(parse_id(id)?)),
            ("category", Some(id)) if !id.is_empty() => Ok(Intent::SelectCategory(id.to_string())),
            ("nav", Some("open")) => Ok(Intent::SetNavOpen(true)),
            ("nav", Some("close")) => Ok(Intent::SetNavOpen(false)),
            ("close", None) => Ok(Intent::CloseDetail),
            ("add-selected", None) => Ok(Intent::AddSelected),
            ("cart", None) => Ok(Intent::ToggleCart),
            _ => Err(invalid("unrecognised operation")),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::SelectCategory(id) => write!(f, "category:{}", id),
            Intent::ToggleItem(id) => write!(f, "select:{}", id),
            Intent::CloseDetail => write!(f, "close"),
            Intent::Add(id) => write!(f, "add:{}", id),
            Intent::AddSelected => write!(f, "add-selected"),
            Intent::Increment(id) => write!(f, "inc:{}", id),
            Intent::Remove(id) => write!(f, "remove:{}", id),
            Intent::ToggleCart => write!(f, "cart"),
            Intent::SetNavOpen(true) => write!(f, "nav:open"),
            Intent::SetNavOpen(false) => write!(f, "nav:close"),
        }
    }
}

/// Everything the menu page keeps between gestures.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSession {
    pub active_category: CategoryId,
    pub selected_item: Option<ItemId>,
    pub cart: Cart,
    pub cart_open: bool,
    pub nav_open: bool,
}

impl MenuSession {
    /// Opens a session on `default_category`, or the catalog's first category.
    pub fn open(catalog: &Catalog, default_category: Option<&str>) -> Result<Self> {
        let active_category = match default_category {
            Some(id) => catalog
                .category(id)
                .ok_or_else(|| MenuError::UnknownCategory { id: id.to_string() })?
                .id
                .clone(),
            None => catalog.first_category().id.clone(),
        };

        Ok(Self {
            active_category,
            selected_item: None,
            cart: Cart::new(),
            cart_open: false,
            nav_open: false,
        })
    }

    /// Applies one intent. On error the session is left unchanged.
    pub fn apply(&mut self, catalog: &Catalog, intent: Intent) -> Result<()> {
        tracing::debug!("Applying intent {}", intent);
        match intent {
            Intent::SelectCategory(id) => {
                if catalog.category(&id).is_none() {
                    return Err(MenuError::UnknownCategory { id });
                }
                self.active_category = id;
                self.selected_item = None;
                self.nav_open = false;
            }
            Intent::ToggleItem(id) => {
                let in_category = catalog
                    .item(id)
                    .is_some_and(|item| item.category == self.active_category);
                if !in_category {
                    return Err(MenuError::UnknownItem { id });
                }
                self.selected_item = if self.selected_item == Some(id) {
                    None
                } else {
                    Some(id)
                };
            }
            Intent::CloseDetail => self.selected_item = None,
            Intent::Add(id) => {
                let item = catalog.item(id).ok_or(MenuError::UnknownItem { id })?;
                self.cart.add(item);
            }
            Intent::AddSelected => {
                if let Some(item) = self.selected_item.and_then(|id| catalog.item(id)) {
                    self.cart.add(item);
                }
            }
            Intent::Increment(id) => {
                if !self.cart.increment(id) {
                    tracing::debug!("Item {} is not in the cart, ignoring increment", id);
                }
            }
            Intent::Remove(id) => self.cart.remove(id),
            Intent::ToggleCart => self.cart_open = !self.cart_open,
            Intent::SetNavOpen(open) => self.nav_open = open,
        }
        Ok(())
    }

    /// The item shown in the detail overlay, if any.
    pub fn detail<'a>(&self, catalog: &'a Catalog) -> Option<&'a MenuItem> {
        self.selected_item.and_then(|id| catalog.item(id))
    }
}
