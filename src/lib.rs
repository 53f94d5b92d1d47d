pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{EmbeddedCatalog, FileCatalog, HttpCatalog};
pub use crate::core::cart::Cart;
pub use crate::core::catalog::Catalog;
pub use crate::core::engine::MenuEngine;
pub use crate::core::session::{Intent, MenuSession};
pub use domain::model::{CartLine, Category, ItemId, MenuItem, Money, OrderSummary};
pub use utils::error::{MenuError, Result};
